mod common;

use common::{offline_coordinator, toronto_query, valid_hotels_json, ScriptedCompletion};

#[actix_web::test]
async fn test_fully_failing_external_layer_still_completes() {
    let coordinator = offline_coordinator(ScriptedCompletion::failing());

    let result = coordinator.generate_itinerary(&toronto_query()).await;

    assert_eq!(result.destination, "Toronto");
    assert_eq!(result.hotels.hotels.len(), 3);
    assert_eq!(result.restaurants.restaurants.len(), 5);
    assert_eq!(result.itinerary.itinerary.len(), 3);
    assert!(result
        .weather
        .description
        .contains("temporarily unavailable for Toronto"));
}

#[actix_web::test]
async fn test_aggregate_always_carries_every_section() {
    let coordinator = offline_coordinator(ScriptedCompletion::failing());

    let result = coordinator.generate_itinerary(&toronto_query()).await;
    let value = serde_json::to_value(&result).unwrap();

    for key in [
        "destination",
        "weather",
        "hotels",
        "restaurants",
        "itinerary",
        "transportation",
    ] {
        assert!(value.get(key).is_some(), "missing section {}", key);
    }

    let transportation = &value["transportation"]["transportation"];
    for section in ["flights", "ground_transportation", "local_transit"] {
        assert!(
            transportation.get(section).is_some(),
            "missing transportation section {}",
            section
        );
    }
}

#[actix_web::test]
async fn test_itinerary_day_count_follows_query() {
    let coordinator = offline_coordinator(ScriptedCompletion::failing());

    let query = wayfarer_api::models::query::DestinationQuery::new(
        "Toronto",
        5,
        Default::default(),
    );
    let result = coordinator.generate_itinerary(&query).await;

    assert_eq!(result.itinerary.itinerary.len(), 5);
    let days: Vec<u32> = result.itinerary.itinerary.iter().map(|d| d.day).collect();
    assert_eq!(days, vec![1, 2, 3, 4, 5]);
}

#[actix_web::test]
async fn test_one_healthy_domain_does_not_degrade_with_the_rest() {
    // The canned response satisfies the hotel schema only, so hotels come
    // from the model while every other domain falls back.
    let coordinator = offline_coordinator(ScriptedCompletion::canned(valid_hotels_json()));

    let result = coordinator.generate_itinerary(&toronto_query()).await;

    assert_eq!(result.hotels.hotels[0].name, "Fairmont Royal York");
    assert_eq!(result.restaurants.restaurants.len(), 5);
    assert_eq!(
        result.restaurants.restaurants[0].name,
        "The Local Bistro Toronto"
    );
}

#[actix_web::test]
async fn test_route_lookup_is_total_when_directions_unreachable() {
    let coordinator = offline_coordinator(ScriptedCompletion::failing());

    let routes = coordinator
        .get_routes("221B Baker Street, London", "Toronto City Hall")
        .await;

    assert_eq!(routes.routes.len(), 1);
    assert_eq!(routes.routes[0].mode, "driving");
    assert_eq!(routes.routes[0].description, "Route calculation unavailable");
    assert!(!routes.flight_required);
}

#[actix_web::test]
async fn test_route_lookup_with_empty_address_returns_fallback() {
    let coordinator = offline_coordinator(ScriptedCompletion::failing());

    let routes = coordinator.get_routes("", "Toronto City Hall").await;

    assert_eq!(routes.routes.len(), 1);
    assert_eq!(routes.routes[0].distance, "Unknown");
}
