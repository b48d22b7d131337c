//! Structural checks applied to decoded generative responses before they are
//! trusted. These are presence/shape checks only; nothing semantic (a rating
//! of 17.0 passes). Each validator returns `false` on any mismatch and never
//! panics, so a garbage response simply routes the provider to its fallback.

use serde_json::Value;

fn has_fields(value: &Value, fields: &[&str]) -> bool {
    match value.as_object() {
        Some(map) => fields.iter().all(|field| map.contains_key(*field)),
        None => false,
    }
}

pub fn validate_hotels(value: &Value) -> bool {
    let hotels = match value.get("hotels").and_then(Value::as_array) {
        Some(hotels) => hotels,
        None => return false,
    };

    hotels.iter().all(|hotel| {
        has_fields(
            hotel,
            &["name", "description", "rating", "price_category", "location"],
        )
    })
}

pub fn validate_restaurants(value: &Value) -> bool {
    let restaurants = match value.get("restaurants").and_then(Value::as_array) {
        Some(restaurants) => restaurants,
        None => return false,
    };

    restaurants.iter().all(|restaurant| {
        has_fields(
            restaurant,
            &[
                "name",
                "cuisine",
                "description",
                "rating",
                "price_range",
                "address",
            ],
        )
    })
}

pub fn validate_itinerary(value: &Value) -> bool {
    let days = match value.get("itinerary").and_then(Value::as_array) {
        Some(days) => days,
        None => return false,
    };

    days.iter().all(|day| {
        if !has_fields(day, &["day", "location", "activities"]) {
            return false;
        }

        let activities = match day.get("activities").and_then(Value::as_array) {
            Some(activities) => activities,
            None => return false,
        };

        activities
            .iter()
            .all(|activity| has_fields(activity, &["time", "description"]))
    })
}

pub fn validate_transportation(value: &Value) -> bool {
    match value.get("transportation") {
        Some(transportation) => has_fields(
            transportation,
            &["flights", "ground_transportation", "local_transit"],
        ),
        None => false,
    }
}
