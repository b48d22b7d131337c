use serde_json::Value;

use crate::models::query::DestinationQuery;
use crate::models::restaurant::RestaurantsPayload;
use crate::services::cache::cache_key;
use crate::services::fallback;
use crate::services::recommendation_service::RecommendationDomain;
use crate::services::validation;

const PROMPT_TEMPLATE: &str = r#"
List 5 top-rated restaurants in {destination} suitable for event attendees.
Return ONLY JSON in this exact format:

{
  "restaurants": [
    {
      "name": "Restaurant Name",
      "cuisine": "Cuisine Type",
      "description": "Short description of the restaurant",
      "rating": 4.7,
      "price_range": "$$",
      "address": "Street Address or Area",
      "features": ["Outdoor Seating", "Vegetarian Options", "Reservations"],
      "website": "https://restaurant.com"
    }
  ]
}

Only return valid JSON, no additional text.
"#;

pub struct RestaurantDomain;

impl RecommendationDomain for RestaurantDomain {
    type Payload = RestaurantsPayload;

    const NAME: &'static str = "restaurant";
    const CACHE_TTL_SECS: i64 = 86400;
    const MAX_NEW_TOKENS: u32 = 512;

    fn cache_key(query: &DestinationQuery) -> String {
        cache_key("restaurants", &query.destination)
    }

    fn prompt(query: &DestinationQuery) -> String {
        PROMPT_TEMPLATE.replace("{destination}", &query.destination)
    }

    fn validate(value: &Value) -> bool {
        validation::validate_restaurants(value)
    }

    fn fallback(query: &DestinationQuery) -> RestaurantsPayload {
        fallback::fallback_restaurants(&query.destination)
    }
}
