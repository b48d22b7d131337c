use serde_json::Value;

use crate::models::hotel::HotelsPayload;
use crate::models::query::DestinationQuery;
use crate::services::cache::cache_key;
use crate::services::fallback;
use crate::services::recommendation_service::RecommendationDomain;
use crate::services::validation;

const PROMPT_TEMPLATE: &str = r#"
Generate a list of 5 hotels in {destination} suitable for event attendees.
Return ONLY JSON in this exact format:

{
  "hotels": [
    {
      "name": "Hotel Name",
      "description": "Brief description of the hotel",
      "rating": 4.5,
      "price_category": "Luxury",
      "location": "Hotel address or neighborhood",
      "amenities": ["Free WiFi", "Spa", "Gym"],
      "booking_url": "https://booking.com"
    }
  ]
}

Only return valid JSON, no additional text.
"#;

pub struct HotelDomain;

impl RecommendationDomain for HotelDomain {
    type Payload = HotelsPayload;

    const NAME: &'static str = "hotel";
    const CACHE_TTL_SECS: i64 = 86400;
    const MAX_NEW_TOKENS: u32 = 512;

    fn cache_key(query: &DestinationQuery) -> String {
        cache_key("hotels", &query.destination)
    }

    fn prompt(query: &DestinationQuery) -> String {
        PROMPT_TEMPLATE.replace("{destination}", &query.destination)
    }

    fn validate(value: &Value) -> bool {
        validation::validate_hotels(value)
    }

    fn fallback(query: &DestinationQuery) -> HotelsPayload {
        fallback::fallback_hotels(&query.destination)
    }
}
