use serde_json::Value;

use crate::models::itinerary::ItineraryPayload;
use crate::models::query::DestinationQuery;
use crate::services::cache::cache_key;
use crate::services::fallback;
use crate::services::recommendation_service::RecommendationDomain;
use crate::services::validation;

const PROMPT_TEMPLATE: &str = r#"
Create a {days}-day itinerary for {destination} focusing on popular attractions and activities.
Return ONLY JSON in this exact format:

{
  "itinerary": [
    {
      "day": 1,
      "location": "Area Name",
      "activities": [
        {
          "time": "8:00 AM",
          "description": "Start your day with breakfast at a local café"
        },
        {
          "time": "10:00 AM",
          "description": "Visit the main attraction"
        }
      ]
    }
  ],
  "highlights": [
    "Top attraction 1",
    "Top attraction 2",
    "Top attraction 3"
  ],
  "trip_info": {
    "duration": "{days} days",
    "category": "tourism",
    "price_range": "{price_range}"
  }
}

Only return valid JSON, no additional text.
"#;

pub struct ItineraryDomain;

impl RecommendationDomain for ItineraryDomain {
    type Payload = ItineraryPayload;

    const NAME: &'static str = "itinerary";
    const CACHE_TTL_SECS: i64 = 86400;
    // Day-by-day plans are the largest structured response of the four
    // generative domains.
    const MAX_NEW_TOKENS: u32 = 1024;

    fn cache_key(query: &DestinationQuery) -> String {
        cache_key(
            "itinerary",
            &format!("{}:{}", query.destination, query.days),
        )
    }

    fn prompt(query: &DestinationQuery) -> String {
        PROMPT_TEMPLATE
            .replace("{destination}", &query.destination)
            .replace("{days}", &query.days.to_string())
            .replace("{price_range}", query.cost_tier.price_range_hint())
    }

    fn validate(value: &Value) -> bool {
        validation::validate_itinerary(value)
    }

    fn fallback(query: &DestinationQuery) -> ItineraryPayload {
        fallback::fallback_itinerary(&query.destination, query.days)
    }
}
