use serde_json::Value;

use crate::models::query::DestinationQuery;
use crate::models::transportation::TransportationPayload;
use crate::services::cache::cache_key;
use crate::services::fallback;
use crate::services::recommendation_service::RecommendationDomain;
use crate::services::validation;

const PROMPT_TEMPLATE: &str = r#"
Generate transportation recommendations for {destination} including flights, ground transportation, and local transit.
Return ONLY JSON in this exact format:

{
  "transportation": {
    "flights": {
      "major_airports": ["Airport Name (CODE)", "Airport Name (CODE)"],
      "typical_flight_time": "X hours from major cities",
      "airlines": ["Airline 1", "Airline 2", "Airline 3"],
      "booking_tips": "Best booking advice"
    },
    "ground_transportation": {
      "from_airport": [
        {
          "method": "Taxi",
          "duration": "30 minutes",
          "cost": "$40-60 CAD",
          "description": "Door-to-door service"
        },
        {
          "method": "Public Transit",
          "duration": "45 minutes",
          "cost": "$3-5 CAD",
          "description": "Airport express train/bus"
        },
        {
          "method": "Ride Share",
          "duration": "25-40 minutes",
          "cost": "$35-50 CAD",
          "description": "Uber/Lyft service"
        }
      ],
      "car_rental": {
        "available": true,
        "companies": ["Company 1", "Company 2", "Company 3"],
        "cost": "$50-80 CAD per day",
        "parking_info": "Downtown parking $20-30 CAD per day"
      }
    },
    "local_transit": {
      "public_system": {
        "name": "Transit System Name",
        "types": ["Subway", "Bus", "Streetcar"],
        "day_pass": "$12-15 CAD",
        "single_ride": "$3-4 CAD",
        "coverage": "Excellent city coverage"
      },
      "walking": {
        "walkability_score": 85,
        "description": "Very walkable downtown core"
      },
      "bike_sharing": {
        "available": true,
        "system_name": "Bike Share System",
        "cost": "$7-12 CAD per day"
      }
    }
  }
}

Only return valid JSON, no additional text.
"#;

pub struct TransportationDomain;

impl RecommendationDomain for TransportationDomain {
    type Payload = TransportationPayload;

    const NAME: &'static str = "transportation";
    const CACHE_TTL_SECS: i64 = 86400;
    const MAX_NEW_TOKENS: u32 = 512;

    fn cache_key(query: &DestinationQuery) -> String {
        cache_key("transportation", &query.destination)
    }

    fn prompt(query: &DestinationQuery) -> String {
        PROMPT_TEMPLATE.replace("{destination}", &query.destination)
    }

    fn validate(value: &Value) -> bool {
        validation::validate_transportation(value)
    }

    fn fallback(query: &DestinationQuery) -> TransportationPayload {
        fallback::fallback_transportation(&query.destination)
    }
}
