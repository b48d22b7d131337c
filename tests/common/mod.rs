use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use wayfarer_api::models::query::{CostTier, DestinationQuery};
use wayfarer_api::services::generative_service::{GenerativeError, TextCompletion};
use wayfarer_api::services::itinerary_coordinator::ItineraryCoordinator;
use wayfarer_api::services::transportation_service::TransportationService;
use wayfarer_api::services::weather_service::WeatherProvider;

/// Completion stub: returns the canned response when one is set, otherwise a
/// 503 status error. Counts invocations either way.
pub struct ScriptedCompletion {
    response: Option<String>,
    calls: AtomicUsize,
}

impl ScriptedCompletion {
    pub fn canned(response: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            response: Some(response.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            response: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextCompletion for ScriptedCompletion {
    async fn complete(
        &self,
        _prompt: &str,
        _max_new_tokens: u32,
    ) -> Result<String, GenerativeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Some(response) => Ok(response.clone()),
            None => Err(GenerativeError::StatusError(503)),
        }
    }
}

/// Coordinator whose data APIs all point at an unroutable local port, so
/// every external HTTP call fails immediately and only the completion stub
/// controls provider behavior.
pub fn offline_coordinator(model: Arc<ScriptedCompletion>) -> ItineraryCoordinator {
    let weather = WeatherProvider::with_base_urls(
        "http://127.0.0.1:9/v1/search",
        "http://127.0.0.1:9/v1/forecast",
    )
    .expect("failed to build weather provider");

    let transportation =
        TransportationService::new(model.clone(), "test-key", "http://127.0.0.1:9/directions")
            .expect("failed to build transportation service");

    ItineraryCoordinator::new(model, weather, transportation)
}

pub fn toronto_query() -> DestinationQuery {
    DestinationQuery::new("Toronto", 3, CostTier::InBetween)
}

pub fn valid_hotels_json() -> String {
    serde_json::json!({
        "hotels": [
            {
                "name": "Fairmont Royal York",
                "description": "Historic railway hotel across from Union Station",
                "rating": 4.6,
                "price_category": "Luxury",
                "location": "100 Front St W",
                "amenities": ["Pool", "Spa"],
                "booking_url": "https://example.com/royal-york"
            },
            {
                "name": "The Drake Hotel",
                "description": "Boutique hotel with a rooftop patio",
                "rating": 4.3,
                "price_category": "Moderate",
                "location": "1150 Queen St W"
            }
        ]
    })
    .to_string()
}
