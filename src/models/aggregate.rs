use serde::{Deserialize, Serialize};

use crate::models::hotel::HotelsPayload;
use crate::models::itinerary::ItineraryPayload;
use crate::models::restaurant::RestaurantsPayload;
use crate::models::transportation::TransportationPayload;
use crate::models::weather::WeatherReport;

/// The merged travel plan returned by the coordinator. Every section is
/// always present; a provider that failed contributes its fallback payload
/// instead of omitting the key.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AggregateItinerary {
    pub destination: String,
    pub weather: WeatherReport,
    pub hotels: HotelsPayload,
    pub restaurants: RestaurantsPayload,
    pub itinerary: ItineraryPayload,
    pub transportation: TransportationPayload,
}
