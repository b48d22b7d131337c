//! Fans out one destination query to all five recommendation providers and
//! merges their payloads into the aggregate itinerary.

use std::sync::Arc;

use crate::models::aggregate::AggregateItinerary;
use crate::models::query::DestinationQuery;
use crate::models::transportation::RouteSet;
use crate::services::domains::{HotelDomain, ItineraryDomain, RestaurantDomain};
use crate::services::generative_service::{HuggingFaceClient, TextCompletion};
use crate::services::recommendation_service::RecommendationProvider;
use crate::services::transportation_service::TransportationService;
use crate::services::weather_service::WeatherProvider;
use crate::services::ConfigError;

pub struct ItineraryCoordinator {
    hotels: RecommendationProvider<HotelDomain>,
    restaurants: RecommendationProvider<RestaurantDomain>,
    itinerary: RecommendationProvider<ItineraryDomain>,
    weather: WeatherProvider,
    transportation: TransportationService,
}

impl ItineraryCoordinator {
    /// Wire every provider from environment credentials. The only failable
    /// construction path; once built, aggregation never fails.
    pub fn from_env() -> Result<Self, ConfigError> {
        let model: Arc<dyn TextCompletion> = Arc::new(HuggingFaceClient::from_env()?);
        let transportation = TransportationService::from_env(model.clone())?;
        let weather = WeatherProvider::new()?;

        Ok(Self::new(model, weather, transportation))
    }

    pub fn new(
        model: Arc<dyn TextCompletion>,
        weather: WeatherProvider,
        transportation: TransportationService,
    ) -> Self {
        Self {
            hotels: RecommendationProvider::new(model.clone()),
            restaurants: RecommendationProvider::new(model.clone()),
            itinerary: RecommendationProvider::new(model),
            weather,
            transportation,
        }
    }

    /// Build the aggregate itinerary for one query. The providers are
    /// independent, so all five run concurrently; each degrades to its own
    /// fallback on failure, so every section is always populated.
    pub async fn generate_itinerary(&self, query: &DestinationQuery) -> AggregateItinerary {
        let (weather, hotels, restaurants, itinerary, transportation) = futures::join!(
            self.weather.get_weather(&query.destination),
            self.hotels.get_recommendations(query),
            self.restaurants.get_recommendations(query),
            self.itinerary.get_recommendations(query),
            self.transportation.get_recommendations(query),
        );

        AggregateItinerary {
            destination: query.destination.clone(),
            weather,
            hotels,
            restaurants,
            itinerary,
            transportation,
        }
    }

    /// Point-to-point route lookup between the traveler's address and the
    /// event destination.
    pub async fn get_routes(&self, user_address: &str, destination: &str) -> RouteSet {
        self.transportation.get_routes(user_address, destination).await
    }
}
