//! Deterministic substitute payloads returned when no trusted external data
//! is available. Content is template data interpolated with the destination
//! name only — no I/O, no randomness — so a fully degraded aggregation is
//! still complete and reproducible.

use crate::models::hotel::{Hotel, HotelsPayload};
use crate::models::itinerary::{DayPlan, ItineraryPayload, ScheduledActivity, TripInfo};
use crate::models::restaurant::{Restaurant, RestaurantsPayload};
use crate::models::transportation::{
    AirportTransfer, BikeSharing, CarRental, FlightInfo, GroundTransportation, LocalTransit,
    PublicSystem, RouteOption, RouteSet, TransportationOptions, TransportationPayload,
    WalkingInfo,
};
use crate::models::weather::{WeatherLocation, WeatherReport};

pub fn fallback_hotels(destination: &str) -> HotelsPayload {
    HotelsPayload {
        hotels: vec![
            Hotel {
                name: format!("Grand Hotel {}", destination),
                description: "Luxury hotel in the heart of the city".to_string(),
                rating: 4.5,
                price_category: "Luxury".to_string(),
                location: format!("Downtown {}", destination),
                amenities: vec![
                    "Free WiFi".to_string(),
                    "Spa".to_string(),
                    "Gym".to_string(),
                    "Business Center".to_string(),
                ],
                booking_url: Some("https://booking.com".to_string()),
            },
            Hotel {
                name: format!("Business Inn {}", destination),
                description: "Modern hotel perfect for business travelers".to_string(),
                rating: 4.0,
                price_category: "Business".to_string(),
                location: format!("Business District {}", destination),
                amenities: vec![
                    "Free WiFi".to_string(),
                    "Meeting Rooms".to_string(),
                    "Gym".to_string(),
                ],
                booking_url: Some("https://booking.com".to_string()),
            },
            Hotel {
                name: format!("Comfort Stay {}", destination),
                description: "Affordable comfort in a great location".to_string(),
                rating: 3.8,
                price_category: "Moderate".to_string(),
                location: format!("Central {}", destination),
                amenities: vec![
                    "Free WiFi".to_string(),
                    "Breakfast".to_string(),
                    "Parking".to_string(),
                ],
                booking_url: Some("https://booking.com".to_string()),
            },
        ],
    }
}

pub fn fallback_restaurants(destination: &str) -> RestaurantsPayload {
    RestaurantsPayload {
        restaurants: vec![
            Restaurant {
                name: format!("The Local Bistro {}", destination),
                cuisine: "International".to_string(),
                description: "Popular local restaurant with diverse menu".to_string(),
                rating: 4.5,
                price_range: "$$".to_string(),
                address: format!("Downtown {}", destination),
                features: vec![
                    "Outdoor Seating".to_string(),
                    "Vegetarian Options".to_string(),
                    "Reservations".to_string(),
                ],
                website: Some("https://restaurant.com".to_string()),
            },
            Restaurant {
                name: format!("Fine Dining {}", destination),
                cuisine: "Contemporary".to_string(),
                description: "Upscale restaurant perfect for business dinners".to_string(),
                rating: 4.7,
                price_range: "$$$".to_string(),
                address: format!("Business District {}", destination),
                features: vec![
                    "Private Dining".to_string(),
                    "Wine List".to_string(),
                    "Reservations Required".to_string(),
                ],
                website: Some("https://restaurant.com".to_string()),
            },
            Restaurant {
                name: format!("Casual Eats {}", destination),
                cuisine: "Comfort Food".to_string(),
                description: "Relaxed atmosphere with comfort food favorites".to_string(),
                rating: 4.2,
                price_range: "$".to_string(),
                address: format!("Central {}", destination),
                features: vec![
                    "Quick Service".to_string(),
                    "Takeout".to_string(),
                    "Family Friendly".to_string(),
                ],
                website: Some("https://restaurant.com".to_string()),
            },
            Restaurant {
                name: format!("Ethnic Kitchen {}", destination),
                cuisine: "Asian Fusion".to_string(),
                description: "Authentic flavors with modern presentation".to_string(),
                rating: 4.4,
                price_range: "$$".to_string(),
                address: format!("Cultural District {}", destination),
                features: vec![
                    "Authentic Cuisine".to_string(),
                    "Vegetarian Options".to_string(),
                    "Delivery".to_string(),
                ],
                website: Some("https://restaurant.com".to_string()),
            },
            Restaurant {
                name: format!("Café Corner {}", destination),
                cuisine: "Café".to_string(),
                description: "Perfect for quick breakfast or coffee meetings".to_string(),
                rating: 4.0,
                price_range: "$".to_string(),
                address: format!("City Center {}", destination),
                features: vec![
                    "Coffee".to_string(),
                    "WiFi".to_string(),
                    "Breakfast".to_string(),
                    "Pastries".to_string(),
                ],
                website: Some("https://restaurant.com".to_string()),
            },
        ],
    }
}

pub fn fallback_itinerary(destination: &str, days: u32) -> ItineraryPayload {
    let days = days.max(1);

    let itinerary = (1..=days)
        .map(|day| DayPlan {
            day,
            location: format!("{} City Center", destination),
            activities: vec![
                ScheduledActivity {
                    time: "9:00 AM".to_string(),
                    description: format!("Start day {} with breakfast at a local café", day),
                },
                ScheduledActivity {
                    time: "10:30 AM".to_string(),
                    description: format!("Explore the main attractions of {}", destination),
                },
                ScheduledActivity {
                    time: "1:00 PM".to_string(),
                    description: "Lunch at a recommended restaurant".to_string(),
                },
                ScheduledActivity {
                    time: "3:00 PM".to_string(),
                    description: format!("Visit cultural sites and museums in {}", destination),
                },
                ScheduledActivity {
                    time: "6:00 PM".to_string(),
                    description: "Dinner and evening activities".to_string(),
                },
            ],
        })
        .collect();

    ItineraryPayload {
        itinerary,
        highlights: vec![
            format!("Historic {} Downtown", destination),
            format!("{} Cultural District", destination),
            format!("Local {} Cuisine", destination),
            format!("{} Scenic Views", destination),
        ],
        trip_info: Some(TripInfo {
            duration: format!("{} days", days),
            category: "tourism".to_string(),
            price_range: "Moderate".to_string(),
        }),
    }
}

pub fn fallback_transportation(destination: &str) -> TransportationPayload {
    TransportationPayload {
        transportation: TransportationOptions {
            flights: FlightInfo {
                major_airports: vec![format!("{} International Airport", destination)],
                typical_flight_time: "Varies by origin city".to_string(),
                airlines: vec![
                    "Major Airlines".to_string(),
                    "Regional Carriers".to_string(),
                ],
                booking_tips: "Book in advance for better rates".to_string(),
            },
            ground_transportation: GroundTransportation {
                from_airport: vec![
                    AirportTransfer {
                        method: "Taxi".to_string(),
                        duration: "30-45 minutes".to_string(),
                        cost: "$40-70 CAD".to_string(),
                        description: "Door-to-door service".to_string(),
                    },
                    AirportTransfer {
                        method: "Public Transit".to_string(),
                        duration: "45-60 minutes".to_string(),
                        cost: "$3-6 CAD".to_string(),
                        description: "Airport express service".to_string(),
                    },
                    AirportTransfer {
                        method: "Ride Share".to_string(),
                        duration: "30-50 minutes".to_string(),
                        cost: "$35-55 CAD".to_string(),
                        description: "Uber/Lyft available".to_string(),
                    },
                ],
                car_rental: CarRental {
                    available: true,
                    companies: vec![
                        "Enterprise".to_string(),
                        "Hertz".to_string(),
                        "Avis".to_string(),
                    ],
                    cost: "$50-90 CAD per day".to_string(),
                    parking_info: "Street parking and garages available".to_string(),
                },
            },
            local_transit: LocalTransit {
                public_system: PublicSystem {
                    name: format!("{} Public Transit", destination),
                    types: vec!["Bus".to_string(), "Train".to_string()],
                    day_pass: "$10-15 CAD".to_string(),
                    single_ride: "$3-5 CAD".to_string(),
                    coverage: "Good city coverage".to_string(),
                },
                walking: WalkingInfo {
                    walkability_score: 70,
                    description: "Moderately walkable city center".to_string(),
                },
                bike_sharing: BikeSharing {
                    available: true,
                    system_name: "City Bike Share".to_string(),
                    cost: "$8-15 CAD per day".to_string(),
                },
            },
        },
    }
}

pub fn fallback_weather(destination: &str) -> WeatherReport {
    WeatherReport {
        temperature_celsius: 20.0,
        windspeed_kph: 10.0,
        condition: "Partly cloudy".to_string(),
        description: format!("Weather data temporarily unavailable for {}", destination),
        is_day: true,
        location: WeatherLocation {
            name: destination.to_string(),
            country: "Unknown".to_string(),
        },
    }
}

pub fn fallback_routes(origin: &str, destination: &str) -> RouteSet {
    RouteSet {
        user_address: origin.to_string(),
        destination: destination.to_string(),
        routes: vec![RouteOption {
            mode: "driving".to_string(),
            name: "Driving".to_string(),
            duration: "Calculating...".to_string(),
            distance: "Unknown".to_string(),
            cost_estimate: "Varies".to_string(),
            description: "Route calculation unavailable".to_string(),
            steps: vec!["Please check a map service for directions".to_string()],
        }],
        distance_km: 0.0,
        flight_required: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_cardinalities() {
        assert_eq!(fallback_hotels("Toronto").hotels.len(), 3);
        assert_eq!(fallback_restaurants("Toronto").restaurants.len(), 5);
        assert_eq!(fallback_itinerary("Toronto", 4).itinerary.len(), 4);
        assert_eq!(fallback_routes("A", "B").routes.len(), 1);
    }

    #[test]
    fn test_fallback_itinerary_clamps_zero_days() {
        assert_eq!(fallback_itinerary("Toronto", 0).itinerary.len(), 1);
    }

    #[test]
    fn test_fallbacks_interpolate_destination() {
        let hotels = fallback_hotels("Lisbon");
        assert_eq!(hotels.hotels[0].name, "Grand Hotel Lisbon");

        let weather = fallback_weather("Lisbon");
        assert!(weather.description.contains("Lisbon"));
        assert_eq!(weather.location.name, "Lisbon");
    }

    #[test]
    fn test_fallbacks_are_deterministic() {
        let first = serde_json::to_value(fallback_transportation("Oslo")).unwrap();
        let second = serde_json::to_value(fallback_transportation("Oslo")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fallbacks_satisfy_their_validators() {
        use crate::services::validation;

        let hotels = serde_json::to_value(fallback_hotels("Toronto")).unwrap();
        assert!(validation::validate_hotels(&hotels));

        let restaurants = serde_json::to_value(fallback_restaurants("Toronto")).unwrap();
        assert!(validation::validate_restaurants(&restaurants));

        let itinerary = serde_json::to_value(fallback_itinerary("Toronto", 3)).unwrap();
        assert!(validation::validate_itinerary(&itinerary));

        let transportation = serde_json::to_value(fallback_transportation("Toronto")).unwrap();
        assert!(validation::validate_transportation(&transportation));
    }
}
