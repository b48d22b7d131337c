//! Transportation provider: generative primary recommendations plus
//! point-to-point route lookups against the Google Directions API.
//!
//! Route lookups probe the driving route first to learn the distance, append
//! a synthesized flight option for trips over 500 km, then collect driving,
//! transit, and walking routes. Per-mode failures are skipped; only a failed
//! probe or an empty result degrades to the fallback route set.

use std::env;
use std::error::Error;
use std::fmt;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use regex::Regex;
use serde::Deserialize;

use crate::models::query::DestinationQuery;
use crate::models::transportation::{RouteOption, RouteSet, TransportationPayload};
use crate::services::cache::{cache_key, TtlCache};
use crate::services::domains::TransportationDomain;
use crate::services::fallback;
use crate::services::generative_service::TextCompletion;
use crate::services::recommendation_service::RecommendationProvider;
use crate::services::ConfigError;

const DIRECTIONS_BASE: &str = "https://maps.googleapis.com/maps/api/directions/json";

// Routes reflect current transit schedules, so they expire much sooner than
// the primary recommendations.
const ROUTE_CACHE_TTL_SECS: i64 = 3600;
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Driving distance beyond which a flight option is synthesized.
const FLIGHT_DISTANCE_KM: f64 = 500.0;

const MODES: [(&str, &str); 3] = [
    ("driving", "Driving"),
    ("transit", "Public Transit"),
    ("walking", "Walking"),
];

#[derive(Debug)]
enum RouteError {
    Http(reqwest::Error),
    NoRoutes,
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Http(err) => write!(f, "HTTP error: {}", err),
            RouteError::NoRoutes => write!(f, "no routes returned for any travel mode"),
        }
    }
}

impl Error for RouteError {}

impl From<reqwest::Error> for RouteError {
    fn from(err: reqwest::Error) -> Self {
        RouteError::Http(err)
    }
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    #[serde(default)]
    summary: String,
    legs: Vec<DirectionsLeg>,
}

#[derive(Debug, Deserialize)]
struct DirectionsLeg {
    distance: TextValue,
    duration: TextValue,
    #[serde(default)]
    steps: Vec<DirectionsStep>,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    text: String,
    value: u64,
}

#[derive(Debug, Deserialize)]
struct DirectionsStep {
    html_instructions: String,
}

pub struct TransportationService {
    primary: RecommendationProvider<TransportationDomain>,
    client: reqwest::Client,
    api_key: String,
    directions_base: String,
    route_cache: TtlCache<RouteSet>,
}

impl TransportationService {
    pub fn from_env(model: Arc<dyn TextCompletion>) -> Result<Self, ConfigError> {
        let api_key = env::var("GOOGLE_MAPS_API_KEY")
            .map_err(|_| ConfigError::MissingCredential("GOOGLE_MAPS_API_KEY"))?;
        Self::new(model, api_key, DIRECTIONS_BASE)
    }

    pub fn new(
        model: Arc<dyn TextCompletion>,
        api_key: impl Into<String>,
        directions_base: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            primary: RecommendationProvider::new(model),
            client,
            api_key: api_key.into(),
            directions_base: directions_base.into(),
            route_cache: TtlCache::new(),
        })
    }

    /// Primary recommendations (airports, ground transportation, local
    /// transit) through the shared generative provider.
    pub async fn get_recommendations(&self, query: &DestinationQuery) -> TransportationPayload {
        self.primary.get_recommendations(query).await
    }

    /// Point-to-point routes between two addresses. Total: any failure
    /// returns the fallback route set, which is not cached so the next call
    /// retries the directions API.
    pub async fn get_routes(&self, user_address: &str, destination: &str) -> RouteSet {
        if user_address.is_empty() || destination.is_empty() {
            return fallback::fallback_routes(user_address, destination);
        }

        let key = cache_key("routes", &format!("{}|{}", user_address, destination));

        if let Some(entry) = self.route_cache.get(&key) {
            if self.route_cache.is_valid(&entry, ROUTE_CACHE_TTL_SECS) {
                return entry.payload;
            }
        }

        match self.fetch_routes(user_address, destination).await {
            Ok(routes) => {
                self.route_cache.put(&key, routes.clone());
                routes
            }
            Err(err) => {
                eprintln!(
                    "route lookup error for {} -> {}: {}",
                    user_address, destination, err
                );
                fallback::fallback_routes(user_address, destination)
            }
        }
    }

    async fn fetch_routes(
        &self,
        user_address: &str,
        destination: &str,
    ) -> Result<RouteSet, RouteError> {
        let mut set = RouteSet {
            user_address: user_address.to_string(),
            destination: destination.to_string(),
            routes: Vec::new(),
            distance_km: 0.0,
            flight_required: false,
        };

        let probe = self.directions(user_address, destination, "driving").await?;
        apply_driving_probe(&mut set, &probe);

        for (mode, name) in MODES {
            match self.directions(user_address, destination, mode).await {
                Ok(response) => {
                    if let Some(option) = route_option_from(mode, name, &response) {
                        set.routes.push(option);
                    }
                }
                Err(err) => {
                    eprintln!("error getting {} route: {}", mode, err);
                    continue;
                }
            }
        }

        if set.routes.is_empty() {
            return Err(RouteError::NoRoutes);
        }

        Ok(set)
    }

    async fn directions(
        &self,
        origin: &str,
        destination: &str,
        mode: &str,
    ) -> Result<DirectionsResponse, RouteError> {
        let response = self
            .client
            .get(&self.directions_base)
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("mode", mode),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .json()
            .await?;

        Ok(response)
    }
}

/// Record the driving distance from the probe response and synthesize a
/// flight option when the trip is long enough to justify one.
fn apply_driving_probe(set: &mut RouteSet, probe: &DirectionsResponse) {
    let leg = match first_leg(probe) {
        Some(leg) => leg,
        None => return,
    };

    let distance_km = leg.distance.value as f64 / 1000.0;
    set.distance_km = distance_km;

    if distance_km > FLIGHT_DISTANCE_KM {
        set.flight_required = true;
        set.routes.push(flight_option(distance_km));
    }
}

fn flight_option(distance_km: f64) -> RouteOption {
    RouteOption {
        mode: "flight".to_string(),
        name: "Flight".to_string(),
        duration: "2-4 hours".to_string(),
        distance: format!("{:.0} km", distance_km),
        cost_estimate: format!("${:.0}-${:.0}", distance_km * 0.15, distance_km * 0.3),
        description: "Recommended for long distances".to_string(),
        steps: vec![
            "Book flight from nearest airport".to_string(),
            "Airport transfer on both ends".to_string(),
        ],
    }
}

fn route_option_from(mode: &str, name: &str, response: &DirectionsResponse) -> Option<RouteOption> {
    let leg = first_leg(response)?;
    let summary = &response.routes[0].summary;

    let distance_km = leg.distance.value as f64 / 1000.0;
    let steps = leg
        .steps
        .iter()
        .take(3)
        .map(|step| strip_html(&step.html_instructions))
        .collect();

    Some(RouteOption {
        mode: mode.to_string(),
        name: name.to_string(),
        duration: leg.duration.text.clone(),
        distance: leg.distance.text.clone(),
        cost_estimate: mode_cost_estimate(mode, distance_km),
        description: format!(
            "{} route via {}",
            name,
            if summary.is_empty() {
                "main roads"
            } else {
                summary.as_str()
            }
        ),
        steps,
    })
}

fn first_leg(response: &DirectionsResponse) -> Option<&DirectionsLeg> {
    if response.status != "OK" {
        return None;
    }
    response.routes.first()?.legs.first()
}

fn mode_cost_estimate(mode: &str, distance_km: f64) -> String {
    match mode {
        // Rough $0.12/km gas estimate.
        "driving" => format!("${:.2} (gas)", distance_km * 0.12),
        "transit" => "$3-15 (fare)".to_string(),
        "walking" => "Free".to_string(),
        _ => "N/A".to_string(),
    }
}

fn strip_html(instructions: &str) -> String {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    let re = TAG_RE.get_or_init(|| Regex::new(r"<[^<]+?>").unwrap());
    re.replace_all(instructions, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn directions_response(distance_meters: u64) -> DirectionsResponse {
        serde_json::from_value(json!({
            "status": "OK",
            "routes": [{
                "summary": "ON-401 E",
                "legs": [{
                    "distance": {"text": format!("{} km", distance_meters / 1000), "value": distance_meters},
                    "duration": {"text": "5 hours 30 mins", "value": 19800},
                    "steps": [
                        {"html_instructions": "Head <b>east</b> on Main St"},
                        {"html_instructions": "Merge onto <b>ON-401 E</b>"},
                        {"html_instructions": "Take exit <b>720</b>"},
                        {"html_instructions": "Continue straight"}
                    ]
                }]
            }]
        }))
        .unwrap()
    }

    fn empty_route_set() -> RouteSet {
        RouteSet {
            user_address: "A".to_string(),
            destination: "B".to_string(),
            routes: Vec::new(),
            distance_km: 0.0,
            flight_required: false,
        }
    }

    #[test]
    fn test_long_drive_synthesizes_flight() {
        let mut set = empty_route_set();
        apply_driving_probe(&mut set, &directions_response(540_000));

        assert!(set.flight_required);
        assert_eq!(set.routes.len(), 1);
        assert_eq!(set.routes[0].mode, "flight");
        assert_eq!(set.routes[0].distance, "540 km");
    }

    #[test]
    fn test_short_drive_has_no_flight() {
        let mut set = empty_route_set();
        apply_driving_probe(&mut set, &directions_response(320_000));

        assert!(!set.flight_required);
        assert!(set.routes.is_empty());
        assert_eq!(set.distance_km, 320.0);
    }

    #[test]
    fn test_failed_probe_leaves_set_untouched() {
        let mut set = empty_route_set();
        let probe: DirectionsResponse =
            serde_json::from_value(json!({"status": "ZERO_RESULTS"})).unwrap();
        apply_driving_probe(&mut set, &probe);

        assert_eq!(set.distance_km, 0.0);
        assert!(set.routes.is_empty());
    }

    #[test]
    fn test_route_option_strips_html_and_caps_steps() {
        let option =
            route_option_from("driving", "Driving", &directions_response(100_000)).unwrap();

        assert_eq!(option.steps.len(), 3);
        assert_eq!(option.steps[0], "Head east on Main St");
        assert_eq!(option.steps[1], "Merge onto ON-401 E");
        assert_eq!(option.description, "Driving route via ON-401 E");
        assert_eq!(option.cost_estimate, "$12.00 (gas)");
    }

    #[test]
    fn test_route_option_without_summary_names_main_roads() {
        let response: DirectionsResponse = serde_json::from_value(json!({
            "status": "OK",
            "routes": [{
                "legs": [{
                    "distance": {"text": "2.0 km", "value": 2000},
                    "duration": {"text": "25 mins", "value": 1500},
                    "steps": []
                }]
            }]
        }))
        .unwrap();

        let option = route_option_from("walking", "Walking", &response).unwrap();
        assert_eq!(option.description, "Walking route via main roads");
        assert_eq!(option.cost_estimate, "Free");
        assert!(option.steps.is_empty());
    }

    #[test]
    fn test_mode_cost_estimates() {
        assert_eq!(mode_cost_estimate("driving", 50.0), "$6.00 (gas)");
        assert_eq!(mode_cost_estimate("transit", 50.0), "$3-15 (fare)");
        assert_eq!(mode_cost_estimate("walking", 2.0), "Free");
        assert_eq!(mode_cost_estimate("rowboat", 2.0), "N/A");
    }

    #[test]
    fn test_flight_cost_scales_with_distance() {
        let option = flight_option(1000.0);
        assert_eq!(option.cost_estimate, "$150-$300");
        assert_eq!(option.duration, "2-4 hours");
    }
}
