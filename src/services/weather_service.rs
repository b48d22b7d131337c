//! Weather provider backed by the Open-Meteo APIs.
//!
//! Two-step lookup: forward-geocode the destination name, then fetch the
//! current forecast for the resulting coordinate. A failure or missing field
//! at either step degrades to the deterministic fallback report, which is
//! cached like any other result.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::models::weather::{WeatherLocation, WeatherReport};
use crate::services::cache::{cache_key, TtlCache};
use crate::services::fallback;
use crate::services::ConfigError;

const GEOCODING_BASE: &str = "https://geocoding-api.open-meteo.com/v1/search";
const FORECAST_BASE: &str = "https://api.open-meteo.com/v1/forecast";

// Weather changes fast compared to hotel listings.
const CACHE_TTL_SECS: i64 = 3600;
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug)]
enum WeatherError {
    Http(reqwest::Error),
    LocationNotFound(String),
    MissingCurrentWeather,
}

impl fmt::Display for WeatherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherError::Http(err) => write!(f, "HTTP error: {}", err),
            WeatherError::LocationNotFound(name) => {
                write!(f, "could not find location: {}", name)
            }
            WeatherError::MissingCurrentWeather => write!(f, "no weather data available"),
        }
    }
}

impl Error for WeatherError {}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Http(err)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<GeocodingResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    latitude: f64,
    longitude: f64,
    name: Option<String>,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    windspeed: f64,
    #[serde(default)]
    weathercode: u32,
    #[serde(default = "default_is_day")]
    is_day: u8,
}

fn default_is_day() -> u8 {
    1
}

/// Map an Open-Meteo weathercode to a readable condition. Codes outside the
/// table yield "Unknown" rather than an error.
pub fn condition_label(weathercode: u32) -> &'static str {
    match weathercode {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Drizzle: Light",
        53 => "Drizzle: Moderate",
        55 => "Drizzle: Dense",
        61 => "Rain: Slight",
        63 => "Rain: Moderate",
        65 => "Rain: Heavy",
        80 => "Rain showers: Slight",
        81 => "Rain showers: Moderate",
        82 => "Rain showers: Violent",
        95 => "Thunderstorm: Slight",
        96 => "Thunderstorm with hail",
        _ => "Unknown",
    }
}

pub struct WeatherProvider {
    client: reqwest::Client,
    cache: TtlCache<WeatherReport>,
    geocoding_base: String,
    forecast_base: String,
}

impl WeatherProvider {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_urls(GEOCODING_BASE, FORECAST_BASE)
    }

    /// Base URLs are injectable so tests can point at an unreachable
    /// endpoint and exercise the fallback path.
    pub fn with_base_urls(
        geocoding_base: impl Into<String>,
        forecast_base: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            client,
            cache: TtlCache::new(),
            geocoding_base: geocoding_base.into(),
            forecast_base: forecast_base.into(),
        })
    }

    /// Total over any destination name: cached report, fresh lookup, or the
    /// fallback report when the lookup fails.
    pub async fn get_weather(&self, destination: &str) -> WeatherReport {
        let key = cache_key("weather", destination);

        if let Some(entry) = self.cache.get(&key) {
            if self.cache.is_valid(&entry, CACHE_TTL_SECS) {
                return entry.payload;
            }
        }

        match self.fetch_weather(destination).await {
            Ok(report) => {
                self.cache.put(&key, report.clone());
                report
            }
            Err(err) => {
                eprintln!("weather provider error for {}: {}", destination, err);
                let report = fallback::fallback_weather(destination);
                self.cache.put(&key, report.clone());
                report
            }
        }
    }

    async fn fetch_weather(&self, destination: &str) -> Result<WeatherReport, WeatherError> {
        let location = self.geocode(destination).await?;
        let current = self.forecast(location.latitude, location.longitude).await?;

        let condition = condition_label(current.weathercode);

        Ok(WeatherReport {
            temperature_celsius: current.temperature,
            windspeed_kph: current.windspeed,
            condition: condition.to_string(),
            description: format!("{}°C, {}", current.temperature, condition),
            is_day: current.is_day == 1,
            location: WeatherLocation {
                name: location.name.unwrap_or_else(|| destination.to_string()),
                country: location.country.unwrap_or_else(|| "Unknown".to_string()),
            },
        })
    }

    async fn geocode(&self, destination: &str) -> Result<GeocodingResult, WeatherError> {
        let response: GeocodingResponse = self
            .client
            .get(&self.geocoding_base)
            .query(&[("name", destination), ("count", "1")])
            .send()
            .await?
            .json()
            .await?;

        response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::LocationNotFound(destination.to_string()))
    }

    async fn forecast(&self, latitude: f64, longitude: f64) -> Result<CurrentWeather, WeatherError> {
        let response: ForecastResponse = self
            .client
            .get(&self.forecast_base)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
                (
                    "daily",
                    "temperature_2m_max,temperature_2m_min,precipitation_sum".to_string(),
                ),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?
            .json()
            .await?;

        response
            .current_weather
            .ok_or(WeatherError::MissingCurrentWeather)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_condition_label_known_codes() {
        assert_eq!(condition_label(0), "Clear sky");
        assert_eq!(condition_label(45), "Fog");
        assert_eq!(condition_label(96), "Thunderstorm with hail");
    }

    #[test]
    fn test_condition_label_unmapped_code_is_unknown() {
        assert_eq!(condition_label(42), "Unknown");
        assert_eq!(condition_label(999), "Unknown");
    }

    #[test]
    fn test_forecast_response_without_current_weather() {
        let response: ForecastResponse = serde_json::from_value(json!({
            "latitude": 43.7,
            "longitude": -79.4
        }))
        .unwrap();
        assert!(response.current_weather.is_none());
    }

    #[test]
    fn test_current_weather_defaults_to_daytime() {
        let current: CurrentWeather = serde_json::from_value(json!({
            "temperature": 18.5,
            "windspeed": 12.0
        }))
        .unwrap();
        assert_eq!(current.is_day, 1);
        assert_eq!(current.weathercode, 0);
    }

    #[test]
    fn test_geocoding_response_tolerates_missing_results() {
        let response: GeocodingResponse =
            serde_json::from_value(json!({"generationtime_ms": 0.5})).unwrap();
        assert!(response.results.is_empty());
    }
}
