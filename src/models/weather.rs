use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WeatherReport {
    pub temperature_celsius: f64,
    pub windspeed_kph: f64,
    pub condition: String,
    pub description: String,
    pub is_day: bool,
    pub location: WeatherLocation,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WeatherLocation {
    pub name: String,
    pub country: String,
}
