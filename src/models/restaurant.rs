use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RestaurantsPayload {
    pub restaurants: Vec<Restaurant>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
    pub description: String,
    pub rating: f64,
    pub price_range: String,
    pub address: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}
