use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HotelsPayload {
    pub hotels: Vec<Hotel>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Hotel {
    pub name: String,
    pub description: String,
    pub rating: f64,
    pub price_category: String,
    pub location: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,
}
