use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryPayload {
    pub itinerary: Vec<DayPlan>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_info: Option<TripInfo>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DayPlan {
    pub day: u32,
    pub location: String,
    pub activities: Vec<ScheduledActivity>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScheduledActivity {
    pub time: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TripInfo {
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price_range: String,
}
