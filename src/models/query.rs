use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostTier {
    #[serde(rename = "budget")]
    Budget,
    #[default]
    #[serde(rename = "in-between")]
    InBetween,
    #[serde(rename = "luxury")]
    Luxury,
}

impl CostTier {
    /// Price-range wording interpolated into generative prompts.
    pub fn price_range_hint(&self) -> &'static str {
        match self {
            CostTier::Budget => "Budget",
            CostTier::InBetween => "Moderate",
            CostTier::Luxury => "Luxury",
        }
    }
}

impl fmt::Display for CostTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostTier::Budget => write!(f, "budget"),
            CostTier::InBetween => write!(f, "in-between"),
            CostTier::Luxury => write!(f, "luxury"),
        }
    }
}

/// One aggregation request: where to go, for how long, at what price point.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DestinationQuery {
    pub destination: String,
    pub days: u32,
    #[serde(default)]
    pub cost_tier: CostTier,
}

impl DestinationQuery {
    pub fn new(destination: impl Into<String>, days: u32, cost_tier: CostTier) -> Self {
        Self {
            destination: destination.into(),
            // A zero-day trip is meaningless; treat it as a single day.
            days: days.max(1),
            cost_tier,
        }
    }
}
