use serde::{Deserialize, Serialize};

// The generative prompt pins the overall shape (flights, ground
// transportation, local transit) but models routinely omit or rename the
// nested details, so everything below the three sections decodes leniently.

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TransportationPayload {
    pub transportation: TransportationOptions,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TransportationOptions {
    pub flights: FlightInfo,
    pub ground_transportation: GroundTransportation,
    pub local_transit: LocalTransit,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct FlightInfo {
    #[serde(default)]
    pub major_airports: Vec<String>,
    #[serde(default)]
    pub typical_flight_time: String,
    #[serde(default)]
    pub airlines: Vec<String>,
    #[serde(default)]
    pub booking_tips: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GroundTransportation {
    #[serde(default)]
    pub from_airport: Vec<AirportTransfer>,
    #[serde(default)]
    pub car_rental: CarRental,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AirportTransfer {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CarRental {
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub companies: Vec<String>,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub parking_info: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LocalTransit {
    #[serde(default)]
    pub public_system: PublicSystem,
    #[serde(default)]
    pub walking: WalkingInfo,
    #[serde(default)]
    pub bike_sharing: BikeSharing,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PublicSystem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub day_pass: String,
    #[serde(default)]
    pub single_ride: String,
    #[serde(default)]
    pub coverage: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct WalkingInfo {
    #[serde(default)]
    pub walkability_score: u32,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct BikeSharing {
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub system_name: String,
    #[serde(default)]
    pub cost: String,
}

// Point-to-point route lookup results. Assembled locally from the
// directions API rather than decoded from generative output.

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RouteSet {
    pub user_address: String,
    pub destination: String,
    pub routes: Vec<RouteOption>,
    pub distance_km: f64,
    pub flight_required: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RouteOption {
    pub mode: String,
    pub name: String,
    pub duration: String,
    pub distance: String,
    pub cost_estimate: String,
    pub description: String,
    pub steps: Vec<String>,
}
