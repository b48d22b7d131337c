use std::error::Error;
use std::fmt;

pub mod cache;
pub mod domains;
pub mod fallback;
pub mod generative_service;
pub mod itinerary_coordinator;
pub mod recommendation_service;
pub mod transportation_service;
pub mod validation;
pub mod weather_service;

/// Construction-time configuration failure. Unlike provider errors, which
/// degrade to fallback data, a missing credential has no substitute and is
/// surfaced to the caller.
#[derive(Debug)]
pub enum ConfigError {
    MissingCredential(&'static str),
    HttpClient(reqwest::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingCredential(name) => {
                write!(f, "{} environment variable not set", name)
            }
            ConfigError::HttpClient(err) => write!(f, "failed to build HTTP client: {}", err),
        }
    }
}

impl Error for ConfigError {}
