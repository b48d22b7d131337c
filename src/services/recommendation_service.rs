//! Generic cache → fetch → validate → fallback orchestration shared by the
//! generative recommendation domains (hotels, restaurants, itinerary,
//! transportation). Each domain supplies its prompt, cache policy, validator,
//! and fallback through `RecommendationDomain`; the provider logic itself is
//! written once.

use std::error::Error;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::models::query::DestinationQuery;
use crate::services::cache::TtlCache;
use crate::services::generative_service::{strip_code_fences, GenerativeError, TextCompletion};

/// Capability set one recommendation domain plugs into the shared provider:
/// cache key and TTL, prompt template, structural validator, and fallback.
pub trait RecommendationDomain {
    type Payload: Serialize + DeserializeOwned + Clone + Send + Sync;

    const NAME: &'static str;
    const CACHE_TTL_SECS: i64;
    const MAX_NEW_TOKENS: u32;

    fn cache_key(query: &DestinationQuery) -> String;
    fn prompt(query: &DestinationQuery) -> String;
    fn validate(value: &Value) -> bool;
    fn fallback(query: &DestinationQuery) -> Self::Payload;
}

/// Internal result of one fetch-and-validate attempt. Never escapes the
/// provider; every variant routes to the domain fallback.
#[derive(Debug)]
pub enum FetchError {
    Completion(GenerativeError),
    Decode(serde_json::Error),
    InvalidSchema,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Completion(err) => write!(f, "completion failed: {}", err),
            FetchError::Decode(err) => write!(f, "response was not valid JSON: {}", err),
            FetchError::InvalidSchema => {
                write!(f, "response did not match the expected structure")
            }
        }
    }
}

impl Error for FetchError {}

impl From<GenerativeError> for FetchError {
    fn from(err: GenerativeError) -> Self {
        FetchError::Completion(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err)
    }
}

pub struct RecommendationProvider<D: RecommendationDomain> {
    model: Arc<dyn TextCompletion>,
    cache: TtlCache<D::Payload>,
    _domain: PhantomData<D>,
}

impl<D: RecommendationDomain> RecommendationProvider<D> {
    pub fn new(model: Arc<dyn TextCompletion>) -> Self {
        Self::with_cache(model, TtlCache::new())
    }

    pub fn with_cache(model: Arc<dyn TextCompletion>, cache: TtlCache<D::Payload>) -> Self {
        Self {
            model,
            cache,
            _domain: PhantomData,
        }
    }

    /// Total over any well-formed query: a valid cache entry wins outright,
    /// and every failure of the external path degrades to the domain
    /// fallback instead of surfacing an error.
    pub async fn get_recommendations(&self, query: &DestinationQuery) -> D::Payload {
        let key = D::cache_key(query);

        if let Some(entry) = self.cache.get(&key) {
            if self.cache.is_valid(&entry, D::CACHE_TTL_SECS) {
                return entry.payload;
            }
        }

        match self.fetch_validated(query).await {
            Ok(payload) => {
                self.cache.put(&key, payload.clone());
                payload
            }
            Err(err) => {
                eprintln!(
                    "{} provider error for {}: {}",
                    D::NAME,
                    query.destination,
                    err
                );
                // The fallback is cached under the same key; the external
                // call is not retried until the entry expires.
                let fallback = D::fallback(query);
                self.cache.put(&key, fallback.clone());
                fallback
            }
        }
    }

    async fn fetch_validated(&self, query: &DestinationQuery) -> Result<D::Payload, FetchError> {
        let raw = self
            .model
            .complete(&D::prompt(query), D::MAX_NEW_TOKENS)
            .await?;

        let value: Value = serde_json::from_str(strip_code_fences(&raw))?;

        if !D::validate(&value) {
            return Err(FetchError::InvalidSchema);
        }

        Ok(serde_json::from_value(value)?)
    }
}
