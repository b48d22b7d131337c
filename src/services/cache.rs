//! Time-bounded in-memory cache used by every recommendation provider.
//!
//! Entries expire by TTL comparison at read time. Stale entries are simply
//! overwritten by the next successful write for the same key, never actively
//! purged, so the map can only grow for the lifetime of the process.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;

#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub payload: T,
    pub created_at: i64,
}

/// Mutex-guarded key → entry map. One instance per provider, injected at
/// construction so tests can seed or share it.
pub struct TtlCache<T> {
    entries: Mutex<HashMap<String, CacheEntry<T>>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<CacheEntry<T>> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    /// Insert or replace the entry for `key`, stamped with the current time.
    pub fn put(&self, key: &str, payload: T) {
        let entry = CacheEntry {
            payload,
            created_at: Utc::now().timestamp(),
        };
        self.entries.lock().unwrap().insert(key.to_string(), entry);
    }

    pub fn is_valid(&self, entry: &CacheEntry<T>, ttl_seconds: i64) -> bool {
        Utc::now().timestamp() - entry.created_at < ttl_seconds
    }
}

impl<T: Clone> Default for TtlCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the cache key for a domain from its normalized inputs.
pub fn cache_key(domain: &str, input: &str) -> String {
    format!("{}:{}", domain, input.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_then_get_returns_payload() {
        let cache: TtlCache<String> = TtlCache::new();
        cache.put("hotels:toronto", "payload".to_string());

        let entry = cache.get("hotels:toronto").expect("entry should exist");
        assert_eq!(entry.payload, "payload");
        assert!(cache.is_valid(&entry, 86400));
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let cache: TtlCache<String> = TtlCache::new();
        assert!(cache.get("hotels:nowhere").is_none());
    }

    #[test]
    fn test_put_overwrites_existing_entry() {
        let cache: TtlCache<u32> = TtlCache::new();
        cache.put("weather:paris", 1);
        cache.put("weather:paris", 2);

        assert_eq!(cache.get("weather:paris").unwrap().payload, 2);
    }

    #[test]
    fn test_ttl_boundary() {
        let cache: TtlCache<u32> = TtlCache::new();
        let ttl = 3600;
        let now = Utc::now().timestamp();

        let almost_expired = CacheEntry {
            payload: 0,
            created_at: now - (ttl - 1),
        };
        let just_expired = CacheEntry {
            payload: 0,
            created_at: now - (ttl + 1),
        };

        assert!(cache.is_valid(&almost_expired, ttl));
        assert!(!cache.is_valid(&just_expired, ttl));
    }

    #[test]
    fn test_cache_key_normalizes_case() {
        assert_eq!(cache_key("hotels", "Toronto"), "hotels:toronto");
        assert_eq!(cache_key("itinerary", "Toronto:3"), "itinerary:toronto:3");
    }
}
