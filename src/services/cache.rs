//! In-process expiring key-value cache.
//!
//! A plain map guarded by an RwLock: entries carry a deadline, expired
//! entries are dropped lazily on access, and concurrent writers to the same
//! key resolve last-write-wins. No eviction policy beyond TTL.

use anyhow::{Context, Result};
use parking_lot::RwLock;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

struct Entry {
    expires_at: Instant,
    data: String,
}

/// Shared expiring cache.
#[derive(Clone)]
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
    default_ttl: Duration,
}

impl MemoryCache {
    pub fn new(default_ttl_seconds: u64) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            default_ttl: Duration::from_secs(default_ttl_seconds),
        }
    }

    /// Get a value from cache. Expired entries count as misses and are
    /// removed on the spot.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let expired = {
            let entries = self.entries.read();
            let entry = entries.get(key)?;
            if Instant::now() < entry.expires_at {
                match serde_json::from_str(&entry.data) {
                    Ok(value) => {
                        tracing::debug!(key = key, "Cache hit");
                        return Some(value);
                    }
                    Err(e) => {
                        tracing::warn!(key = key, error = %e, "Failed to deserialize cached value");
                        return None;
                    }
                }
            }
            true
        };

        if expired {
            self.entries.write().remove(key);
            tracing::debug!(key = key, "Cache entry expired");
        }
        None
    }

    /// Set a value with the default TTL.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.set_with_ttl(key, value, self.default_ttl)
    }

    /// Set a value with a custom TTL.
    pub fn set_with_ttl<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) -> Result<()> {
        let data = serde_json::to_string(value).context("Failed to serialize value for cache")?;

        self.entries.write().insert(
            key.to_string(),
            Entry {
                expires_at: Instant::now() + ttl,
                data,
            },
        );

        tracing::debug!(key = key, ttl_secs = ttl.as_secs(), "Cached value");
        Ok(())
    }

    /// Delete a specific key. Returns whether a live entry was removed.
    #[allow(dead_code)]
    pub fn delete(&self, key: &str) -> bool {
        self.entries.write().remove(key).is_some()
    }
}

/// Cache key builders for consistent key formats.
pub mod keys {
    /// Market price sheet, keyed by normalized city and quality tier.
    pub fn market_prices(city: &str, tier: &str) -> String {
        format!("prices:{city}:{tier}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_values() {
        let cache = MemoryCache::new(60);
        cache.set("k", &vec![1, 2, 3]).unwrap();
        assert_eq!(cache.get::<Vec<i32>>("k"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn zero_ttl_expires_immediately() {
        let cache = MemoryCache::new(60);
        cache.set_with_ttl("k", &"v", Duration::ZERO).unwrap();
        assert_eq!(cache.get::<String>("k"), None);
    }

    #[test]
    fn last_write_wins() {
        let cache = MemoryCache::new(60);
        cache.set("k", &"first").unwrap();
        cache.set("k", &"second").unwrap();
        assert_eq!(cache.get::<String>("k").as_deref(), Some("second"));
    }

    #[test]
    fn delete_removes_entry() {
        let cache = MemoryCache::new(60);
        cache.set("k", &1).unwrap();
        assert!(cache.delete("k"));
        assert!(!cache.delete("k"));
        assert_eq!(cache.get::<i32>("k"), None);
    }
}
