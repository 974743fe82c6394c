// src/services/cache.rs
// DOCUMENTATION: In-memory cache for the parsed catalog
// PURPOSE: Optionally skip re-reading the catalog file on every request

use crate::models::Place;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Cache entry with expiration
#[derive(Clone, Debug)]
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

impl<T> CacheEntry<T> {
    fn new(data: T, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

/// Single-slot cache holding the last successfully parsed catalog
/// DOCUMENTATION: Thread-safe, shared by all workers through the loader
pub struct CatalogCache {
    slot: RwLock<Option<CacheEntry<Vec<Place>>>>,
    ttl: Duration,
}

impl CatalogCache {
    /// Create new cache with the given TTL
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl: Duration::from_secs(ttl_seconds),
        }
    }

    /// Get the cached catalog if it has not expired
    pub async fn get(&self) -> Option<Vec<Place>> {
        let slot = self.slot.read().await;

        match slot.as_ref() {
            Some(entry) if !entry.is_expired() => {
                log::debug!("Catalog cache HIT ({} places)", entry.data.len());
                Some(entry.data.clone())
            }
            Some(_) => {
                log::debug!("Catalog cache EXPIRED");
                None
            }
            None => {
                log::debug!("Catalog cache MISS");
                None
            }
        }
    }

    /// Replace the cached catalog
    pub async fn set(&self, places: Vec<Place>) {
        let mut slot = self.slot.write().await;
        log::debug!(
            "Catalog cache SET ({} places, TTL: {}s)",
            places.len(),
            self.ttl.as_secs()
        );
        *slot = Some(CacheEntry::new(places, self.ttl));
    }
}
