// src/services/catalog_loader.rs
// DOCUMENTATION: Reads the place catalog from disk
// PURPOSE: Fail-soft access to the JSON file every query runs against

use crate::config::Config;
use crate::models::Place;
use crate::services::CatalogCache;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reasons a catalog could not be read
/// DOCUMENTATION: Never reaches a client, the loader logs it and serves an empty catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog not found at {0} or {1}")]
    NotFound(PathBuf, PathBuf),

    #[error("failed to read {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {0}: {1}")]
    Parse(PathBuf, #[source] serde_json::Error),
}

/// Loads the catalog from a primary path with a fallback
/// DOCUMENTATION: Shared between workers as application state
pub struct CatalogLoader {
    primary: PathBuf,
    fallback: PathBuf,
    cache: Option<CatalogCache>,
}

impl CatalogLoader {
    pub fn new(primary: impl Into<PathBuf>, fallback: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
            cache: None,
        }
    }

    /// Reuse a parsed catalog for `ttl_seconds`; 0 keeps per-request reads
    pub fn with_cache_ttl(mut self, ttl_seconds: u64) -> Self {
        self.cache = (ttl_seconds > 0).then(|| CatalogCache::new(ttl_seconds));
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.data_file, &config.fallback_data_file)
            .with_cache_ttl(config.catalog_cache_ttl)
    }

    /// Primary path if it exists, otherwise the fallback if that exists
    pub fn resolve_path(&self) -> Option<&Path> {
        [&self.primary, &self.fallback]
            .into_iter()
            .find(|path| path.exists())
            .map(PathBuf::as_path)
    }

    /// Read and parse the catalog, reporting why it failed
    pub async fn try_load(&self) -> Result<Vec<Place>, CatalogError> {
        let path = self
            .resolve_path()
            .ok_or_else(|| CatalogError::NotFound(self.primary.clone(), self.fallback.clone()))?;

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CatalogError::Io(path.to_path_buf(), e))?;

        serde_json::from_str(&content).map_err(|e| CatalogError::Parse(path.to_path_buf(), e))
    }

    /// Load the catalog, degrading to an empty one on any failure
    /// DOCUMENTATION: Failed loads are logged and never cached, the next call retries the disk
    pub async fn load(&self) -> Vec<Place> {
        if let Some(cache) = &self.cache {
            if let Some(places) = cache.get().await {
                return places;
            }
        }

        match self.try_load().await {
            Ok(places) => {
                log::debug!("Loaded {} places", places.len());
                if let Some(cache) = &self.cache {
                    cache.set(places.clone()).await;
                }
                places
            }
            Err(e) => {
                log::error!("Error loading places data: {}", e);
                Vec::new()
            }
        }
    }
}

/// Data quality findings for a loaded catalog
#[derive(Debug, Default, PartialEq)]
pub struct CatalogReport {
    /// Ids of records with an empty name, slug, description or category
    pub incomplete: Vec<i64>,
    /// Slugs used by more than one record; lookups return the first
    pub duplicate_slugs: Vec<String>,
}

impl CatalogReport {
    pub fn inspect(places: &[Place]) -> Self {
        let incomplete = places
            .iter()
            .filter(|p| {
                [&p.name, &p.slug, &p.description, &p.category]
                    .iter()
                    .any(|field| field.trim().is_empty())
            })
            .map(|p| p.id)
            .collect();

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for place in places {
            *seen.entry(place.slug.as_str()).or_default() += 1;
        }
        let mut duplicate_slugs: Vec<String> = seen
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(slug, _)| slug.to_string())
            .collect();
        duplicate_slugs.sort();

        Self {
            incomplete,
            duplicate_slugs,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.incomplete.is_empty() && self.duplicate_slugs.is_empty()
    }

    /// Emit one warning per finding
    pub fn log(&self) {
        for id in &self.incomplete {
            log::warn!("Place {} is missing a required field", id);
        }
        for slug in &self.duplicate_slugs {
            log::warn!("Slug '{}' is used by more than one place", slug);
        }
    }
}
