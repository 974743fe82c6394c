// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 8000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Catalog JSON file checked first
    pub data_file: PathBuf,

    /// Catalog JSON file used when `data_file` does not exist
    pub fallback_data_file: PathBuf,

    /// Number of places returned by the featured endpoint
    pub featured_limit: usize,

    /// Seconds a parsed catalog is reused; 0 re-reads the file on every request
    pub catalog_cache_ttl: u64,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            data_file: env::var("PLACES_DATA_FILE")
                .unwrap_or_else(|_| "data/places.json".to_string())
                .into(),

            fallback_data_file: env::var("PLACES_FALLBACK_DATA_FILE")
                .unwrap_or_else(|_| "../data/places.json".to_string())
                .into(),

            featured_limit: env::var("FEATURED_LIMIT")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),

            catalog_cache_ttl: env::var("CATALOG_CACHE_TTL")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .unwrap_or(0),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: A missing catalog is not fatal, the API then serves empty results
    pub fn validate(&self) -> Result<(), String> {
        if self.featured_limit == 0 {
            return Err("FEATURED_LIMIT must be greater than 0".to_string());
        }

        if !self.data_file.exists() && !self.fallback_data_file.exists() {
            log::warn!(
                "No catalog found at {} or {} - place endpoints will return empty results",
                self.data_file.display(),
                self.fallback_data_file.display()
            );
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_address: "127.0.0.1".to_string(),
            server_port: 8000,
            environment: "development".to_string(),
            log_level: "info".to_string(),
            data_file: PathBuf::from("data/places.json"),
            fallback_data_file: PathBuf::from("../data/places.json"),
            featured_limit: 5,
            catalog_cache_ttl: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.featured_limit, 5);
        assert_eq!(config.catalog_cache_ttl, 0);
    }

    #[test]
    fn test_zero_featured_limit_rejected() {
        let config = Config {
            featured_limit: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
