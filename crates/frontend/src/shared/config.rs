//! Runtime configuration of the catalog page.
//!
//! Defaults can be overridden from the page URL, e.g.
//! `index.html?endpoint=http://localhost:8080/products&log=info`.

use log::Level;
use serde::Deserialize;
use std::str::FromStr;

pub const DEFAULT_CATALOG_ENDPOINT: &str = "https://fakestoreapi.com/products";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// URL returning the full catalog as one JSON array
    pub endpoint: String,
    pub log_level: Level,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CATALOG_ENDPOINT.to_string(),
            log_level: Level::Debug,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct QueryOverrides {
    endpoint: Option<String>,
    log: Option<String>,
}

impl CatalogConfig {
    /// Parses overrides from a location query string (leading `?` optional).
    ///
    /// Blank values keep the default; an unknown log level is an error.
    pub fn from_query(query: &str) -> Result<Self, String> {
        let query = query.trim_start_matches('?');
        let overrides: QueryOverrides = serde_qs::from_str(query)
            .map_err(|e| format!("Invalid query string '{}': {}", query, e))?;

        let mut config = Self::default();
        if let Some(endpoint) = overrides.endpoint.filter(|e| !e.trim().is_empty()) {
            config.endpoint = endpoint.trim().to_string();
        }
        if let Some(level) = overrides.log.filter(|l| !l.trim().is_empty()) {
            config.log_level = Level::from_str(level.trim())
                .map_err(|_| format!("Unknown log level: {}", level))?;
        }
        Ok(config)
    }

    /// Reads overrides from `window.location.search`.
    pub fn from_location() -> Result<Self, String> {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_gives_defaults() {
        assert_eq!(CatalogConfig::from_query("").unwrap(), CatalogConfig::default());
        assert_eq!(CatalogConfig::from_query("?").unwrap(), CatalogConfig::default());
        assert_eq!(
            CatalogConfig::default().endpoint,
            "https://fakestoreapi.com/products"
        );
    }

    #[test]
    fn test_overrides() {
        let config =
            CatalogConfig::from_query("?endpoint=http%3A%2F%2Flocalhost%3A8080%2Fproducts&log=warn")
                .unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/products");
        assert_eq!(config.log_level, Level::Warn);
    }

    #[test]
    fn test_unrelated_params_are_ignored() {
        let config = CatalogConfig::from_query("utm_source=mail&log=info").unwrap();
        assert_eq!(config.endpoint, DEFAULT_CATALOG_ENDPOINT);
        assert_eq!(config.log_level, Level::Info);
    }

    #[test]
    fn test_blank_endpoint_keeps_default() {
        let config = CatalogConfig::from_query("endpoint=").unwrap();
        assert_eq!(config.endpoint, DEFAULT_CATALOG_ENDPOINT);
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        assert!(CatalogConfig::from_query("log=loud").is_err());
    }
}
