use std::time::Duration;

use device_link_core::{API_DOMAIN, DEFAULT_LANG};

pub mod pid_catalog;

pub use pid_catalog::PidCatalog;

/// Where and how the catalog service is reached.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Host (and optional port) of the catalog service, without scheme.
    pub api_domain: String,
    /// Language used when a caller doesn't pass one.
    pub lang: String,
    /// Timeout applied to the single catalog request.
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_domain: API_DOMAIN.to_string(),
            lang: DEFAULT_LANG.to_string(),
            timeout: Duration::from_secs(3),
        }
    }
}

/// Why a catalog fetch produced no data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Unexpected response shape: {0}")]
    Schema(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();

        assert_eq!(config.api_domain, API_DOMAIN);
        assert_eq!(config.lang, DEFAULT_LANG);
        assert_eq!(config.timeout, Duration::from_secs(3));
    }
}
