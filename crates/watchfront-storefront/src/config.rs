//! Storefront client configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};
use watchfront_commerce::catalog::DEFAULT_PAGE_SIZE;
use watchfront_commerce::search::MIN_QUERY_LEN;

use crate::error::{Result, StorefrontError};

/// Default inventory service address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Configuration for a storefront session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Inventory service base URL (e.g., "http://localhost:4000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Products per catalog page
    pub page_size: usize,

    /// Shortest query (in characters) that produces suggestions
    pub min_query_len: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            page_size: DEFAULT_PAGE_SIZE,
            min_query_len: MIN_QUERY_LEN,
        }
    }
}

impl StorefrontConfig {
    /// Create a configuration pointing at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the inventory service base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// Set the page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the minimum search query length
    pub fn with_min_query_len(mut self, min_query_len: usize) -> Self {
        self.min_query_len = min_query_len;
        self
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check the configuration for values the client cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(StorefrontError::Config(format!(
                "base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(StorefrontError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.page_size == 0 {
            return Err(StorefrontError::Config(
                "page_size must be greater than 0".to_string(),
            ));
        }
        if self.min_query_len == 0 {
            return Err(StorefrontError::Config(
                "min_query_len must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.base_url, "http://localhost:4000");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.page_size, 48);
        assert_eq!(config.min_query_len, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = StorefrontConfig::new("https://shop.example")
            .with_timeout(5)
            .with_page_size(12)
            .with_min_query_len(3);
        assert_eq!(config.base_url, "https://shop.example");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.page_size, 12);
        assert_eq!(config.min_query_len, 3);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(StorefrontConfig::new("localhost:4000").validate().is_err());
        assert!(StorefrontConfig::default().with_timeout(0).validate().is_err());
        assert!(StorefrontConfig::default().with_page_size(0).validate().is_err());
        assert!(StorefrontConfig::default()
            .with_min_query_len(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let config: StorefrontConfig =
            serde_json::from_str(r#"{ "base_url": "http://10.0.0.2:4000" }"#).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.2:4000");
        assert_eq!(config.page_size, 48);
    }
}
