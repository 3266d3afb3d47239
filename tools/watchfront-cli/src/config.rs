//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use watchfront_storefront::config::DEFAULT_BASE_URL;
use watchfront_storefront::StorefrontConfig;

/// Config file names, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["watchfront.toml", ".watchfront.toml", "watchfront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Inventory service connection.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Catalog listing.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Search box.
    #[serde(default)]
    pub search: SearchConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config text; the format follows the file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Session configuration, with an optional base URL override.
    pub fn storefront(&self, base_url: Option<&str>) -> StorefrontConfig {
        StorefrontConfig::new(base_url.unwrap_or(&self.service.base_url))
            .with_timeout(self.service.timeout_secs)
            .with_page_size(self.catalog.page_size)
            .with_min_query_len(self.search.min_query_len)
    }
}

/// Inventory service connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Products per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    watchfront_commerce::catalog::DEFAULT_PAGE_SIZE
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Search box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Shortest query that shows suggestions.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
}

fn default_min_query_len() -> usize {
    watchfront_commerce::search::MIN_QUERY_LEN
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
        }
    }
}

/// Generate a default watchfront.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Watchfront storefront configuration

[service]
base_url = "{base_url}"
timeout_secs = 30

[catalog]
page_size = 48

[search]
min_query_len = 2
"#,
        base_url = DEFAULT_BASE_URL
    )
}
