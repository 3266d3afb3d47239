//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use watchfront_storefront::{
    HttpInventoryService, RecordingNavigator, StorefrontConfig, StorefrontSession,
};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// A storefront session over HTTP.
pub type Session = StorefrontSession<HttpInventoryService>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Base URL given on the command line.
    pub base_url: Option<String>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, base_url: Option<String>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((path, config)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            base_url,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(PathBuf, CliConfig)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config_path, config));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Effective session configuration.
    pub fn storefront_config(&self) -> StorefrontConfig {
        self.config.storefront(self.base_url.as_deref())
    }

    /// Open a new storefront session against the configured service.
    ///
    /// Fails before any request is made when the configuration is unusable.
    pub fn session(&self) -> Result<(Session, Arc<RecordingNavigator>)> {
        let config = self.storefront_config();
        config.validate().context("Invalid configuration")?;
        self.output
            .debug(&format!("Inventory service: {}", config.base_url));
        let service = Arc::new(HttpInventoryService::new(&config));
        let navigator = Arc::new(RecordingNavigator::new());
        let session = StorefrontSession::new(service, navigator.clone(), config);
        Ok((session, navigator))
    }

    /// Load the catalog with a spinner.
    pub async fn mount(&self, session: &mut Session) -> Result<()> {
        let spinner = self.output.spinner("Loading catalog...");
        let loaded = session.mount().await.map(|catalog| catalog.len());
        spinner.finish_and_clear();
        let count = loaded.context("Failed to load catalog")?;
        self.output.debug(&format!("Loaded {} products", count));
        Ok(())
    }
}
