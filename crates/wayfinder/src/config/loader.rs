//! Configuration loader
//!
//! Merges configuration from defaults, an optional TOML file, and
//! environment variables, using Figment.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use tracing::{info, warn};

use wayfinder_domain::error::{Error, Result};

use crate::config::AppConfig;
use crate::logging::parse_log_level;

/// Default configuration filename looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "wayfinder.toml";

/// Environment variable prefix; nested keys are `__`-separated
/// (e.g. `WAYFINDER__ROUTING__OPENROUTE__API_KEY`)
pub const CONFIG_ENV_PREFIX: &str = "WAYFINDER__";

/// Configuration loader service
#[derive(Clone, Default)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables with the `WAYFINDER__` prefix
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                info!("Configuration loaded from {}", config_path.display());
            } else {
                warn!("Configuration file not found: {}", config_path.display());
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            info!("Configuration loaded from {}", default_path.display());
        }

        figment = figment.merge(Env::prefixed(CONFIG_ENV_PREFIX).split("__"));

        let app_config: AppConfig = figment
            .extract()
            .map_err(|e| Error::config(format!("Failed to extract configuration: {e}")))?;

        self.validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config)
            .map_err(|e| Error::config(format!("Failed to serialize config to TOML: {e}")))?;

        std::fs::write(path.as_ref(), toml_string).map_err(|e| {
            Error::config(format!(
                "Failed to write config file {}: {e}",
                path.as_ref().display()
            ))
        })?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the default configuration file in the working directory
    fn find_default_config_path() -> Option<PathBuf> {
        let candidate = env::current_dir().ok()?.join(DEFAULT_CONFIG_FILENAME);
        candidate.exists().then_some(candidate)
    }

    /// Reject configurations that cannot work
    fn validate_config(&self, config: &AppConfig) -> Result<()> {
        parse_log_level(&config.logging.level)?;

        if config.routing.osrm.timeout_secs == 0 {
            return Err(Error::config(
                "routing.osrm.timeout_secs must be greater than zero",
            ));
        }

        Ok(())
    }
}
