//! Configuration
//!
//! One struct per concern, merged from defaults, an optional TOML file,
//! and `WAYFINDER__`-prefixed environment variables.

/// Configuration loader
pub mod loader;

use serde::{Deserialize, Serialize};

pub use loader::ConfigLoader;

/// Default public OSRM instance
pub const DEFAULT_OSRM_SERVER: &str = "https://router.project-osrm.org";

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Routing provider configuration
    pub routing: RoutingConfig,
    /// Geocoding provider configuration
    pub geocoding: GeocodingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            routing: RoutingConfig::default(),
            geocoding: GeocodingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON-formatted log lines
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

/// Credentials and endpoint override for one commercial provider
///
/// A blank (or template placeholder) `api_key` leaves the provider
/// configured but inert: it abstains instead of erroring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// API key; blank means unconfigured
    pub api_key: String,
    /// Optional base URL override (testing, proxies, regional endpoints)
    pub base_url: Option<String>,
}

/// Routing provider configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// OpenRouteService (primary tier)
    pub openroute: ProviderConfig,
    /// TomTom (secondary tier)
    pub tomtom: ProviderConfig,
    /// GraphHopper (tertiary tier)
    pub graphhopper: ProviderConfig,
    /// Public OSRM instances (quaternary tier)
    pub osrm: OsrmConfig,
}

/// Public OSRM tier configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OsrmConfig {
    /// Instance URLs, tried in order
    pub servers: Vec<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            servers: vec![DEFAULT_OSRM_SERVER.to_string()],
            timeout_secs: wayfinder_providers::constants::DEFAULT_OSRM_TIMEOUT.as_secs(),
        }
    }
}

/// Geocoding provider configuration
///
/// Plain values precede the provider tables so the struct serializes
/// cleanly to TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodingConfig {
    /// ISO country code used to filter results
    pub country: String,
    /// Geoapify (forward geocoding, tried first)
    pub geoapify: ProviderConfig,
    /// Mapbox (forward fallback and reverse)
    pub mapbox: ProviderConfig,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            country: "gh".to_string(),
            geoapify: ProviderConfig::default(),
            mapbox: ProviderConfig::default(),
        }
    }
}
