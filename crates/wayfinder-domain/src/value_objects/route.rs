//! Routing Value Objects
//!
//! Value objects for directions requests and resolved routes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::FALLBACK_PROVIDER_NAME;
use crate::error::Error;

/// Value Object: Geographic Coordinate
///
/// A WGS84 latitude/longitude pair. Produced by the caller (map click,
/// search result, geolocation) and never mutated.
///
/// ## Example
///
/// ```rust
/// use wayfinder_domain::RoutePoint;
///
/// let accra = RoutePoint { lat: 5.6037, lng: -0.1870 };
/// assert!(accra.lat > 0.0 && accra.lng < 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
}

/// Travel profile requested by the caller
///
/// Each provider adapter translates this into its own vocabulary
/// (`driving-car`/`foot-walking`, `car`/`pedestrian`, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelProfile {
    /// Road travel by car
    #[default]
    Driving,
    /// Travel on foot
    Walking,
}

impl TravelProfile {
    /// Caller-facing name of the profile
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
        }
    }
}

impl fmt::Display for TravelProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "driving" => Ok(Self::Driving),
            "walking" => Ok(Self::Walking),
            _ => Err(Error::invalid_argument(format!(
                "Unknown travel profile: {s}. Use driving or walking"
            ))),
        }
    }
}

/// Value Object: Resolved Route
///
/// The single answer produced for every directions request. Either sourced
/// from the first provider that answered, or synthesized from pure geometry
/// when every provider abstained or failed.
///
/// ## Business Rules
///
/// - `distance_meters` and `duration_seconds` are non-negative
/// - `geometry` is an ordered `[lng, lat]` polyline
/// - `provider` names the adapter that produced the route, or the fixed
///   fallback literal for geometric estimates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Total route length in meters
    pub distance_meters: f64,
    /// Total travel time in seconds
    pub duration_seconds: f64,
    /// Ordered human-readable turn instructions
    pub instructions: Vec<String>,
    /// Ordered `[lng, lat]` coordinate pairs tracing the route
    pub geometry: Vec<[f64; 2]>,
    /// Name of the provider that produced this route
    pub provider: String,
}

impl RouteResult {
    /// Whether this route is a geometric estimate rather than a real route
    ///
    /// The `provider` field is the only caller-visible signal of degraded
    /// quality; callers that care about accuracy should check this.
    pub fn is_estimate(&self) -> bool {
        self.provider == FALLBACK_PROVIDER_NAME
    }
}
