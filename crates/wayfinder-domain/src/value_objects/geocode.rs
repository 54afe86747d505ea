//! Geocoding Value Objects

use serde::{Deserialize, Serialize};

use crate::value_objects::RoutePoint;

/// Value Object: Geocoded Location
///
/// A coordinate resolved from a free-text query, together with the
/// formatted address the provider returned for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedLocation {
    /// Resolved coordinate
    pub point: RoutePoint,
    /// Formatted address (falls back to the original query text when the
    /// provider returns no formatted form)
    pub address: String,
}
