//! Geocoding Use Case
//!
//! Forward and reverse geocoding over a provider waterfall, with the same
//! absorb-and-fall-through failure policy as directions resolution.

use std::sync::Arc;

use tracing::{debug, warn};

use wayfinder_domain::ports::providers::GeocodingProvider;
use wayfinder_domain::value_objects::{GeocodedLocation, RoutePoint};

use crate::coords::parse_coordinates;

/// Geocoding service
///
/// Providers are tried in priority order. Forward geocoding may genuinely
/// find nothing (`None`); reverse geocoding always answers, degrading to
/// the plain coordinate string when no provider does better.
pub struct GeocodingService {
    providers: Vec<Arc<dyn GeocodingProvider>>,
}

impl GeocodingService {
    /// Create a new geocoding service over providers in priority order
    pub fn new(providers: Vec<Arc<dyn GeocodingProvider>>) -> Self {
        Self { providers }
    }

    /// Names of the configured providers, in priority order
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers
            .iter()
            .map(|provider| provider.provider_name())
            .collect()
    }

    /// Resolve a free-text query to a location.
    ///
    /// Coordinate-shaped input ("5.6037, -0.1870") is answered directly
    /// without touching any provider.
    pub async fn geocode(&self, query: &str) -> Option<GeocodedLocation> {
        if let Some(point) = parse_coordinates(query) {
            return Some(GeocodedLocation {
                point,
                address: query.trim().to_string(),
            });
        }

        for provider in &self.providers {
            let name = provider.provider_name();
            match provider.geocode(query).await {
                Ok(Some(location)) => {
                    debug!(provider = name, address = %location.address, "query geocoded");
                    return Some(location);
                }
                Ok(None) => {
                    debug!(provider = name, "provider abstained");
                }
                Err(error) => {
                    warn!(provider = name, error = %error, "provider failed, falling through");
                }
            }
        }

        None
    }

    /// Resolve a coordinate to an address.
    ///
    /// Always answers; when every provider abstains or fails the result is
    /// the `"lat, lng"` coordinate string.
    pub async fn reverse(&self, point: RoutePoint) -> String {
        for provider in &self.providers {
            let name = provider.provider_name();
            match provider.reverse(point).await {
                Ok(Some(address)) => {
                    debug!(provider = name, address = %address, "coordinate reverse-geocoded");
                    return address;
                }
                Ok(None) => {
                    debug!(provider = name, "provider abstained");
                }
                Err(error) => {
                    warn!(provider = name, error = %error, "provider failed, falling through");
                }
            }
        }

        format!("{:.6}, {:.6}", point.lat, point.lng)
    }
}
