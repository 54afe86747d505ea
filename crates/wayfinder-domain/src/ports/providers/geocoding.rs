//! Geocoding provider port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{GeocodedLocation, RoutePoint};

/// Geocoding Provider Interface
///
/// Same abstention semantics as [`RoutingProvider`](super::RoutingProvider):
/// `Ok(None)` means the provider declined to answer (unconfigured, or no
/// usable result) and is skipped silently; `Err` is a transport or HTTP
/// failure that the orchestrator logs before falling through.
///
/// `reverse` has a default implementation that abstains, for providers
/// that only support forward geocoding.
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    /// Resolve a free-text query to a coordinate and formatted address
    async fn geocode(&self, query: &str) -> Result<Option<GeocodedLocation>>;

    /// Resolve a coordinate to a formatted address
    async fn reverse(&self, point: RoutePoint) -> Result<Option<String>> {
        let _ = point;
        Ok(None)
    }

    /// Name of this provider
    fn provider_name(&self) -> &str;
}
