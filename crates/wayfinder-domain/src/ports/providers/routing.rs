//! Routing provider port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{RoutePoint, RouteResult, TravelProfile};

/// Directions Provider Interface
///
/// Contract for adapters that resolve turn-by-turn directions from an
/// external routing API. The resolver tries providers in a fixed priority
/// order; this trait's return shape encodes the three outcomes it
/// distinguishes:
///
/// - `Ok(Some(route))` — the provider answered; resolution stops here.
/// - `Ok(None)` — abstention: the provider is unconfigured (missing or
///   placeholder credential) or returned a payload without the expected
///   structure. Skipped silently.
/// - `Err(error)` — the HTTP call itself failed (rate limit, auth, other
///   non-2xx, transport). Logged as a warning, then skipped.
///
/// Implementations must not retry; a failure or abstention is final for
/// that provider within one request.
#[async_trait]
pub trait RoutingProvider: Send + Sync {
    /// Resolve directions from `start` to `end` for the given profile
    async fn directions(
        &self,
        start: RoutePoint,
        end: RoutePoint,
        profile: TravelProfile,
    ) -> Result<Option<RouteResult>>;

    /// Name of this provider, as stamped on the routes it produces
    fn provider_name(&self) -> &str;
}
