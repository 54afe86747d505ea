//! Directions Resolution Use Case
//!
//! Produces exactly one route per request by trying the routing providers
//! in a fixed priority order and synthesizing a geometric estimate when
//! every provider abstains or fails.

use std::sync::Arc;

use tracing::{debug, info, warn};

use wayfinder_domain::geo::estimate_route;
use wayfinder_domain::ports::providers::RoutingProvider;
use wayfinder_domain::value_objects::{RoutePoint, RouteResult, TravelProfile};

/// Directions resolution service
///
/// Holds the provider list in priority order. The order is fixed at wiring
/// time and configuration-independent; there is no adaptive reordering and
/// no per-provider retry. Providers are awaited sequentially so that at
/// most one successful (billable) provider call happens per request.
pub struct DirectionsService {
    providers: Vec<Arc<dyn RoutingProvider>>,
}

impl DirectionsService {
    /// Create a new directions service over providers in priority order
    pub fn new(providers: Vec<Arc<dyn RoutingProvider>>) -> Self {
        Self { providers }
    }

    /// Names of the configured providers, in priority order
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers
            .iter()
            .map(|provider| provider.provider_name())
            .collect()
    }

    /// Resolve directions from `start` to `end`.
    ///
    /// Never fails: every provider error is absorbed into fallthrough, and
    /// the terminal case is a pure-geometry estimate. The only
    /// caller-visible signal of degraded quality is the `provider` field
    /// on the returned route.
    pub async fn get_directions(
        &self,
        start: RoutePoint,
        end: RoutePoint,
        profile: TravelProfile,
    ) -> RouteResult {
        for provider in &self.providers {
            let name = provider.provider_name();
            match provider.directions(start, end, profile).await {
                Ok(Some(route)) => {
                    info!(
                        provider = name,
                        distance_meters = route.distance_meters,
                        duration_seconds = route.duration_seconds,
                        "route resolved"
                    );
                    return route;
                }
                Ok(None) => {
                    debug!(provider = name, "provider abstained");
                }
                Err(error) => {
                    warn!(provider = name, error = %error, "provider failed, falling through");
                }
            }
        }

        info!("all providers exhausted, synthesizing geometric estimate");
        estimate_route(start, end, profile)
    }
}
