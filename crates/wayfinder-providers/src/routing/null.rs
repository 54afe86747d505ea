//! Null Routing Provider
//!
//! Always abstains. Useful as a stand-in in tests and as the inert end of
//! a provider list.

use async_trait::async_trait;

use wayfinder_domain::error::Result;
use wayfinder_domain::ports::providers::RoutingProvider;
use wayfinder_domain::value_objects::{RoutePoint, RouteResult, TravelProfile};

/// Routing provider that never answers
#[derive(Debug, Default)]
pub struct NullRoutingProvider;

impl NullRoutingProvider {
    /// Create a new null routing provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RoutingProvider for NullRoutingProvider {
    async fn directions(
        &self,
        _start: RoutePoint,
        _end: RoutePoint,
        _profile: TravelProfile,
    ) -> Result<Option<RouteResult>> {
        Ok(None)
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
