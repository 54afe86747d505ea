//! # Wayfinder - Provider Implementations
//!
//! Adapters for the external routing and geocoding services. Each provider
//! implements a port (trait) defined in `wayfinder-domain`, translating
//! between the caller's vocabulary and the provider's wire format.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Routing | `RoutingProvider` | OpenRouteService, TomTom, GraphHopper, OSRM, Null |
//! | Geocoding | `GeocodingProvider` | Geoapify, Mapbox |
//!
//! ## Outcome Vocabulary
//!
//! Adapters never decide the overall answer; they report one of three
//! outcomes and the resolver in `wayfinder-application` does the rest:
//! `Ok(Some(..))` (answered), `Ok(None)` (abstained - unconfigured or
//! unusable payload), `Err(..)` (the HTTP call itself failed).

// Re-export wayfinder-domain types commonly used with providers
pub use wayfinder_domain::error::{Error, Result};
pub use wayfinder_domain::ports::providers::{GeocodingProvider, RoutingProvider};

/// Provider-specific constants
pub mod constants;

/// Shared HTTP response handling
pub mod http;

/// Credential validation helpers
pub mod keys;

/// Maneuver-code translation tables
pub mod maneuver;

/// Routing provider implementations
///
/// Implements the `RoutingProvider` trait for the external routing APIs.
pub mod routing;

/// Geocoding provider implementations
///
/// Implements the `GeocodingProvider` trait for the external geocoding APIs.
pub mod geocoding;

// Internal tests module (can access crate internals)
#[cfg(test)]
mod tests;
