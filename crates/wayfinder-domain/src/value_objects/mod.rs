//! Value Objects
//!
//! Immutable types that carry the data flowing between the resolver, the
//! provider adapters, and callers. All are constructed once per request and
//! never mutated or persisted.

/// Geocoding value objects
pub mod geocode;
/// Routing value objects
pub mod route;

// Re-export for convenience
pub use geocode::GeocodedLocation;
pub use route::{RoutePoint, RouteResult, TravelProfile};
