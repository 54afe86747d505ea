//! Use-Case Services
//!
//! Orchestrate the provider ports into the caller-facing operations.

/// Directions resolution service
pub mod directions;
/// Geocoding service
pub mod geocoding;

// Re-export for convenience
pub use directions::DirectionsService;
pub use geocoding::GeocodingService;
