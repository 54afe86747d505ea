//! # Wayfinder - Application Layer
//!
//! Use-case services that orchestrate the provider ports: the directions
//! resolver (priority-ordered provider waterfall with a guaranteed
//! geometric fallback) and the geocoding waterfall.

/// Free-text coordinate parsing
pub mod coords;
/// Use-case services
pub mod use_cases;

// Re-export the services
pub use use_cases::{DirectionsService, GeocodingService};
