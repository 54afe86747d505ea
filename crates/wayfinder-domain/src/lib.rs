//! # Wayfinder - Domain Layer
//!
//! Core business types for multi-provider directions resolution: route and
//! geocoding value objects, the error taxonomy, the provider port traits,
//! and the pure-geometry fallback estimator.
//!
//! This crate has no I/O. Adapters that talk to external routing services
//! live in `wayfinder-providers`; orchestration lives in
//! `wayfinder-application`.

/// Domain-wide constants (earth radius, assumed travel speeds)
pub mod constants;
/// Error taxonomy shared by all layers
pub mod error;
/// Human-readable distance and duration formatting
pub mod format;
/// Great-circle geometry and the fallback route estimator
pub mod geo;
/// Port traits implemented by external providers
pub mod ports;
/// Immutable value objects
pub mod value_objects;

// Re-export the types used on almost every API surface
pub use error::{Error, Result};
pub use value_objects::{GeocodedLocation, RoutePoint, RouteResult, TravelProfile};
