//! # Wayfinder
//!
//! Facade crate: configuration loading, logging initialization, and the
//! wiring that assembles the provider waterfall behind the
//! `DirectionsService` and `GeocodingService` use cases.
//!
//! The binary in this crate exposes the services as a CLI; library
//! consumers can call [`wiring::build_services`] directly.

/// Configuration types and loader
pub mod config;
/// Structured logging setup
pub mod logging;
/// Service assembly
pub mod wiring;

pub use config::{AppConfig, ConfigLoader};
pub use wiring::{Services, build_services};
