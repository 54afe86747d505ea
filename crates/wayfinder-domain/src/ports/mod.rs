//! Port Traits
//!
//! Interfaces the domain depends on, implemented by adapters in
//! `wayfinder-providers`.

/// External provider ports
pub mod providers;
