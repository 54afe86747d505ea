//! Routing Provider Implementations
//!
//! Resolves turn-by-turn directions from external routing APIs. The
//! resolver tries these in a fixed priority order; each offers a different
//! tradeoff between quota, quality, and reliability.
//!
//! ## Available Providers
//!
//! | Provider | Tier | Notes |
//! |----------|------|-------|
//! | OpenRouteService | Primary | Generous free quota, geojson responses |
//! | TomTom | Secondary | Commercial, turn-guidance objects |
//! | GraphHopper | Tertiary | Commercial, simple path shape |
//! | OSRM | Quaternary | Public instances, short timeout |
//! | Null | Testing | Always abstains |

/// GraphHopper routing adapter
pub mod graphhopper;
/// Null routing adapter for tests
pub mod null;
/// OpenRouteService routing adapter
pub mod openroute;
/// Public-instance OSRM routing adapter
pub mod osrm;
/// TomTom routing adapter
pub mod tomtom;

// Re-export for convenience
pub use graphhopper::GraphHopperRoutingProvider;
pub use null::NullRoutingProvider;
pub use openroute::OpenRouteRoutingProvider;
pub use osrm::OsrmRoutingProvider;
pub use tomtom::TomTomRoutingProvider;
