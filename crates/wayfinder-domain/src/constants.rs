//! Domain constants

/// Mean Earth radius in meters, used by the haversine distance calculation.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Assumed average driving speed for estimated durations (km/h).
pub const DRIVING_SPEED_KMH: f64 = 50.0;

/// Assumed average walking speed for estimated durations (km/h).
pub const WALKING_SPEED_KMH: f64 = 5.0;

/// Provider name stamped on synthesized routes.
///
/// Callers distinguish a real provider-sourced route from a geometric
/// estimate by comparing `RouteResult::provider` against this literal.
pub const FALLBACK_PROVIDER_NAME: &str = "Fallback Estimation";
