//! Great-circle geometry and the fallback route estimator
//!
//! Pure functions only. The estimator is the guaranteed terminal case of
//! route resolution: it never fails, and stamps its output with the fixed
//! fallback provider name so callers can tell estimate from real route.

use crate::constants::{
    DRIVING_SPEED_KMH, EARTH_RADIUS_METERS, FALLBACK_PROVIDER_NAME, WALKING_SPEED_KMH,
};
use crate::format::format_distance;
use crate::value_objects::{RoutePoint, RouteResult, TravelProfile};

/// Great-circle distance between two points in meters (haversine formula).
pub fn haversine_distance(start: RoutePoint, end: RoutePoint) -> f64 {
    let lat1 = start.lat.to_radians();
    let lat2 = end.lat.to_radians();
    let delta_lat = (end.lat - start.lat).to_radians();
    let delta_lng = (end.lng - start.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Dominant cardinal heading from `start` to `end`.
///
/// Compares the absolute latitude delta against the absolute longitude
/// delta to pick north/south versus east/west.
pub fn cardinal_direction(start: RoutePoint, end: RoutePoint) -> &'static str {
    let delta_lat = end.lat - start.lat;
    let delta_lng = end.lng - start.lng;

    if delta_lat.abs() > delta_lng.abs() {
        if delta_lat > 0.0 { "north" } else { "south" }
    } else if delta_lng > 0.0 {
        "east"
    } else {
        "west"
    }
}

/// Synthesize a route from pure geometry.
///
/// Distance is the haversine great-circle distance; duration assumes an
/// average speed of 50 km/h driving or 5 km/h walking. The instruction list
/// always has exactly three entries and the geometry is the two-point
/// straight line.
pub fn estimate_route(start: RoutePoint, end: RoutePoint, profile: TravelProfile) -> RouteResult {
    let distance = haversine_distance(start, end);
    let speed_kmh = match profile {
        TravelProfile::Driving => DRIVING_SPEED_KMH,
        TravelProfile::Walking => WALKING_SPEED_KMH,
    };
    let duration = (distance / 1000.0) / speed_kmh * 3600.0;

    RouteResult {
        distance_meters: distance.round(),
        duration_seconds: duration.round(),
        instructions: vec![
            format!(
                "Head {} towards destination",
                cardinal_direction(start, end)
            ),
            format!("Continue for {}", format_distance(distance)),
            "Arrive at destination".to_string(),
        ],
        geometry: vec![[start.lng, start.lat], [end.lng, end.lat]],
        provider: FALLBACK_PROVIDER_NAME.to_string(),
    }
}
