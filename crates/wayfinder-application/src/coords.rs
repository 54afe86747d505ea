//! Free-text coordinate parsing
//!
//! Users paste coordinates straight out of map tools ("5.6037, -0.1870").
//! Detecting them up front lets coordinate input bypass the geocoding
//! providers entirely.

use std::sync::LazyLock;

use regex::Regex;
use wayfinder_domain::RoutePoint;

static COORDINATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(-?\d+\.?\d*),\s*(-?\d+\.?\d*)").expect("coordinate pattern is valid")
});

/// Parse a `"lat, lng"` pair out of free text.
///
/// Returns `None` when the text contains no coordinate-shaped pair.
pub fn parse_coordinates(text: &str) -> Option<RoutePoint> {
    let captures = COORDINATE_PATTERN.captures(text)?;
    let lat = captures.get(1)?.as_str().parse::<f64>().ok()?;
    let lng = captures.get(2)?.as_str().parse::<f64>().ok()?;
    Some(RoutePoint { lat, lng })
}
