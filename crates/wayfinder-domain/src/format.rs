//! Display formatting for distances and durations

/// Format a distance in meters for display.
///
/// Below one kilometer the value is rounded to whole meters (`"950m"`);
/// otherwise it is shown in kilometers with one decimal (`"1.5km"`).
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{}m", meters.round() as i64)
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}

/// Format a duration in seconds for display.
///
/// Rounds to whole minutes; an hour or more is shown as `"1h 30m"`.
pub fn format_duration(seconds: f64) -> String {
    let minutes = (seconds / 60.0).round() as i64;
    if minutes < 60 {
        format!("{minutes} min")
    } else {
        format!("{}h {}m", minutes / 60, minutes % 60)
    }
}
