//! Human-readable renderings of durations and distances.

/// Kilometre to statute mile conversion factor.
const MILES_PER_KM: f64 = 0.621_371;

/// Render a duration in minutes.
///
/// # Examples
/// ```
/// use tripline_core::format_travel_time;
///
/// assert_eq!(format_travel_time(45), "45 min");
/// assert_eq!(format_travel_time(120), "2 hr");
/// assert_eq!(format_travel_time(133), "2 hr 13 min");
/// ```
pub fn format_travel_time(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} min");
    }
    let hours = minutes / 60;
    let remainder = minutes % 60;
    if remainder == 0 {
        format!("{hours} hr")
    } else {
        format!("{hours} hr {remainder} min")
    }
}

/// Render a distance given in kilometres as miles.
///
/// Anything under a tenth of a mile is simply "nearby".
///
/// # Examples
/// ```
/// use tripline_core::format_distance;
///
/// assert_eq!(format_distance(0.1), "nearby");
/// assert_eq!(format_distance(111.2), "69.1 mi");
/// ```
pub fn format_distance(km: f64) -> String {
    let miles = km * MILES_PER_KM;
    if miles < 0.1 {
        "nearby".to_owned()
    } else {
        format!("{miles:.1} mi")
    }
}
