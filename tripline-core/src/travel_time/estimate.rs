//! Duration estimates from distance and travel mode.

use crate::{Location, TravelMode, distance::distance_between};

/// Estimated minutes to cover `distance_km` using `mode`.
///
/// The moving time is `distance / speed` rounded to whole minutes. Flying adds
/// its fixed overhead, and the result never drops below the mode's minimum.
///
/// # Examples
/// ```
/// use tripline_core::{TravelMode, travel_time::minutes_for_distance};
///
/// assert_eq!(minutes_for_distance(100.0, TravelMode::Driving), 120);
/// assert_eq!(minutes_for_distance(0.2, TravelMode::Walking), 5);
/// assert_eq!(minutes_for_distance(1000.0, TravelMode::Flying), 210);
/// ```
pub fn minutes_for_distance(distance_km: f64, mode: TravelMode) -> u32 {
    let moving = (distance_km / mode.average_speed_kmh() * 60.0).round();
    // Float-to-int casts saturate and map NaN to zero.
    let moving_minutes = moving as u32;
    moving_minutes
        .saturating_add(mode.fixed_overhead_minutes())
        .max(mode.minimum_minutes())
}

/// Estimated travel time in minutes from `start` to `end` using `mode`.
///
/// The estimate uses the same rounded distance reported on travel legs.
pub fn estimate_duration(start: &Location, end: &Location, mode: TravelMode) -> u32 {
    minutes_for_distance(distance_between(start.coordinates, end.coordinates), mode)
}

/// Estimate using a raw mode identifier.
///
/// Unknown identifiers are treated as driving rather than rejected.
pub fn estimate_duration_for_id(start: &Location, end: &Location, mode_id: &str) -> u32 {
    estimate_duration(start, end, TravelMode::from_id_or_default(mode_id))
}
