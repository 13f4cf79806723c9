//! Great-circle distance on a spherical Earth.
//!
//! Distances use the haversine formula with a mean Earth radius of
//! [`EARTH_RADIUS_KM`] and are reported in kilometres rounded to one decimal
//! place, which is the precision every displayed and persisted leg uses.

use geo::Coord;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Unrounded haversine distance in kilometres between two points given in
/// decimal degrees.
///
/// # Examples
/// ```
/// use tripline_core::distance::haversine_km;
///
/// let km = haversine_km(0.0, 0.0, 0.0, 1.0);
/// assert!((km - 111.19).abs() < 0.01);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding error can push `a` marginally past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Haversine distance in kilometres, rounded to one decimal place.
///
/// Halves round away from zero. Inputs are not normalised; callers must not
/// pass `NaN` or infinite values.
///
/// # Examples
/// ```
/// use tripline_core::distance_km;
///
/// assert_eq!(distance_km(0.0, 0.0, 0.0, 1.0), 111.2);
/// assert_eq!(distance_km(51.5, -0.1, 51.5, -0.1), 0.0);
/// ```
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    round_tenths(haversine_km(lat1, lon1, lat2, lon2))
}

/// Rounded distance between two `x = longitude`, `y = latitude` coordinates.
pub fn distance_between(start: Coord<f64>, end: Coord<f64>) -> f64 {
    distance_km(start.y, start.x, end.y, end.x)
}

fn round_tenths(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}
