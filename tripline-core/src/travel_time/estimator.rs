//! Estimator trait and the default haversine-based implementation.

use crate::{Location, TravelMode, distance::distance_between};

use super::estimate::minutes_for_distance;

/// Duration and distance estimated for one mode between two stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegEstimate {
    /// Mode the estimate was computed for.
    pub mode: TravelMode,
    /// Estimated duration in whole minutes.
    pub duration_minutes: u32,
    /// Distance in kilometres, rounded to one decimal place.
    pub distance_km: f64,
}

/// Estimate travel between two locations.
///
/// Implementations must be pure: the same inputs always produce the same
/// estimate, so that legs can be recomputed on every read.
///
/// # Examples
///
/// ```rust
/// use tripline_core::{Location, TravelMode};
/// use tripline_core::travel_time::{LegEstimate, TravelEstimator};
///
/// struct Teleporter;
///
/// impl TravelEstimator for Teleporter {
///     fn estimate(&self, _start: &Location, _end: &Location, mode: TravelMode) -> LegEstimate {
///         LegEstimate { mode, duration_minutes: 1, distance_km: 0.0 }
///     }
/// }
///
/// let start = Location::new("a", "A", "", geo::Coord { x: 0.0, y: 0.0 })?;
/// let end = Location::new("b", "B", "", geo::Coord { x: 1.0, y: 1.0 })?;
/// assert_eq!(Teleporter.estimate(&start, &end, TravelMode::Walking).duration_minutes, 1);
/// # Ok::<(), tripline_core::LocationError>(())
/// ```
pub trait TravelEstimator {
    /// Estimate travelling from `start` to `end` using `mode`.
    fn estimate(&self, start: &Location, end: &Location, mode: TravelMode) -> LegEstimate;
}

/// Great-circle estimator using per-mode average speeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct HaversineEstimator;

impl TravelEstimator for HaversineEstimator {
    fn estimate(&self, start: &Location, end: &Location, mode: TravelMode) -> LegEstimate {
        let distance_km = distance_between(start.coordinates, end.coordinates);
        LegEstimate {
            mode,
            duration_minutes: minutes_for_distance(distance_km, mode),
            distance_km,
        }
    }
}

/// Estimate every travel mode between two stops, in presentation order.
pub fn compare_modes<E>(estimator: &E, start: &Location, end: &Location) -> Vec<LegEstimate>
where
    E: TravelEstimator + ?Sized,
{
    TravelMode::ALL
        .into_iter()
        .map(|mode| estimator.estimate(start, end, mode))
        .collect()
}
