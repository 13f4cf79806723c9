//! Estimate how long it takes to travel between two locations.
//!
//! Estimates are derived from the great-circle distance between the stops and
//! a per-mode policy (average speed, fixed overhead and minimum duration). The
//! [`TravelEstimator`] trait is the seam the itinerary model estimates
//! through; [`HaversineEstimator`] is the default implementation.

mod estimate;
mod estimator;

pub use estimate::{estimate_duration, estimate_duration_for_id, minutes_for_distance};
pub use estimator::{HaversineEstimator, LegEstimate, TravelEstimator, compare_modes};
