//! Core domain types for the Tripline itinerary planner.
//!
//! The crate estimates travel between stops and keeps an ordered trip
//! consistent with the travel legs derived from it:
//!
//! - [`distance`] computes great-circle distances.
//! - [`travel_time`] turns a distance and a [`TravelMode`] into a duration.
//! - [`ItineraryModel`] owns the ordered stops and per-pair mode choices and
//!   derives [`TravelLeg`]s on demand.
//!
//! Persistence and place search are external collaborators reached through
//! the [`SnapshotStore`] and [`SearchProvider`] traits.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod distance;
mod format;
pub mod itinerary;
mod leg;
mod location;
mod mode_selection;
mod search;
mod store;
mod suggestion;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
mod travel_mode;
pub mod travel_time;

pub use distance::{distance_between, distance_km};
pub use format::{format_distance, format_travel_time};
pub use itinerary::{
    DEFAULT_ITINERARY_NAME, Itinerary, ItineraryError, ItineraryModel, ItineraryState,
};
pub use leg::TravelLeg;
pub use location::{Location, LocationError};
pub use mode_selection::ModeSelections;
pub use search::{SearchError, SearchProvider};
pub use store::{CURRENT_ITINERARY_KEY, SnapshotStore};
pub use suggestion::{Suggestion, SuggestionType};
pub use travel_mode::{TravelMode, TravelModeDescriptor, UnknownTravelMode};
pub use travel_time::{
    HaversineEstimator, LegEstimate, TravelEstimator, estimate_duration, estimate_duration_for_id,
};
