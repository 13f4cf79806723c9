//! Facade crate for the Tripline itinerary planner.
//!
//! This crate re-exports the core domain types and, behind the `data`
//! feature, the filesystem-backed snapshot store and place catalogue.

#![forbid(unsafe_code)]

pub use tripline_core::{
    CURRENT_ITINERARY_KEY, DEFAULT_ITINERARY_NAME, HaversineEstimator, Itinerary, ItineraryError,
    ItineraryModel, ItineraryState, LegEstimate, Location, LocationError, ModeSelections,
    SearchError, SearchProvider, SnapshotStore, Suggestion, SuggestionType, TravelEstimator,
    TravelLeg, TravelMode, TravelModeDescriptor, UnknownTravelMode, distance_between, distance_km,
    estimate_duration, estimate_duration_for_id, format_distance, format_travel_time,
};

#[cfg(feature = "data")]
pub use tripline_data::{
    Catalogue, CatalogueError, CatalogueSearchProvider, JsonSnapshotStore, JsonSnapshotStoreError,
};
