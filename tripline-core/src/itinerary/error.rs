use thiserror::Error;

/// Conditions reported by [`crate::ItineraryModel`] operations.
///
/// None of these are fatal: the model is left untouched whenever one is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItineraryError {
    /// A location with the same identifier is already part of the trip.
    #[error("location '{id}' is already in the itinerary")]
    DuplicateLocation {
        /// Identifier that was rejected.
        id: String,
    },
    /// Snapshots require at least one location.
    #[error("cannot save an empty itinerary")]
    EmptyItinerary,
    /// A reorder did not name every current location exactly once.
    #[error("new order must be a permutation of the current locations")]
    NotAPermutation,
}
