//! Filesystem-backed collaborators for the Tripline core.
//!
//! Responsibilities:
//! - Persist itinerary snapshots as JSON documents keyed by name.
//! - Serve place search and nearby suggestions from a JSON catalogue.
//!
//! Boundaries:
//! - Do not encode itinerary rules (live in `tripline-core`).
//! - Keep I/O synchronous; callers own any scheduling.
//!
//! Invariants:
//! - A snapshot save either replaces the stored document wholesale or leaves
//!   the previous one untouched.
//! - No global mutable state.

pub mod catalogue;
pub mod snapshot;

pub use catalogue::{
    Catalogue, CatalogueError, CatalogueSearchProvider, NEARBY_LIMIT, NEARBY_RADIUS_KM,
};
pub use snapshot::{JsonSnapshotStore, JsonSnapshotStoreError};
