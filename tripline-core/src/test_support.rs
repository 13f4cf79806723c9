//! Deterministic helpers for unit and behaviour tests.

use std::cell::RefCell;
use std::convert::Infallible;

use geo::Coord;

use crate::{Itinerary, Location, SnapshotStore, TravelMode};
use crate::travel_time::{LegEstimate, TravelEstimator};

/// Build a location named after `id` at `(lat, lon)`.
///
/// # Panics
/// Panics when the coordinates are outside the valid degree range.
pub fn location_at(id: &str, lat: f64, lon: f64) -> Location {
    Location::new(id, id, format!("{id} street"), Coord { x: lon, y: lat })
        .unwrap_or_else(|err| panic!("test location '{id}' is invalid: {err}"))
}

/// `TravelEstimator` reporting one minute and one kilometre for every leg.
#[derive(Default, Debug, Copy, Clone)]
pub struct UnitEstimator;

impl TravelEstimator for UnitEstimator {
    fn estimate(&self, _start: &Location, _end: &Location, mode: TravelMode) -> LegEstimate {
        LegEstimate {
            mode,
            duration_minutes: 1,
            distance_km: 1.0,
        }
    }
}

/// In-memory `SnapshotStore` holding a single snapshot.
#[derive(Default, Debug)]
pub struct MemorySnapshotStore {
    slot: RefCell<Option<Itinerary>>,
    saves: RefCell<usize>,
}

impl MemorySnapshotStore {
    /// Create a store that already holds `itinerary`.
    pub fn with_snapshot(itinerary: Itinerary) -> Self {
        Self {
            slot: RefCell::new(Some(itinerary)),
            saves: RefCell::new(0),
        }
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    type Error = Infallible;

    fn load(&self) -> Result<Option<Itinerary>, Self::Error> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, itinerary: &Itinerary) -> Result<(), Self::Error> {
        *self.slot.borrow_mut() = Some(itinerary.clone());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}
