//! Persisted representation of an itinerary.

use chrono::{DateTime, Utc};

use crate::{Location, TravelLeg};

/// Name given to itineraries saved without an explicit one.
pub const DEFAULT_ITINERARY_NAME: &str = "My Travel Plan";

/// Immutable snapshot of an itinerary taken at save time.
///
/// Each save replaces the previous snapshot wholesale; only the identifier and
/// creation time carry over.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Itinerary {
    /// Stable identifier assigned on first save.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Stops in travel order.
    pub locations: Vec<Location>,
    /// Legs derived from `locations` when the snapshot was taken.
    pub travel_legs: Vec<TravelLeg>,
    /// Time of the first save.
    pub created_at: DateTime<Utc>,
    /// Time of the most recent save.
    pub updated_at: DateTime<Utc>,
}

impl Itinerary {
    /// Sum of the captured leg durations, in minutes.
    pub fn total_duration_minutes(&self) -> u32 {
        self.travel_legs
            .iter()
            .map(|leg| leg.duration_minutes)
            .sum()
    }

    /// Sum of the captured leg distances, in kilometres.
    pub fn total_distance_km(&self) -> f64 {
        self.travel_legs.iter().map(|leg| leg.distance_km).sum()
    }
}
