//! Ordered trip state and the travel legs derived from it.
//!
//! [`ItineraryModel`] owns the ordered location list, which is the single
//! source of truth for the trip's structure, plus the auxiliary
//! [`ModeSelections`] map. Legs are never stored: every call to
//! [`ItineraryModel::derive_legs`] recomputes them from the current order and
//! selections, so a reader can never observe legs from a previous order.

mod error;
mod snapshot;

pub use error::ItineraryError;
pub use snapshot::{DEFAULT_ITINERARY_NAME, Itinerary};

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::travel_time::{HaversineEstimator, LegEstimate, TravelEstimator, compare_modes};
use crate::{Location, ModeSelections, TravelLeg, TravelMode};

/// Coarse shape of an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItineraryState {
    /// No locations.
    Empty,
    /// A single location, so no legs.
    NonEmpty,
    /// Two or more locations joined by legs.
    Connected,
}

/// Identity carried from one snapshot to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SnapshotMeta {
    id: String,
    created_at: DateTime<Utc>,
}

/// Mutable itinerary state for a single planning session.
///
/// # Examples
/// ```
/// use tripline_core::{ItineraryModel, TravelMode};
/// use tripline_core::test_support::location_at;
///
/// let mut model = ItineraryModel::new();
/// model.add_location(location_at("a", 0.0, 0.0))?;
/// model.add_location(location_at("b", 0.0, 1.0))?;
/// model.set_mode("a", "b", TravelMode::Transit);
///
/// let legs = model.derive_legs();
/// assert_eq!(legs.len(), 1);
/// assert_eq!(legs[0].travel_mode, TravelMode::Transit);
/// assert_eq!(legs[0].distance_km, 111.2);
/// # Ok::<(), tripline_core::ItineraryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ItineraryModel<E = HaversineEstimator> {
    locations: Vec<Location>,
    modes: ModeSelections,
    default_mode: TravelMode,
    selected: Option<String>,
    saved: Option<SnapshotMeta>,
    estimator: E,
}

impl ItineraryModel {
    /// Construct an empty model using great-circle estimates.
    pub fn new() -> Self {
        Self::with_estimator(HaversineEstimator)
    }

    /// Rebuild a model from a persisted snapshot using great-circle estimates.
    pub fn from_snapshot(itinerary: Itinerary) -> Self {
        Self::restore(itinerary, HaversineEstimator)
    }
}

impl Default for ItineraryModel {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TravelEstimator> ItineraryModel<E> {
    /// Construct an empty model that estimates legs with `estimator`.
    pub fn with_estimator(estimator: E) -> Self {
        Self {
            locations: Vec::new(),
            modes: ModeSelections::new(),
            default_mode: TravelMode::default(),
            selected: None,
            saved: None,
            estimator,
        }
    }

    /// Rebuild a model from a snapshot.
    ///
    /// Mode selections are recovered from the snapshot's legs, and the next
    /// snapshot keeps the original identifier and creation time. Locations
    /// repeating an earlier identifier are skipped.
    pub fn restore(itinerary: Itinerary, estimator: E) -> Self {
        let mut model = Self::with_estimator(estimator);
        model.modes = ModeSelections::from_legs(&itinerary.travel_legs);
        model.resume_snapshot(&itinerary);
        for location in itinerary.locations {
            if let Err(err) = model.add_location(location) {
                warn!("skipping location while restoring '{}': {err}", itinerary.id);
            }
        }
        model.selected = None;
        model
    }

    /// Carry the identifier and creation time of `previous` into later
    /// snapshots, leaving the stops and mode selections untouched.
    pub fn resume_snapshot(&mut self, previous: &Itinerary) {
        self.saved = Some(SnapshotMeta {
            id: previous.id.clone(),
            created_at: previous.created_at,
        });
    }

    /// Use `mode` for legs without an explicit selection.
    #[must_use]
    pub fn with_default_mode(mut self, mode: TravelMode) -> Self {
        self.default_mode = mode;
        self
    }

    /// Mode used for legs without an explicit selection.
    pub const fn default_mode(&self) -> TravelMode {
        self.default_mode
    }

    /// Stops in travel order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Look up a stop by identifier.
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.id == id)
    }

    /// Whether a stop with `id` is part of the trip.
    pub fn contains(&self, id: &str) -> bool {
        self.location(id).is_some()
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the trip has no stops.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Coarse shape of the trip.
    pub fn state(&self) -> ItineraryState {
        match self.locations.len() {
            0 => ItineraryState::Empty,
            1 => ItineraryState::NonEmpty,
            _ => ItineraryState::Connected,
        }
    }

    /// Append `location` to the end of the trip and select it.
    ///
    /// # Errors
    /// Returns [`ItineraryError::DuplicateLocation`] and leaves the model
    /// unchanged when a stop with the same identifier already exists.
    pub fn add_location(&mut self, location: Location) -> Result<(), ItineraryError> {
        if self.contains(&location.id) {
            return Err(ItineraryError::DuplicateLocation { id: location.id });
        }
        self.selected = Some(location.id.clone());
        self.locations.push(location);
        Ok(())
    }

    /// Remove the stop with `id`, returning it.
    ///
    /// Unknown identifiers are ignored. Mode selections touching the removed
    /// stop stay behind as inert entries.
    pub fn remove_location(&mut self, id: &str) -> Option<Location> {
        let Some(index) = self.locations.iter().position(|location| location.id == id) else {
            debug!("ignoring removal of unknown location '{id}'");
            return None;
        };
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        Some(self.locations.remove(index))
    }

    /// Replace the order of stops wholesale.
    ///
    /// # Errors
    /// Returns [`ItineraryError::NotAPermutation`] and leaves the order
    /// unchanged unless `order` names every current stop exactly once.
    pub fn reorder<I, S>(&mut self, order: I) -> Result<(), ItineraryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let order: Vec<S> = order.into_iter().collect();
        if order.len() != self.locations.len() {
            return Err(ItineraryError::NotAPermutation);
        }
        let mut seen = HashSet::with_capacity(order.len());
        for id in &order {
            let id = id.as_ref();
            if !self.contains(id) || !seen.insert(id) {
                return Err(ItineraryError::NotAPermutation);
            }
        }

        let mut by_id: HashMap<String, Location> = self
            .locations
            .drain(..)
            .map(|location| (location.id.clone(), location))
            .collect();
        self.locations = order
            .iter()
            .filter_map(|id| by_id.remove(id.as_ref()))
            .collect();
        Ok(())
    }

    /// Choose `mode` for travel from `start` to `end`, returning the previous
    /// choice.
    ///
    /// The pair need not be adjacent now; the choice applies whenever it is.
    pub fn set_mode(&mut self, start: &str, end: &str, mode: TravelMode) -> Option<TravelMode> {
        self.modes.set(start, end, mode)
    }

    /// Mode that a leg from `start` to `end` would use.
    pub fn mode_for(&self, start: &str, end: &str) -> TravelMode {
        self.modes.get(start, end).unwrap_or(self.default_mode)
    }

    /// All recorded selections, inert ones included.
    pub const fn mode_selections(&self) -> &ModeSelections {
        &self.modes
    }

    /// Forget selections whose pair is not adjacent in the current order.
    pub fn prune_mode_selections(&mut self) -> usize {
        self.modes.retain_adjacent(&self.locations)
    }

    /// Derive one leg per adjacent pair of stops, in travel order.
    pub fn derive_legs(&self) -> Vec<TravelLeg> {
        self.locations
            .windows(2)
            .filter_map(|pair| match pair {
                [start, end] => Some(self.leg_between(start, end)),
                _ => None,
            })
            .collect()
    }

    /// Sum of the current leg durations, in minutes.
    pub fn total_duration_minutes(&self) -> u32 {
        self.derive_legs()
            .iter()
            .map(|leg| leg.duration_minutes)
            .sum()
    }

    /// Sum of the current leg distances, in kilometres.
    pub fn total_distance_km(&self) -> f64 {
        self.derive_legs().iter().map(|leg| leg.distance_km).sum()
    }

    /// Estimates for every mode between two stops of the trip.
    ///
    /// Returns `None` when either identifier is unknown.
    pub fn travel_options(&self, start: &str, end: &str) -> Option<Vec<LegEstimate>> {
        let start = self.location(start)?;
        let end = self.location(end)?;
        Some(compare_modes(&self.estimator, start, end))
    }

    /// Mark the stop with `id` as selected; returns `false` for unknown ids.
    pub fn select(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.selected = Some(id.to_owned());
            true
        } else {
            false
        }
    }

    /// Currently selected stop, if any.
    pub fn selected_location(&self) -> Option<&Location> {
        self.selected.as_deref().and_then(|id| self.location(id))
    }

    /// Capture the trip as an [`Itinerary`] stamped with the current time.
    ///
    /// # Errors
    /// Returns [`ItineraryError::EmptyItinerary`] when there are no stops.
    pub fn snapshot(&mut self, name: impl Into<String>) -> Result<Itinerary, ItineraryError> {
        self.snapshot_at(name, Utc::now())
    }

    /// Capture the trip as an [`Itinerary`] stamped with `now`.
    ///
    /// The first snapshot fixes the identifier and creation time; later ones
    /// reuse them and only move the update time.
    ///
    /// # Errors
    /// Returns [`ItineraryError::EmptyItinerary`] when there are no stops.
    pub fn snapshot_at(
        &mut self,
        name: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Itinerary, ItineraryError> {
        if self.locations.is_empty() {
            return Err(ItineraryError::EmptyItinerary);
        }
        let meta = self
            .saved
            .get_or_insert_with(|| SnapshotMeta {
                id: format!("itinerary-{}", now.timestamp_millis()),
                created_at: now,
            })
            .clone();
        Ok(Itinerary {
            id: meta.id,
            name: name.into(),
            locations: self.locations.clone(),
            travel_legs: self.derive_legs(),
            created_at: meta.created_at,
            updated_at: now,
        })
    }

    fn leg_between(&self, start: &Location, end: &Location) -> TravelLeg {
        let mode = self.mode_for(&start.id, &end.id);
        let estimate = self.estimator.estimate(start, end, mode);
        TravelLeg {
            start_location_id: start.id.clone(),
            end_location_id: end.id.clone(),
            travel_mode: estimate.mode,
            duration_minutes: estimate.duration_minutes,
            distance_km: estimate.distance_km,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SnapshotStore;
    use crate::test_support::{MemorySnapshotStore, UnitEstimator, location_at};
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn abc() -> ItineraryModel {
        let mut model = ItineraryModel::new();
        for location in [
            location_at("A", 0.0, 0.0),
            location_at("B", 0.0, 1.0),
            location_at("C", 1.0, 1.0),
        ] {
            model.add_location(location).expect("unique ids");
        }
        model
    }

    fn endpoints(legs: &[TravelLeg]) -> Vec<(String, String)> {
        legs.iter()
            .map(|leg| (leg.start_location_id.clone(), leg.end_location_id.clone()))
            .collect()
    }

    fn pair(start: &str, end: &str) -> (String, String) {
        (start.to_owned(), end.to_owned())
    }

    #[rstest]
    fn derives_a_leg_per_adjacent_pair(abc: ItineraryModel) {
        let legs = abc.derive_legs();
        assert_eq!(endpoints(&legs), vec![pair("A", "B"), pair("B", "C")]);
        for leg in &legs {
            assert_eq!(leg.travel_mode, TravelMode::Driving);
            assert!(leg.duration_minutes > 0);
            assert!((leg.distance_km - 111.2).abs() < 0.5);
        }
    }

    #[rstest]
    fn fewer_than_two_stops_yield_no_legs() {
        let mut model = ItineraryModel::new();
        assert_eq!(model.state(), ItineraryState::Empty);
        assert!(model.derive_legs().is_empty());
        model.add_location(location_at("A", 0.0, 0.0)).expect("add");
        assert_eq!(model.state(), ItineraryState::NonEmpty);
        assert!(model.derive_legs().is_empty());
    }

    #[rstest]
    fn duplicate_add_is_reported_and_ignored(mut abc: ItineraryModel) {
        let before = abc.locations().to_vec();
        let err = abc
            .add_location(location_at("B", 10.0, 10.0))
            .expect_err("duplicate");
        assert_eq!(err, ItineraryError::DuplicateLocation { id: "B".into() });
        assert_eq!(abc.locations(), before.as_slice());
    }

    #[rstest]
    fn reorder_drops_selection_for_broken_pair(mut abc: ItineraryModel) {
        abc.set_mode("A", "B", TravelMode::Walking);
        abc.reorder(["B", "A", "C"]).expect("permutation");

        let legs = abc.derive_legs();
        assert_eq!(endpoints(&legs), vec![pair("B", "A"), pair("A", "C")]);
        assert!(legs.iter().all(|leg| leg.travel_mode == TravelMode::Driving));
        // The original choice is inert but still recorded.
        assert_eq!(abc.mode_selections().get("A", "B"), Some(TravelMode::Walking));
    }

    #[rstest]
    fn selection_revives_when_adjacency_returns(mut abc: ItineraryModel) {
        abc.set_mode("A", "B", TravelMode::Walking);
        abc.reorder(["B", "A", "C"]).expect("permutation");
        abc.reorder(["A", "B", "C"]).expect("permutation");
        let legs = abc.derive_legs();
        assert_eq!(legs.first().map(|leg| leg.travel_mode), Some(TravelMode::Walking));
    }

    #[rstest]
    #[case(vec!["A", "B"])]
    #[case(vec!["A", "B", "B"])]
    #[case(vec!["A", "B", "D"])]
    #[case(vec!["A", "B", "C", "D"])]
    fn reorder_rejects_non_permutations(mut abc: ItineraryModel, #[case] order: Vec<&str>) {
        let before = abc.locations().to_vec();
        assert_eq!(abc.reorder(order), Err(ItineraryError::NotAPermutation));
        assert_eq!(abc.locations(), before.as_slice());
    }

    #[rstest]
    fn removal_joins_neighbours(mut abc: ItineraryModel) {
        abc.set_mode("A", "C", TravelMode::Transit);
        let removed = abc.remove_location("B").expect("present");
        assert_eq!(removed.id, "B");

        let legs = abc.derive_legs();
        assert_eq!(endpoints(&legs), vec![pair("A", "C")]);
        assert_eq!(legs.first().map(|leg| leg.travel_mode), Some(TravelMode::Transit));
    }

    #[rstest]
    fn removing_unknown_location_is_a_no_op(mut abc: ItineraryModel) {
        assert!(abc.remove_location("Z").is_none());
        assert_eq!(abc.len(), 3);
    }

    #[rstest]
    fn adding_selects_and_removing_clears_selection(mut abc: ItineraryModel) {
        assert_eq!(abc.selected_location().map(|l| l.id.as_str()), Some("C"));
        assert!(abc.select("A"));
        assert!(!abc.select("Z"));
        abc.remove_location("A");
        assert!(abc.selected_location().is_none());
    }

    #[rstest]
    fn prune_removes_only_orphans(mut abc: ItineraryModel) {
        abc.set_mode("A", "B", TravelMode::Walking);
        abc.set_mode("C", "A", TravelMode::Flying);
        assert_eq!(abc.prune_mode_selections(), 1);
        assert_eq!(abc.mode_selections().len(), 1);
    }

    #[rstest]
    fn snapshot_requires_locations() {
        let mut model = ItineraryModel::new();
        assert_eq!(
            model.snapshot(DEFAULT_ITINERARY_NAME),
            Err(ItineraryError::EmptyItinerary)
        );
    }

    #[rstest]
    fn snapshots_keep_identity_across_saves(mut abc: ItineraryModel) {
        let first_time = Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).single().expect("time");
        let second_time = Utc.with_ymd_and_hms(2026, 5, 2, 9, 0, 0).single().expect("time");

        let first = abc.snapshot_at("Weekend", first_time).expect("snapshot");
        abc.remove_location("C");
        let second = abc.snapshot_at("Weekend", second_time).expect("snapshot");

        assert_eq!(first.id, format!("itinerary-{}", first_time.timestamp_millis()));
        assert_eq!(second.id, first.id);
        assert_eq!(second.created_at, first_time);
        assert_eq!(second.updated_at, second_time);
        assert_eq!(first.travel_legs.len(), 2);
        assert_eq!(second.travel_legs.len(), 1);
    }

    #[rstest]
    fn restore_recovers_modes_and_identity(mut abc: ItineraryModel) {
        let saved_at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).single().expect("time");
        abc.set_mode("B", "C", TravelMode::Flying);
        let snapshot = abc.snapshot_at("Trip", saved_at).expect("snapshot");

        let mut restored = ItineraryModel::from_snapshot(snapshot.clone());
        assert_eq!(restored.locations(), snapshot.locations.as_slice());
        assert_eq!(restored.mode_for("B", "C"), TravelMode::Flying);
        assert!(restored.selected_location().is_none());

        let later = restored.snapshot("Trip").expect("snapshot");
        assert_eq!(later.id, snapshot.id);
        assert_eq!(later.created_at, saved_at);
    }

    #[rstest]
    fn stored_snapshots_reload_into_an_equivalent_model(mut abc: ItineraryModel) {
        let store = MemorySnapshotStore::default();
        assert!(matches!(store.load(), Ok(None)));
        abc.set_mode("A", "B", TravelMode::Walking);
        let saved = abc.snapshot("Weekend").expect("snapshot");
        let Ok(()) = store.save(&saved);

        let Ok(Some(loaded)) = store.load() else {
            panic!("snapshot should be stored");
        };
        let mut restored = ItineraryModel::from_snapshot(loaded);
        assert_eq!(restored.derive_legs(), abc.derive_legs());

        let resaved = restored.snapshot("Weekend").expect("snapshot");
        let Ok(()) = store.save(&resaved);
        assert_eq!(store.save_count(), 2);
        assert_eq!(resaved.id, saved.id);
        assert_eq!(resaved.created_at, saved.created_at);
    }

    #[rstest]
    fn resumed_snapshot_keeps_identity_for_a_fresh_model(mut abc: ItineraryModel) {
        let first_at = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).single().expect("time");
        let previous = abc.snapshot_at("Trip", first_at).expect("snapshot");

        let mut fresh = ItineraryModel::new();
        fresh.add_location(location_at("Z", 2.0, 2.0)).expect("add");
        fresh.resume_snapshot(&previous);
        let later = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).single().expect("time");
        let next = fresh.snapshot_at("Trip", later).expect("snapshot");

        assert_eq!(next.id, previous.id);
        assert_eq!(next.created_at, first_at);
        assert_eq!(next.updated_at, later);
        assert_eq!(next.locations.len(), 1);
    }

    #[rstest]
    fn restore_skips_duplicate_locations() {
        let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).single().expect("time");
        let itinerary = Itinerary {
            id: "itinerary-1".into(),
            name: "Dupes".into(),
            locations: vec![location_at("A", 0.0, 0.0), location_at("A", 1.0, 1.0)],
            travel_legs: Vec::new(),
            created_at: at,
            updated_at: at,
        };
        let model = ItineraryModel::from_snapshot(itinerary);
        assert_eq!(model.len(), 1);
    }

    #[rstest]
    fn custom_estimator_drives_leg_values() {
        let mut model = ItineraryModel::with_estimator(UnitEstimator)
            .with_default_mode(TravelMode::Walking);
        model.add_location(location_at("A", 0.0, 0.0)).expect("add");
        model.add_location(location_at("B", 5.0, 5.0)).expect("add");
        model.add_location(location_at("C", 9.0, 9.0)).expect("add");
        assert_eq!(model.total_duration_minutes(), 2);
        assert!((model.total_distance_km() - 2.0).abs() < f64::EPSILON);
        assert!(model.derive_legs().iter().all(|leg| leg.travel_mode == TravelMode::Walking));
    }

    #[rstest]
    fn travel_options_cover_all_modes(abc: ItineraryModel) {
        let options = abc.travel_options("A", "B").expect("known stops");
        assert_eq!(options.len(), TravelMode::ALL.len());
        assert!(abc.travel_options("A", "Z").is_none());
    }
}
