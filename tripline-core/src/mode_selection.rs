//! Travel modes chosen for directed pairs of locations.
//!
//! Selections are keyed by the ordered `(start, end)` identifier pair rather
//! than by position, so a choice survives reorders that later restore the
//! same adjacency. Entries whose pair is no longer adjacent are inert: they
//! stay in the map but no leg reads them.

use std::collections::HashMap;

use crate::{Location, TravelLeg, TravelMode};

/// Sparse map from directed location pairs to chosen travel modes.
///
/// # Examples
/// ```
/// use tripline_core::{ModeSelections, TravelMode};
///
/// let mut selections = ModeSelections::new();
/// selections.set("a", "b", TravelMode::Walking);
/// assert_eq!(selections.get("a", "b"), Some(TravelMode::Walking));
/// assert_eq!(selections.get("b", "a"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModeSelections {
    // start id -> end id -> mode, so lookups borrow the identifiers.
    entries: HashMap<String, HashMap<String, TravelMode>>,
}

impl ModeSelections {
    /// Construct an empty selection map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild selections from previously derived legs.
    pub fn from_legs<'a, I>(legs: I) -> Self
    where
        I: IntoIterator<Item = &'a TravelLeg>,
    {
        let mut selections = Self::new();
        for leg in legs {
            selections.set(
                &leg.start_location_id,
                &leg.end_location_id,
                leg.travel_mode,
            );
        }
        selections
    }

    /// Insert or replace the mode for `start → end`, returning the previous one.
    pub fn set(&mut self, start: &str, end: &str, mode: TravelMode) -> Option<TravelMode> {
        self.entries
            .entry(start.to_owned())
            .or_default()
            .insert(end.to_owned(), mode)
    }

    /// Return the mode chosen for exactly `start → end`.
    pub fn get(&self, start: &str, end: &str) -> Option<TravelMode> {
        self.entries.get(start)?.get(end).copied()
    }

    /// Number of recorded selections, inert ones included.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Whether no selections have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(HashMap::is_empty)
    }

    /// Iterate over `(start, end, mode)` entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, TravelMode)> + '_ {
        self.entries.iter().flat_map(|(start, ends)| {
            ends.iter()
                .map(move |(end, mode)| (start.as_str(), end.as_str(), *mode))
        })
    }

    /// Drop entries whose pair is not adjacent in `order`; returns how many
    /// were removed.
    pub fn retain_adjacent(&mut self, order: &[Location]) -> usize {
        let before = self.len();
        let adjacent: HashMap<&str, &str> = order
            .windows(2)
            .filter_map(|pair| match pair {
                [a, b] => Some((a.id.as_str(), b.id.as_str())),
                _ => None,
            })
            .collect();
        self.entries.retain(|start, ends| {
            let next = adjacent.get(start.as_str()).copied();
            ends.retain(|end, _| next == Some(end.as_str()));
            !ends.is_empty()
        });
        before - self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::location_at;
    use rstest::rstest;

    #[rstest]
    fn set_replaces_existing_choice() {
        let mut selections = ModeSelections::new();
        assert_eq!(selections.set("a", "b", TravelMode::Walking), None);
        assert_eq!(
            selections.set("a", "b", TravelMode::Flying),
            Some(TravelMode::Walking)
        );
        assert_eq!(selections.len(), 1);
        assert_eq!(selections.get("a", "b"), Some(TravelMode::Flying));
    }

    #[rstest]
    fn retain_adjacent_prunes_orphans_only() {
        let order = vec![
            location_at("a", 0.0, 0.0),
            location_at("b", 0.0, 1.0),
            location_at("c", 1.0, 1.0),
        ];
        let mut selections = ModeSelections::new();
        selections.set("a", "b", TravelMode::Walking);
        selections.set("b", "c", TravelMode::Transit);
        selections.set("c", "a", TravelMode::Flying);
        selections.set("b", "a", TravelMode::Driving);

        assert_eq!(selections.retain_adjacent(&order), 2);
        assert_eq!(selections.get("a", "b"), Some(TravelMode::Walking));
        assert_eq!(selections.get("b", "c"), Some(TravelMode::Transit));
        assert!(selections.get("c", "a").is_none());
        assert_eq!(selections.len(), 2);
    }

    #[rstest]
    fn pruning_everything_leaves_an_empty_map() {
        let order = vec![location_at("a", 0.0, 0.0), location_at("b", 0.0, 1.0)];
        let mut selections = ModeSelections::new();
        selections.set("b", "a", TravelMode::Walking);
        selections.set("a", "c", TravelMode::Flying);

        assert_eq!(selections.retain_adjacent(&order), 2);
        assert!(selections.is_empty());
        assert_eq!(selections.iter().count(), 0);
    }

    #[rstest]
    fn from_legs_restores_choices() {
        let legs = [TravelLeg {
            start_location_id: "a".into(),
            end_location_id: "b".into(),
            travel_mode: TravelMode::Transit,
            duration_minutes: 10,
            distance_km: 1.0,
        }];
        let selections = ModeSelections::from_legs(&legs);
        assert_eq!(selections.get("a", "b"), Some(TravelMode::Transit));
        assert_eq!(selections.iter().count(), 1);
    }
}
