//! Property-based tests for great-circle distances and duration estimates.
//!
//! # Invariants tested
//!
//! - **Identity:** the distance from a point to itself is zero.
//! - **Symmetry:** swapping the endpoints does not change the distance.
//! - **Triangle inequality:** holds up to the rounding of each leg.
//! - **Monotonicity:** longer distances never produce shorter estimates.
//! - **Flight floor:** flying between any two points takes at least two hours.

use geo::Coord;
use proptest::prelude::*;
use tripline_core::test_support::location_at;
use tripline_core::travel_time::minutes_for_distance;
use tripline_core::{TravelMode, distance_between, estimate_duration};

/// Three rounded legs can each be off by half a tenth.
const ROUNDING_TOLERANCE_KM: f64 = 0.15;

fn coord_strategy() -> impl Strategy<Value = Coord<f64>> {
    (-180.0_f64..=180.0, -90.0_f64..=90.0).prop_map(|(x, y)| Coord { x, y })
}

fn mode_strategy() -> impl Strategy<Value = TravelMode> {
    prop::sample::select(TravelMode::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn distance_to_self_is_zero(point in coord_strategy()) {
        prop_assert_eq!(distance_between(point, point), 0.0);
    }

    #[test]
    fn distance_is_symmetric(a in coord_strategy(), b in coord_strategy()) {
        prop_assert_eq!(distance_between(a, b), distance_between(b, a));
    }

    #[test]
    fn distance_is_non_negative(a in coord_strategy(), b in coord_strategy()) {
        prop_assert!(distance_between(a, b) >= 0.0);
    }

    #[test]
    fn distance_obeys_triangle_inequality(
        a in coord_strategy(),
        b in coord_strategy(),
        c in coord_strategy(),
    ) {
        let direct = distance_between(a, c);
        let detour = distance_between(a, b) + distance_between(b, c);
        prop_assert!(
            direct <= detour + ROUNDING_TOLERANCE_KM,
            "direct {direct} km exceeds detour {detour} km"
        );
    }

    #[test]
    fn estimates_never_shrink_with_distance(
        mode in mode_strategy(),
        shorter in 0.0_f64..25_000.0,
        extra in 0.0_f64..5_000.0,
    ) {
        let near = minutes_for_distance(shorter, mode);
        let far = minutes_for_distance(shorter + extra, mode);
        prop_assert!(near <= far, "{mode}: {near} min for {shorter} km, {far} min further");
    }

    #[test]
    fn estimates_are_positive(mode in mode_strategy(), km in 0.0_f64..25_000.0) {
        prop_assert!(minutes_for_distance(km, mode) > 0);
    }

    #[test]
    fn flights_take_at_least_two_hours(a in coord_strategy(), b in coord_strategy()) {
        let start = location_at("start", a.y, a.x);
        let end = location_at("end", b.y, b.x);
        prop_assert!(estimate_duration(&start, &end, TravelMode::Flying) >= 120);
    }
}
