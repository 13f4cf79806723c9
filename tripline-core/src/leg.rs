//! Travel legs between consecutive stops.

use crate::TravelMode;

/// The segment between two consecutive locations of an itinerary.
///
/// Legs are derived from the ordered location list and the chosen modes; they
/// are never edited directly.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TravelLeg {
    /// Identifier of the departure location.
    pub start_location_id: String,
    /// Identifier of the arrival location.
    pub end_location_id: String,
    /// Mode chosen for the leg.
    pub travel_mode: TravelMode,
    /// Estimated duration in minutes.
    #[cfg_attr(feature = "serde", serde(rename = "duration"))]
    pub duration_minutes: u32,
    /// Great-circle distance in kilometres.
    #[cfg_attr(feature = "serde", serde(rename = "distance"))]
    pub distance_km: f64,
}

impl TravelLeg {
    /// Return the `(start, end)` identifier pair.
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.start_location_id, &self.end_location_id)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn wire_format_uses_short_field_names() {
        let leg = TravelLeg {
            start_location_id: "a".into(),
            end_location_id: "b".into(),
            travel_mode: TravelMode::Transit,
            duration_minutes: 42,
            distance_km: 12.5,
        };
        let value = serde_json::to_value(&leg).expect("serialise");
        assert_eq!(
            value,
            serde_json::json!({
                "startLocationId": "a",
                "endLocationId": "b",
                "travelMode": "transit",
                "duration": 42,
                "distance": 12.5,
            })
        );
    }
}
