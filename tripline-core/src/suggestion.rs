//! Nearby places offered alongside an itinerary stop.

use geo::Coord;

use crate::Location;

/// Broad category of a suggested place.
///
/// # Examples
/// ```
/// use tripline_core::SuggestionType;
///
/// assert_eq!(SuggestionType::Hotel.as_str(), "hotel");
/// assert_eq!(
///     SuggestionType::from_place_types(["cafe", "point_of_interest"]),
///     SuggestionType::Restaurant
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SuggestionType {
    /// Places to eat and drink.
    Restaurant,
    /// Sights and things to do.
    Attraction,
    /// Somewhere to stay.
    Hotel,
    /// Shops and markets.
    Shopping,
}

const RESTAURANT_PLACE_TYPES: [&str; 5] = ["restaurant", "cafe", "bar", "bakery", "food"];
const HOTEL_PLACE_TYPES: [&str; 3] = ["lodging", "hotel", "motel"];
const SHOPPING_PLACE_TYPES: [&str; 4] =
    ["store", "shopping_mall", "department_store", "supermarket"];

impl SuggestionType {
    /// Every category, in presentation order.
    pub const ALL: [Self; 4] = [
        Self::Attraction,
        Self::Restaurant,
        Self::Hotel,
        Self::Shopping,
    ];

    /// Return the lowercase identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Attraction => "attraction",
            Self::Hotel => "hotel",
            Self::Shopping => "shopping",
        }
    }

    /// Classify a place from provider type tags.
    ///
    /// Food tags win over lodging, which wins over retail; anything else,
    /// including no tags at all, is an attraction.
    pub fn from_place_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let types: Vec<S> = types.into_iter().collect();
        let any_of = |candidates: &[&str]| {
            types
                .iter()
                .any(|tag| candidates.contains(&tag.as_ref()))
        };
        if any_of(&RESTAURANT_PLACE_TYPES) {
            Self::Restaurant
        } else if any_of(&HOTEL_PLACE_TYPES) {
            Self::Hotel
        } else if any_of(&SHOPPING_PLACE_TYPES) {
            Self::Shopping
        } else {
            Self::Attraction
        }
    }
}

impl std::fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SuggestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "restaurant" => Ok(Self::Restaurant),
            "attraction" => Ok(Self::Attraction),
            "hotel" => Ok(Self::Hotel),
            "shopping" => Ok(Self::Shopping),
            _ => Err(format!("unknown suggestion type '{s}'")),
        }
    }
}

/// A place near a reference location that the traveller may want to add.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Suggestion {
    /// Identifier, reused as the location identifier once added.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: SuggestionType,
    /// Postal address.
    pub address: String,
    /// `x = longitude`, `y = latitude`.
    #[cfg_attr(feature = "serde", serde(with = "crate::location::lon_lat"))]
    pub coordinates: Coord<f64>,
    /// Reference to a representative image.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub image_url: Option<String>,
    /// Average visitor rating.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub rating: Option<f32>,
    /// Distance in kilometres from the reference location.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub distance_km: Option<f64>,
}

impl Suggestion {
    /// Convert into a [`Location`] ready to be added to an itinerary.
    ///
    /// Category, rating and distance are specific to the suggestion and are
    /// dropped.
    pub fn into_location(self) -> Location {
        Location {
            id: self.id,
            name: self.name,
            address: self.address,
            coordinates: self.coordinates,
            description: None,
            image_url: self.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case(&["bakery"], SuggestionType::Restaurant)]
    #[case(&["lodging", "restaurant"], SuggestionType::Restaurant)]
    #[case(&["motel"], SuggestionType::Hotel)]
    #[case(&["supermarket", "point_of_interest"], SuggestionType::Shopping)]
    #[case(&["museum"], SuggestionType::Attraction)]
    #[case(&[], SuggestionType::Attraction)]
    fn classifies_place_types(#[case] types: &[&str], #[case] expected: SuggestionType) {
        assert_eq!(SuggestionType::from_place_types(types), expected);
    }

    #[rstest]
    fn parsing_round_trips_display() {
        for kind in SuggestionType::ALL {
            assert_eq!(SuggestionType::from_str(&kind.to_string()), Ok(kind));
        }
        assert!(SuggestionType::from_str("nightclub").is_err());
    }

    #[rstest]
    fn converting_to_location_keeps_identity() {
        let suggestion = Suggestion {
            id: "suggestion-2".into(),
            name: "Madame Tussauds".into(),
            kind: SuggestionType::Attraction,
            address: "234 W 42nd St, New York, NY 10036".into(),
            coordinates: Coord { x: -73.9880, y: 40.7564 },
            image_url: None,
            rating: Some(4.3),
            distance_km: Some(0.3),
        };
        let location = suggestion.into_location();
        assert_eq!(location.id, "suggestion-2");
        assert_eq!(location.coordinates, Coord { x: -73.9880, y: 40.7564 });
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn wire_format_names_category_type() {
        let json = r#"{
            "id": "suggestion-1",
            "name": "Hard Rock Cafe",
            "type": "restaurant",
            "address": "1501 Broadway",
            "coordinates": [-73.9861, 40.7574],
            "rating": 4.1
        }"#;
        let suggestion: Suggestion = serde_json::from_str(json).expect("parse");
        assert_eq!(suggestion.kind, SuggestionType::Restaurant);
        assert_eq!(suggestion.coordinates.y, 40.7574);
        assert!(suggestion.distance_km.is_none());
    }
}
