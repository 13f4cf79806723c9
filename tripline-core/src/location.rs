//! Places a traveller can add to an itinerary.

use geo::Coord;
use thiserror::Error;

/// Valid longitude range in decimal degrees.
const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;
/// Valid latitude range in decimal degrees.
const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// A stop on a trip.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. On the wire
/// they travel as a `[longitude, latitude]` pair.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripline_core::Location;
///
/// let location = Location::new(
///     "times-square",
///     "Times Square",
///     "Manhattan, NY 10036",
///     Coord { x: -73.9855, y: 40.7580 },
/// )?
/// .with_description("Bright lights and Broadway theatres");
///
/// assert_eq!(location.latitude(), 40.7580);
/// assert!(location.image_url.is_none());
/// # Ok::<(), tripline_core::LocationError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", try_from = "LocationRecord")
)]
pub struct Location {
    /// Identifier, unique within an itinerary.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Geographic position.
    #[cfg_attr(feature = "serde", serde(with = "lon_lat"))]
    pub coordinates: Coord<f64>,
    /// Free-form description.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    /// Reference to a representative image.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub image_url: Option<String>,
}

/// Errors returned by [`Location::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    /// The identifier was empty.
    #[error("location identifier must not be empty")]
    EmptyId,
    /// Longitude or latitude fell outside the valid degree range.
    #[error("coordinates ({longitude}, {latitude}) are outside the valid degree range")]
    InvalidCoordinates {
        /// Offending longitude.
        longitude: f64,
        /// Offending latitude.
        latitude: f64,
    },
}

impl Location {
    /// Validate and construct a [`Location`] without optional details.
    ///
    /// # Errors
    /// Returns [`LocationError::EmptyId`] for a blank identifier and
    /// [`LocationError::InvalidCoordinates`] when the longitude is outside
    /// `-180..=180` or the latitude outside `-90..=90`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        coordinates: Coord<f64>,
    ) -> Result<Self, LocationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(LocationError::EmptyId);
        }
        validate_coordinates(coordinates)?;
        Ok(Self {
            id,
            name: name.into(),
            address: address.into(),
            coordinates,
            description: None,
            image_url: None,
        })
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach an image reference.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Longitude in decimal degrees.
    pub const fn longitude(&self) -> f64 {
        self.coordinates.x
    }

    /// Latitude in decimal degrees.
    pub const fn latitude(&self) -> f64 {
        self.coordinates.y
    }
}

fn validate_coordinates(coordinates: Coord<f64>) -> Result<(), LocationError> {
    if LONGITUDE_RANGE.contains(&coordinates.x) && LATITUDE_RANGE.contains(&coordinates.y) {
        Ok(())
    } else {
        Err(LocationError::InvalidCoordinates {
            longitude: coordinates.x,
            latitude: coordinates.y,
        })
    }
}

/// Unvalidated wire form of a [`Location`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocationRecord {
    id: String,
    name: String,
    address: String,
    #[serde(with = "lon_lat")]
    coordinates: Coord<f64>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<LocationRecord> for Location {
    type Error = LocationError;

    fn try_from(record: LocationRecord) -> Result<Self, Self::Error> {
        let mut location =
            Self::new(record.id, record.name, record.address, record.coordinates)?;
        location.description = record.description;
        location.image_url = record.image_url;
        Ok(location)
    }
}

/// (De)serialise a coordinate as a `[longitude, latitude]` array.
#[cfg(feature = "serde")]
pub(crate) mod lon_lat {
    use geo::Coord;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(crate) fn serialize<S: Serializer>(
        coordinates: &Coord<f64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        [coordinates.x, coordinates.y].serialize(serializer)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Coord<f64>, D::Error> {
        let [x, y] = <[f64; 2]>::deserialize(deserializer)?;
        Ok(Coord { x, y })
    }
}
