//! Place search over a fixed catalogue of locations and suggestions.
//!
//! The catalogue stands in for a places backend: text search is a
//! case-insensitive substring match, and nearby search measures great-circle
//! distance from the reference stop.

use std::collections::HashSet;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tripline_core::distance::haversine_km;
use tripline_core::{
    Location, SearchError, SearchProvider, Suggestion, SuggestionType, distance_between,
};
use tripline_fs::read_utf8_to_string;

/// Suggestions further than this from the reference stop are ignored.
pub const NEARBY_RADIUS_KM: f64 = 5.0;

/// Maximum number of suggestions returned by a nearby search.
pub const NEARBY_LIMIT: usize = 10;

/// Errors raised while loading a catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// Reading the catalogue document failed.
    #[error("failed to read catalogue at {path:?}")]
    Read {
        /// Document path.
        path: Utf8PathBuf,
        /// Source error from the filesystem.
        #[source]
        source: io::Error,
    },
    /// The document is not a valid catalogue.
    #[error("failed to parse catalogue at {path:?}")]
    Parse {
        /// Document path.
        path: Utf8PathBuf,
        /// Source error produced by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Two searchable locations share an identifier.
    #[error("catalogue lists location {id:?} more than once")]
    DuplicateLocation {
        /// Repeated identifier.
        id: String,
    },
}

/// Searchable places and the suggestions offered around them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalogue {
    /// Places returned by text search.
    #[serde(default)]
    pub locations: Vec<Location>,
    /// Places offered by nearby search.
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

/// [`SearchProvider`] answering from an in-memory [`Catalogue`].
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripline_core::{Location, SearchProvider};
/// use tripline_data::{Catalogue, CatalogueSearchProvider};
///
/// let park = Location::new("central-park", "Central Park", "New York, NY", Coord {
///     x: -73.9665,
///     y: 40.7812,
/// })?;
/// let provider = CatalogueSearchProvider::new(Catalogue {
///     locations: vec![park],
///     suggestions: Vec::new(),
/// })?;
/// let hits = provider.search("PARK").expect("search");
/// assert_eq!(hits[0].id, "central-park");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogueSearchProvider {
    catalogue: Catalogue,
}

impl CatalogueSearchProvider {
    /// Wrap `catalogue`.
    ///
    /// # Errors
    /// Returns [`CatalogueError::DuplicateLocation`] when two searchable
    /// locations share an identifier.
    pub fn new(catalogue: Catalogue) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::new();
        if let Some(repeat) = catalogue
            .locations
            .iter()
            .find(|location| !seen.insert(location.id.as_str()))
        {
            return Err(CatalogueError::DuplicateLocation {
                id: repeat.id.clone(),
            });
        }
        Ok(Self { catalogue })
    }

    /// Load a catalogue from a JSON document.
    ///
    /// # Errors
    /// Returns [`CatalogueError`] when the document cannot be read, is not a
    /// valid catalogue, or repeats a location identifier.
    pub fn from_path(path: &Utf8Path) -> Result<Self, CatalogueError> {
        let contents = read_utf8_to_string(path).map_err(|source| CatalogueError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalogue: Catalogue =
            serde_json::from_str(&contents).map_err(|source| CatalogueError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(
            "loaded catalogue from {path}: {} locations, {} suggestions",
            catalogue.locations.len(),
            catalogue.suggestions.len()
        );
        Self::new(catalogue)
    }

    /// Backing catalogue.
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Find a searchable location by identifier.
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.catalogue
            .locations
            .iter()
            .find(|location| location.id == id)
    }
}

impl SearchProvider for CatalogueSearchProvider {
    fn search(&self, query: &str) -> Result<Vec<Location>, SearchError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(self
            .catalogue
            .locations
            .iter()
            .filter(|location| {
                location.name.to_lowercase().contains(&needle)
                    || location.address.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    fn nearby(
        &self,
        reference: &Location,
        category: Option<SuggestionType>,
    ) -> Result<Vec<Suggestion>, SearchError> {
        let mut ranked: Vec<(f64, &Suggestion)> = self
            .catalogue
            .suggestions
            .iter()
            .filter(|suggestion| suggestion.id != reference.id)
            .filter(|suggestion| category.is_none_or(|kind| suggestion.kind == kind))
            .map(|suggestion| {
                let from = reference.coordinates;
                let to = suggestion.coordinates;
                (haversine_km(from.y, from.x, to.y, to.x), suggestion)
            })
            .filter(|(km, _)| *km <= NEARBY_RADIUS_KM)
            .collect();
        // Rank on unrounded distances; reported distances are rounded.
        ranked.sort_by(|(left, _), (right, _)| left.total_cmp(right));
        Ok(ranked
            .into_iter()
            .take(NEARBY_LIMIT)
            .map(|(_, suggestion)| Suggestion {
                distance_km: Some(distance_between(
                    reference.coordinates,
                    suggestion.coordinates,
                )),
                ..suggestion.clone()
            })
            .collect())
    }
}
