//! Place search seam.
//!
//! The core never talks to a places backend itself. A [`SearchProvider`]
//! returns results already shaped as [`Location`] and [`Suggestion`] values;
//! translating a provider-specific schema is the implementer's job.

use thiserror::Error;

use crate::{Location, Suggestion, SuggestionType};

/// Errors from [`SearchProvider`] queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The free-text query was blank.
    #[error("search query must not be empty")]
    EmptyQuery,
    /// The backing service could not answer.
    #[error("search provider unavailable: {0}")]
    Unavailable(String),
}

/// Look up places by text and around an existing stop.
///
/// # Examples
///
/// ```rust
/// use tripline_core::{Location, SearchError, SearchProvider, Suggestion, SuggestionType};
///
/// struct Nowhere;
///
/// impl SearchProvider for Nowhere {
///     fn search(&self, query: &str) -> Result<Vec<Location>, SearchError> {
///         if query.trim().is_empty() {
///             return Err(SearchError::EmptyQuery);
///         }
///         Ok(Vec::new())
///     }
///
///     fn nearby(
///         &self,
///         _reference: &Location,
///         _category: Option<SuggestionType>,
///     ) -> Result<Vec<Suggestion>, SearchError> {
///         Ok(Vec::new())
///     }
/// }
///
/// assert_eq!(Nowhere.search("  "), Err(SearchError::EmptyQuery));
/// ```
pub trait SearchProvider {
    /// Return locations matching `query`.
    ///
    /// Implementations must return `Err(SearchError::EmptyQuery)` when
    /// `query` is blank.
    fn search(&self, query: &str) -> Result<Vec<Location>, SearchError>;

    /// Return suggestions near `reference`, optionally limited to `category`.
    ///
    /// Each suggestion's `distance_km` is measured from `reference`.
    fn nearby(
        &self,
        reference: &Location,
        category: Option<SuggestionType>,
    ) -> Result<Vec<Suggestion>, SearchError>;
}
