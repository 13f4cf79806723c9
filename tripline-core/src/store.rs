//! Snapshot persistence seam.
//!
//! Persistence is a key-value store holding at most one serialised
//! [`Itinerary`] per key. Saves replace the stored value wholesale; there is
//! no partial update.

use crate::Itinerary;

/// Key under which the current itinerary is stored.
pub const CURRENT_ITINERARY_KEY: &str = "current-itinerary";

/// Load and save itinerary snapshots.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::convert::Infallible;
/// use tripline_core::{Itinerary, SnapshotStore};
///
/// #[derive(Default)]
/// struct Slot(RefCell<Option<Itinerary>>);
///
/// impl SnapshotStore for Slot {
///     type Error = Infallible;
///
///     fn load(&self) -> Result<Option<Itinerary>, Self::Error> {
///         Ok(self.0.borrow().clone())
///     }
///
///     fn save(&self, itinerary: &Itinerary) -> Result<(), Self::Error> {
///         *self.0.borrow_mut() = Some(itinerary.clone());
///         Ok(())
///     }
/// }
///
/// assert!(Slot::default().load().unwrap().is_none());
/// ```
pub trait SnapshotStore {
    /// Failure raised by the backing store.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return the stored snapshot, or `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<Itinerary>, Self::Error>;

    /// Replace the stored snapshot with `itinerary`.
    fn save(&self, itinerary: &Itinerary) -> Result<(), Self::Error>;
}
