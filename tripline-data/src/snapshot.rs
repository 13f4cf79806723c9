//! JSON document store for itinerary snapshots.
//!
//! Each key maps to `<dir>/<key>.json`. Saves are written to a temporary file
//! in the same directory and renamed over the target, so readers observe
//! either the previous snapshot or the new one and never a partial write.

use std::io::{self, Write};

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use tempfile::NamedTempFile;
use thiserror::Error;
use tripline_core::{CURRENT_ITINERARY_KEY, Itinerary, SnapshotStore};
use tripline_fs::{ensure_dir, read_utf8_to_string};

/// Errors raised by [`JsonSnapshotStore`].
#[derive(Debug, Error)]
pub enum JsonSnapshotStoreError {
    /// The key cannot be used as a file name.
    #[error("snapshot key {key:?} must be a non-empty file name")]
    InvalidKey {
        /// Offending key.
        key: String,
    },
    /// Reading the snapshot document failed.
    #[error("failed to read snapshot at {path:?}")]
    Read {
        /// Document path.
        path: Utf8PathBuf,
        /// Source error from the filesystem.
        #[source]
        source: io::Error,
    },
    /// The stored document is not a valid itinerary.
    #[error("failed to parse snapshot at {path:?}")]
    Parse {
        /// Document path.
        path: Utf8PathBuf,
        /// Source error produced by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Serialising the itinerary failed.
    #[error("failed to serialise snapshot for {path:?}")]
    Serialise {
        /// Intended document path.
        path: Utf8PathBuf,
        /// Source error produced by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Creating the store directory failed.
    #[error("failed to create snapshot directory {path:?}")]
    CreateDir {
        /// Directory path.
        path: Utf8PathBuf,
        /// Source error from the filesystem.
        #[source]
        source: io::Error,
    },
    /// Writing or renaming the snapshot document failed.
    #[error("failed to write snapshot to {path:?}")]
    Write {
        /// Document path.
        path: Utf8PathBuf,
        /// Source error from the filesystem.
        #[source]
        source: io::Error,
    },
}

/// [`SnapshotStore`] keeping one JSON document per key under a directory.
///
/// # Examples
/// ```
/// use camino::Utf8PathBuf;
/// use tripline_core::SnapshotStore;
/// use tripline_data::JsonSnapshotStore;
///
/// let dir = tempfile::tempdir().expect("tempdir");
/// let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8");
/// let store = JsonSnapshotStore::new(&root);
/// assert_eq!(store.path(), root.join("current-itinerary.json"));
/// assert!(store.load().expect("load").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonSnapshotStore {
    dir: Utf8PathBuf,
    key: String,
}

impl JsonSnapshotStore {
    /// Store the current itinerary under `dir`.
    pub fn new(dir: impl AsRef<Utf8Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            key: CURRENT_ITINERARY_KEY.to_owned(),
        }
    }

    /// Store snapshots under `dir` using `key` as the document name.
    ///
    /// # Errors
    /// Returns [`JsonSnapshotStoreError::InvalidKey`] when `key` is empty,
    /// contains a path separator, or is a relative path component.
    pub fn with_key(
        dir: impl AsRef<Utf8Path>,
        key: impl Into<String>,
    ) -> Result<Self, JsonSnapshotStoreError> {
        let key = key.into();
        if key.is_empty() || key == "." || key == ".." || key.contains(['/', '\\']) {
            return Err(JsonSnapshotStoreError::InvalidKey { key });
        }
        Ok(Self {
            dir: dir.as_ref().to_path_buf(),
            key,
        })
    }

    /// Directory holding the documents.
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    /// Document key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Path of the snapshot document.
    pub fn path(&self) -> Utf8PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }

    fn write_atomically(&self, path: &Utf8Path, payload: &[u8]) -> io::Result<()> {
        let mut staged = NamedTempFile::new_in(&self.dir)?;
        staged.write_all(payload)?;
        staged.as_file().sync_all()?;
        staged.persist(path).map_err(|err| err.error)?;
        Ok(())
    }
}

impl SnapshotStore for JsonSnapshotStore {
    type Error = JsonSnapshotStoreError;

    fn load(&self) -> Result<Option<Itinerary>, Self::Error> {
        let path = self.path();
        let contents = match read_utf8_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no snapshot stored at {path}");
                return Ok(None);
            }
            Err(source) => return Err(JsonSnapshotStoreError::Read { path, source }),
        };
        let itinerary = serde_json::from_str(&contents)
            .map_err(|source| JsonSnapshotStoreError::Parse { path, source })?;
        Ok(Some(itinerary))
    }

    fn save(&self, itinerary: &Itinerary) -> Result<(), Self::Error> {
        let path = self.path();
        let payload = serde_json::to_vec_pretty(itinerary).map_err(|source| {
            JsonSnapshotStoreError::Serialise {
                path: path.clone(),
                source,
            }
        })?;
        ensure_dir(&self.dir).map_err(|source| JsonSnapshotStoreError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;
        self.write_atomically(&path, &payload)
            .map_err(|source| JsonSnapshotStoreError::Write {
                path: path.clone(),
                source,
            })?;
        debug!(
            "saved itinerary '{}' with {} stops to {path}",
            itinerary.id,
            itinerary.locations.len()
        );
        Ok(())
    }
}
