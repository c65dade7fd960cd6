//! File-backed resource stores.
//!
//! Each store owns one directory (and at most one JSON sidecar file) through
//! a capability-scoped [`cap_std::fs::Dir`] handle, so no operation can
//! reach outside its root. Operations are single-attempt synchronous
//! filesystem calls; handlers run them on the blocking pool. Whole-document
//! JSON replacement is last-write-wins by design.

pub mod documents;
pub mod gallery;
pub mod plan;

pub use self::documents::DocumentStore;
pub use self::gallery::GalleryStore;
pub use self::plan::PlanStore;

use std::io;

use cap_std::fs::Dir;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

/// Failures surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The named blob does not exist.
    #[error("no stored file named `{0}`")]
    NotFound(String),
    /// The uploaded name does not carry an accepted image extension.
    #[error("unsupported image extension on `{0}`")]
    UnsupportedExtension(String),
    /// Underlying filesystem failure.
    #[error("storage I/O failure: {0}")]
    Io(#[from] io::Error),
    /// A persisted JSON document could not be encoded.
    #[error("failed to encode JSON document: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Map a missing-file I/O error to [`StoreError::NotFound`] for `name`.
pub(crate) fn not_found_for(name: &str, error: io::Error) -> StoreError {
    if error.kind() == io::ErrorKind::NotFound {
        StoreError::NotFound(name.to_owned())
    } else {
        StoreError::Io(error)
    }
}

/// Read a JSON document from `dir`, falling back to `T::default()` when the
/// file is absent or unparsable. The corrupt-file fallback is logged so the
/// recovery stays observable.
pub(crate) fn load_json_or_default<T>(dir: &Dir, file_name: &str) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
{
    let bytes = match dir.read(file_name) {
        Ok(bytes) => bytes,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(error) => return Err(StoreError::Io(error)),
    };
    match serde_json::from_slice(&bytes) {
        Ok(value) => Ok(value),
        Err(error) => {
            warn!(file = file_name, %error, "corrupt JSON document, serving defaults");
            Ok(T::default())
        }
    }
}

/// Replace a JSON document in `dir` via a staged temp file and rename, so a
/// reader never observes a half-written document.
pub(crate) fn replace_json<T: Serialize>(
    dir: &Dir,
    file_name: &str,
    value: &T,
) -> Result<(), StoreError> {
    let staged = format!(".{file_name}.{}", Uuid::new_v4().simple());
    dir.write(&staged, serde_json::to_vec_pretty(value)?)?;
    if let Err(error) = dir.rename(&staged, dir, file_name) {
        let _removed = dir.remove_file(&staged);
        return Err(StoreError::Io(error));
    }
    Ok(())
}
