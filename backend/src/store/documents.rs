//! PDF document store.
//!
//! A directory of uploaded PDF blobs keyed by their original file name. The
//! name is both the storage key and the public identifier; uploading under
//! an existing name overwrites the previous blob.

use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};

use crate::domain::FileName;
use crate::store::{StoreError, not_found_for};

/// Listing filter: only names with this suffix are reported.
const LISTED_SUFFIX: &str = ".pdf";

/// File-backed store for uploaded PDF documents.
#[derive(Debug)]
pub struct DocumentStore {
    dir: Dir,
}

impl DocumentStore {
    /// Open the store rooted at `path`, creating the directory if needed.
    ///
    /// # Errors
    /// Returns the underlying I/O error when the directory cannot be
    /// created or opened.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        Dir::create_ambient_dir_all(path, ambient_authority())?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self { dir })
    }

    /// List stored PDF names, sorted for a stable response.
    ///
    /// Non-PDF entries and subdirectories are skipped. A directory read
    /// failure is surfaced as-is; callers report it as a server error.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] when the directory cannot be enumerated.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for entry in self.dir.entries()? {
            let entry = entry?;
            if !entry.metadata()?.is_file() {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if name.ends_with(LISTED_SUFFIX) {
                names.push(name);
            }
        }
        names.sort_unstable();
        Ok(names)
    }

    /// Write `bytes` under exactly `name`, overwriting any existing blob.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] when the write fails.
    pub fn store(&self, name: &FileName, bytes: &[u8]) -> Result<(), StoreError> {
        self.dir.write(name.as_str(), bytes)?;
        Ok(())
    }

    /// Return the raw bytes of the blob stored under `name`.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when no such blob exists.
    pub fn open_blob(&self, name: &FileName) -> Result<Vec<u8>, StoreError> {
        self.dir
            .read(name.as_str())
            .map_err(|error| not_found_for(name.as_str(), error))
    }

    /// Delete the blob stored under `name`.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when no such blob exists.
    pub fn remove(&self, name: &FileName) -> Result<(), StoreError> {
        self.dir
            .remove_file(name.as_str())
            .map_err(|error| not_found_for(name.as_str(), error))
    }
}
