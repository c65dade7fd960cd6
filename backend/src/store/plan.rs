//! Action plan document store.
//!
//! Persists the singleton [`ActionPlan`] as one JSON file. Reads fall back
//! to the empty document when the file is missing or corrupt; writes replace
//! the whole document through a staged rename.

use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};

use crate::domain::ActionPlan;
use crate::store::{StoreError, load_json_or_default, replace_json};

/// On-disk name of the plan document inside the data directory.
const PLAN_FILE: &str = "action-plan.json";

/// File-backed store for the singleton action plan document.
#[derive(Debug)]
pub struct PlanStore {
    dir: Dir,
}

impl PlanStore {
    /// Open the store inside the data directory at `path`, creating it if
    /// needed.
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

    /// Load the current document, or the empty default when nothing has
    /// been written yet or the persisted file is unparsable.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] for read failures other than a missing
    /// file.
    pub fn load(&self) -> Result<ActionPlan, StoreError> {
        load_json_or_default(&self.dir, PLAN_FILE)
    }

    /// Replace the persisted document in full.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] or [`StoreError::Encode`] when the
    /// replacement fails; the previous document is left in place.
    pub fn save(&self, plan: &ActionPlan) -> Result<(), StoreError> {
        replace_json(&self.dir, PLAN_FILE, plan)
    }
}
