//! Validated blob storage key.
//!
//! Every name that reaches a store passes through [`FileName`], so a path
//! traversal attempt is rejected before any filesystem call. The stores
//! additionally open their roots as capability-scoped directories, making
//! the check defence in depth rather than the only barrier.

use std::fmt;

use thiserror::Error;

/// Rejections produced by [`FileName::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FileNameError {
    /// The name is empty.
    #[error("file name must not be empty")]
    Empty,
    /// The name contains a path separator.
    #[error("file name must not contain path separators")]
    PathSeparator,
    /// The name is `.` or `..`.
    #[error("file name must not be a directory reference")]
    DirectoryReference,
    /// The name contains a NUL byte.
    #[error("file name must not contain NUL bytes")]
    Nul,
}

/// A file name safe to use as a storage key inside a store directory.
///
/// Invariant: non-empty, free of `/`, `\` and NUL, and not `.` or `..`.
///
/// # Examples
/// ```
/// use backend::domain::FileName;
///
/// let name = FileName::new("report.pdf").expect("plain name");
/// assert_eq!(name.as_str(), "report.pdf");
/// assert!(FileName::new("../secrets").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileName(String);

impl FileName {
    /// Validate `raw` and wrap it as a storage key.
    ///
    /// # Errors
    /// Returns a [`FileNameError`] naming the first violated rule.
    pub fn new(raw: impl Into<String>) -> Result<Self, FileNameError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(FileNameError::Empty);
        }
        if raw == "." || raw == ".." {
            return Err(FileNameError::DirectoryReference);
        }
        if raw.contains(['/', '\\']) {
            return Err(FileNameError::PathSeparator);
        }
        if raw.contains('\0') {
            return Err(FileNameError::Nul);
        }
        Ok(Self(raw))
    }

    /// View the validated name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap the validated name.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
