//! Photo gallery metadata.
//!
//! One [`PhotoRecord`] exists per stored image blob, linked by the generated
//! file name. The grouped listing partitions records by upload date while
//! preserving the order in which they were appended to the index.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uploader sentinel used when the form omits the field.
pub const UNKNOWN_UPLOADER: &str = "unknown";

/// Image extensions accepted by the gallery, compared case-insensitively.
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// Metadata describing one stored image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    /// Generated unique storage name, e.g. `praia-1700000000000-42.jpg`.
    #[schema(example = "praia-1700000000000-42.jpg")]
    pub file_name: String,
    /// Name the file was uploaded under.
    #[schema(example = "praia.jpg")]
    pub original_name: String,
    /// Upload timestamp, ISO-8601 UTC.
    #[schema(example = "2026-08-25T14:03:07.512Z")]
    pub uploaded_at: String,
    /// Free-text uploader identifier; [`UNKNOWN_UPLOADER`] when absent.
    #[schema(example = "dona Maria")]
    pub uploader: String,
}

impl PhotoRecord {
    /// Calendar date portion (`YYYY-MM-DD`) of the upload timestamp.
    #[must_use]
    pub fn upload_date(&self) -> String {
        self.uploaded_at.chars().take(10).collect()
    }
}

/// Whether `name` carries one of the [`ALLOWED_IMAGE_EXTENSIONS`].
///
/// # Examples
/// ```
/// use backend::domain::is_allowed_image;
///
/// assert!(is_allowed_image("praia.JPG"));
/// assert!(!is_allowed_image("notes.txt"));
/// assert!(!is_allowed_image("no-extension"));
/// ```
#[must_use]
pub fn is_allowed_image(name: &str) -> bool {
    extension(name).is_some_and(|ext| {
        let ext = ext.to_ascii_lowercase();
        ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str())
    })
}

/// Derive the unique storage name for an uploaded image.
///
/// Layout: `<stem>-<millisecond timestamp>-<nonce>.<original extension>`.
/// The extension keeps its original case; uniqueness comes from the
/// timestamp plus the random nonce.
///
/// # Examples
/// ```
/// use backend::domain::stored_photo_name;
///
/// let name = stored_photo_name("praia.jpg", 1_700_000_000_000, 42);
/// assert_eq!(name, "praia-1700000000000-42.jpg");
/// ```
#[must_use]
pub fn stored_photo_name(original: &str, millis: i64, nonce: u32) -> String {
    match split_extension(original) {
        Some((stem, ext)) => format!("{stem}-{millis}-{nonce}.{ext}"),
        None => format!("{original}-{millis}-{nonce}"),
    }
}

/// Partition records by upload date, preserving index order within groups.
///
/// Dates with no records are simply absent from the map.
#[must_use]
pub fn group_by_date(records: Vec<PhotoRecord>) -> BTreeMap<String, Vec<PhotoRecord>> {
    let mut groups: BTreeMap<String, Vec<PhotoRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.upload_date()).or_default().push(record);
    }
    groups
}

fn extension(name: &str) -> Option<&str> {
    let (_, ext) = split_extension(name)?;
    Some(ext)
}

fn split_extension(name: &str) -> Option<(&str, &str)> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some((stem, ext))
}
