//! Photo gallery store.
//!
//! Image blobs live in a `photos/` subdirectory; their metadata lives in a
//! JSON sidecar index next to it. Uploads append to both, deletes remove
//! from both, keeping the pair in sync. The index file never sits inside
//! the blob directory, so it can never be served as a photo.

use std::collections::BTreeMap;
use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};
use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;

use crate::domain::{
    FileName, PhotoRecord, UNKNOWN_UPLOADER, group_by_date, is_allowed_image, stored_photo_name,
};
use crate::store::{StoreError, load_json_or_default, not_found_for, replace_json};

/// On-disk name of the metadata index inside the data directory.
const INDEX_FILE: &str = "photos.json";

/// Blob subdirectory inside the data directory.
const BLOB_DIR: &str = "photos";

/// Upper bound (exclusive) for the random component of stored names.
const NONCE_BOUND: u32 = 1_000_000_000;

/// File-backed store for shared photos and their metadata index.
#[derive(Debug)]
pub struct GalleryStore {
    data: Dir,
    blobs: Dir,
}

impl GalleryStore {
    /// Open the store inside the data directory at `path`, creating the
    /// blob subdirectory if needed.
    ///
    /// # Errors
    /// Returns the underlying I/O error when either directory cannot be
    /// created or opened.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        Dir::create_ambient_dir_all(path, ambient_authority())?;
        let data = Dir::open_ambient_dir(path, ambient_authority())?;
        data.create_dir_all(BLOB_DIR)?;
        let blobs = data.open_dir(BLOB_DIR)?;
        Ok(Self { data, blobs })
    }

    /// Store an uploaded image and append its metadata record.
    ///
    /// The blob is persisted under a generated unique name derived from the
    /// original name, `now`, and a random nonce. `uploader` falls back to
    /// the [`UNKNOWN_UPLOADER`] sentinel when absent.
    ///
    /// # Errors
    /// Returns [`StoreError::UnsupportedExtension`] before anything is
    /// persisted when the original name is not an accepted image, and
    /// [`StoreError::Io`]/[`StoreError::Encode`] on persistence failures.
    pub fn add(
        &self,
        original: &FileName,
        bytes: &[u8],
        uploader: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<PhotoRecord, StoreError> {
        if !is_allowed_image(original.as_str()) {
            return Err(StoreError::UnsupportedExtension(original.to_string()));
        }
        let nonce = rand::thread_rng().gen_range(0..NONCE_BOUND);
        let stored = stored_photo_name(original.as_str(), now.timestamp_millis(), nonce);
        self.blobs.write(&stored, bytes)?;

        let record = PhotoRecord {
            file_name: stored,
            original_name: original.to_string(),
            uploaded_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            uploader: uploader.unwrap_or(UNKNOWN_UPLOADER).to_owned(),
        };
        let mut records = self.index()?;
        records.push(record.clone());
        replace_json(&self.data, INDEX_FILE, &records)?;
        Ok(record)
    }

    /// Grouped listing: upload date to records, index order kept within
    /// each group.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] when the index cannot be read.
    pub fn grouped(&self) -> Result<BTreeMap<String, Vec<PhotoRecord>>, StoreError> {
        Ok(group_by_date(self.index()?))
    }

    /// Return the raw bytes of the blob stored under `name`.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when no such blob exists.
    pub fn open_blob(&self, name: &FileName) -> Result<Vec<u8>, StoreError> {
        self.blobs
            .read(name.as_str())
            .map_err(|error| not_found_for(name.as_str(), error))
    }

    /// Delete the blob stored under `name` and drop its index record.
    ///
    /// When the blob does not exist the index is left untouched.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when no such blob exists.
    pub fn remove(&self, name: &FileName) -> Result<(), StoreError> {
        self.blobs
            .remove_file(name.as_str())
            .map_err(|error| not_found_for(name.as_str(), error))?;
        let mut records = self.index()?;
        records.retain(|record| record.file_name != name.as_str());
        replace_json(&self.data, INDEX_FILE, &records)
    }

    fn index(&self) -> Result<Vec<PhotoRecord>, StoreError> {
        load_json_or_default(&self.data, INDEX_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use tempfile::TempDir;

    fn store() -> (TempDir, GalleryStore) {
        let tmp = TempDir::new().expect("create temp dir");
        let store = GalleryStore::open(tmp.path()).expect("open store");
        (tmp, store)
    }

    fn name(raw: &str) -> FileName {
        FileName::new(raw).expect("valid test name")
    }

    fn at(date: &str) -> DateTime<Utc> {
        format!("{date}T12:00:00Z")
            .parse()
            .expect("valid timestamp")
    }

    #[test]
    fn add_persists_blob_and_index_entry() {
        let (tmp, store) = store();
        let record = store
            .add(&name("praia.jpg"), b"jpeg-bytes", Some("dona Maria"), at("2026-08-25"))
            .expect("add photo");
        assert!(record.file_name.starts_with("praia-"));
        assert!(record.file_name.ends_with(".jpg"));
        assert_eq!(record.original_name, "praia.jpg");
        assert_eq!(record.uploader, "dona Maria");
        assert_eq!(record.upload_date(), "2026-08-25");

        let blob = std::fs::read(tmp.path().join(BLOB_DIR).join(&record.file_name))
            .expect("blob written");
        assert_eq!(blob, b"jpeg-bytes");
        let served = store
            .open_blob(&name(&record.file_name))
            .expect("serve blob");
        assert_eq!(served, b"jpeg-bytes");
    }

    #[test]
    fn missing_uploader_falls_back_to_sentinel() {
        let (_tmp, store) = store();
        let record = store
            .add(&name("mapa.png"), b"png", None, at("2026-08-25"))
            .expect("add photo");
        assert_eq!(record.uploader, UNKNOWN_UPLOADER);
    }

    #[rstest]
    #[case("notes.txt")]
    #[case("relatorio.pdf")]
    #[case("semextensao")]
    fn disallowed_extension_persists_nothing(#[case] raw: &str) {
        let (tmp, store) = store();
        let result = store.add(&name(raw), b"data", None, at("2026-08-25"));
        assert!(matches!(result, Err(StoreError::UnsupportedExtension(_))));
        let blobs = std::fs::read_dir(tmp.path().join(BLOB_DIR))
            .expect("read blob dir")
            .count();
        assert_eq!(blobs, 0);
        assert!(!tmp.path().join(INDEX_FILE).exists());
    }

    #[test]
    fn grouped_partitions_by_upload_date() {
        let (_tmp, store) = store();
        store
            .add(&name("a.jpg"), b"a", None, at("2026-08-24"))
            .expect("add");
        store
            .add(&name("b.jpg"), b"b", None, at("2026-08-25"))
            .expect("add");
        store
            .add(&name("c.jpg"), b"c", None, at("2026-08-24"))
            .expect("add");
        let groups = store.grouped().expect("grouped listing");
        assert_eq!(groups.len(), 2);
        let day_one: Vec<_> = groups["2026-08-24"]
            .iter()
            .map(|r| r.original_name.as_str())
            .collect();
        assert_eq!(day_one, vec!["a.jpg", "c.jpg"]);
    }

    #[test]
    fn remove_deletes_blob_and_index_entry() {
        let (_tmp, store) = store();
        let kept = store
            .add(&name("keep.jpg"), b"k", None, at("2026-08-25"))
            .expect("add");
        let dropped = store
            .add(&name("drop.jpg"), b"d", None, at("2026-08-25"))
            .expect("add");

        store.remove(&name(&dropped.file_name)).expect("remove");
        assert!(matches!(
            store.open_blob(&name(&dropped.file_name)),
            Err(StoreError::NotFound(_))
        ));
        let groups = store.grouped().expect("grouped listing");
        let remaining: Vec<_> = groups["2026-08-25"]
            .iter()
            .map(|r| r.file_name.as_str())
            .collect();
        assert_eq!(remaining, vec![kept.file_name.as_str()]);
    }

    #[test]
    fn remove_of_absent_blob_leaves_index_bytes_untouched() {
        let (tmp, store) = store();
        store
            .add(&name("a.jpg"), b"a", None, at("2026-08-25"))
            .expect("add");
        let before = std::fs::read(tmp.path().join(INDEX_FILE)).expect("read index");
        assert!(matches!(
            store.remove(&name("ghost.jpg")),
            Err(StoreError::NotFound(_))
        ));
        let after = std::fs::read(tmp.path().join(INDEX_FILE)).expect("read index");
        assert_eq!(before, after);
    }

    #[test]
    fn corrupt_index_is_served_as_empty() {
        let (tmp, store) = store();
        std::fs::write(tmp.path().join(INDEX_FILE), b"[ not json").expect("write corrupt index");
        assert!(store.grouped().expect("grouped listing").is_empty());
    }

    #[test]
    fn timestamps_are_rfc3339_utc() {
        let (_tmp, store) = store();
        let now = Utc.with_ymd_and_hms(2026, 8, 25, 14, 3, 7).single().expect("valid time");
        let record = store
            .add(&name("a.jpg"), b"a", None, now)
            .expect("add");
        assert_eq!(record.uploaded_at, "2026-08-25T14:03:07.000Z");
    }
}
