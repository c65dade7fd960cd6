//! Shared helpers for HTTP handler tests.

use actix_web::web;
use tempfile::TempDir;

use crate::inbound::http::state::HttpState;
use crate::store::{DocumentStore, GalleryStore, PlanStore};

/// Boundary used by [`multipart_body`].
pub const TEST_BOUNDARY: &str = "------------------------mural-test";

/// Fresh store state rooted in a temporary directory.
///
/// The [`TempDir`] guard must outlive the returned state.
pub fn temp_state() -> (TempDir, web::Data<HttpState>) {
    let tmp = TempDir::new().expect("create temp dir");
    let documents = DocumentStore::open(tmp.path().join("downloads")).expect("open document store");
    let plan = PlanStore::open(tmp.path()).expect("open plan store");
    let gallery = GalleryStore::open(tmp.path()).expect("open gallery store");
    (tmp, web::Data::new(HttpState::new(documents, plan, gallery)))
}

/// Build a `multipart/form-data` payload with one optional file part and any
/// number of plain text parts. Returns the content-type header value and the
/// encoded body.
pub fn multipart_body(
    file: Option<(&str, &str, &[u8])>,
    text_parts: &[(&str, &str)],
) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    if let Some((field, file_name, data)) = file {
        body.extend_from_slice(
            format!(
                "--{TEST_BOUNDARY}\r\nContent-Disposition: form-data; \
                 name=\"{field}\"; filename=\"{file_name}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    for (name, value) in text_parts {
        body.extend_from_slice(
            format!(
                "--{TEST_BOUNDARY}\r\nContent-Disposition: form-data; \
                 name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(format!("--{TEST_BOUNDARY}--\r\n").as_bytes());
    (
        format!("multipart/form-data; boundary={TEST_BOUNDARY}"),
        body,
    )
}
