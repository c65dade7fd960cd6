//! Tests for HTTP error mapping.

use super::*;
use crate::domain::FileName;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::Value;

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn maps_codes_to_statuses(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(error.status_code(), expected);
}

#[actix_web::test]
async fn internal_messages_are_redacted() {
    let response = Error::internal("disk exploded at /srv/data").error_response();
    let body = to_bytes(response.into_body()).await.expect("read body");
    let payload: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(payload["message"], "Internal server error");
    assert_eq!(payload["code"], "internal_error");
}

#[actix_web::test]
async fn client_errors_keep_their_message_and_details() {
    let response = Error::invalid_request("no file attached")
        .with_details(serde_json::json!({ "field": "file" }))
        .error_response();
    let body = to_bytes(response.into_body()).await.expect("read body");
    let payload: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(payload["message"], "no file attached");
    assert_eq!(payload["details"]["field"], "file");
}

#[test]
fn store_not_found_becomes_404_with_name() {
    let error = Error::from(StoreError::NotFound("ghost.pdf".to_owned()));
    assert_eq!(error.code, ErrorCode::NotFound);
    assert_eq!(
        error.details.as_ref().and_then(|d| d["name"].as_str()),
        Some("ghost.pdf")
    );
}

#[test]
fn store_io_failure_becomes_internal() {
    let error = Error::from(StoreError::Io(std::io::Error::other("disk failure")));
    assert_eq!(error.code, ErrorCode::InternalError);
}

#[test]
fn unsupported_extension_becomes_invalid_request() {
    let error = Error::from(StoreError::UnsupportedExtension("notes.txt".to_owned()));
    assert_eq!(error.code, ErrorCode::InvalidRequest);
}

#[test]
fn file_name_validation_becomes_invalid_request() {
    let error = Error::from(FileName::new("../x.pdf").expect_err("traversal must fail"));
    assert_eq!(error.code, ErrorCode::InvalidRequest);
}
