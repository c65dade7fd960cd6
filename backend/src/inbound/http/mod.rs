//! HTTP inbound adapter exposing the REST endpoints.

pub mod documents;
pub mod error;
pub mod gallery;
pub mod health;
pub mod plan;
pub mod spa;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use crate::domain::ApiResult;

use actix_multipart::form::MultipartFormConfig;
use actix_web::web;

use crate::domain::Error;
use crate::store::StoreError;

/// Multipart extractor configuration keeping extractor rejections inside
/// the API error envelope. Must be registered as app data wherever the
/// upload handlers are mounted.
#[must_use]
pub fn multipart_form_config() -> MultipartFormConfig {
    MultipartFormConfig::default()
        .error_handler(|err, _req| Error::invalid_request(err.to_string()).into())
}

/// Run a synchronous store operation on the blocking pool and map both the
/// pool failure and the store outcome into the API error envelope.
pub(crate) async fn run_blocking<T, F>(operation: F) -> ApiResult<T>
where
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    web::block(operation).await?.map_err(Error::from)
}

/// Content type reported when serving a stored blob by name.
pub(crate) fn blob_content_type(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => "application/pdf",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}
