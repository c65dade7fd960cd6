//! Photo gallery endpoints.
//!
//! ```text
//! POST   /api/photos/upload   multipart fields `photo`, `uploader`
//! GET    /api/photos
//! DELETE /api/photos/{fileName}
//! GET    /photos/{fileName}
//! ```

use std::collections::BTreeMap;

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use actix_web::{HttpResponse, delete, get, post, web};
use chrono::Utc;
use serde_json::json;

use crate::domain::{Error, FileName, PhotoRecord};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, blob_content_type, run_blocking};

/// Multipart payload for `POST /api/photos/upload`.
#[derive(Debug, MultipartForm)]
pub struct PhotoUploadForm {
    /// The uploaded image, buffered to a temp file.
    #[multipart(limit = "25MB")]
    pub photo: Option<TempFile>,
    /// Optional free-text uploader identifier.
    pub uploader: Option<Text<String>>,
}

/// Store an uploaded image and its metadata record.
///
/// Non-image extensions are rejected before anything is persisted; the
/// stored name is generated from the original name, the upload time, and a
/// random nonce.
#[utoipa::path(
    post,
    path = "/api/photos/upload",
    tags = ["gallery"],
    operation_id = "uploadPhoto",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Metadata of the stored photo", body = PhotoRecord),
        (status = 400, description = "No image attached or disallowed extension", body = Error)
    )
)]
#[post("/photos/upload")]
pub async fn upload_photo(
    state: web::Data<HttpState>,
    form: MultipartForm<PhotoUploadForm>,
) -> ApiResult<web::Json<PhotoRecord>> {
    let PhotoUploadForm { photo, uploader } = form.into_inner();
    let Some(photo) = photo else {
        return Err(Error::invalid_request("no image attached")
            .with_details(json!({ "field": "photo" })));
    };
    let name = FileName::new(photo.file_name.clone().unwrap_or_default())?;
    let uploader = uploader.map(Text::into_inner);
    let store = state.gallery();
    let record = run_blocking(move || {
        let bytes = std::fs::read(photo.file.path())?;
        store.add(&name, &bytes, uploader.as_deref(), Utc::now())
    })
    .await?;
    Ok(web::Json(record))
}

/// Grouped listing: upload date mapped to that day's records, in upload
/// order.
#[utoipa::path(
    get,
    path = "/api/photos",
    tags = ["gallery"],
    operation_id = "listPhotos",
    responses(
        (status = 200, description = "Records grouped by calendar date",
         body = BTreeMap<String, Vec<PhotoRecord>>)
    )
)]
#[get("/photos")]
pub async fn list_photos(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<BTreeMap<String, Vec<PhotoRecord>>>> {
    let store = state.gallery();
    let groups = run_blocking(move || store.grouped()).await?;
    Ok(web::Json(groups))
}

/// Serve a stored image's raw bytes. Registered at the root, not under
/// `/api`, to match the `src` attributes the frontend renders.
#[utoipa::path(
    get,
    path = "/photos/{file_name}",
    tags = ["gallery"],
    operation_id = "servePhoto",
    params(("file_name" = String, Path, description = "Generated photo name")),
    responses(
        (status = 200, description = "Raw image bytes"),
        (status = 404, description = "No such photo", body = Error)
    )
)]
#[get("/photos/{file_name}")]
pub async fn serve_photo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let name = FileName::new(path.into_inner())?;
    let content_type = blob_content_type(name.as_str());
    let store = state.gallery();
    let bytes = run_blocking(move || store.open_blob(&name)).await?;
    Ok(HttpResponse::Ok().content_type(content_type).body(bytes))
}

/// Remove a stored image and its metadata record together.
#[utoipa::path(
    delete,
    path = "/api/photos/{file_name}",
    tags = ["gallery"],
    operation_id = "deletePhoto",
    params(("file_name" = String, Path, description = "Generated photo name")),
    responses(
        (status = 200, description = "Photo removed"),
        (status = 404, description = "No such photo", body = Error)
    )
)]
#[delete("/photos/{file_name}")]
pub async fn delete_photo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let name = FileName::new(path.into_inner())?;
    let store = state.gallery();
    run_blocking(move || store.remove(&name)).await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
#[path = "gallery_tests.rs"]
mod tests;
