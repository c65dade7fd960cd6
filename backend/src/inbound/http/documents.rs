//! PDF document endpoints.
//!
//! ```text
//! GET    /api/files
//! POST   /api/upload           multipart field `file`
//! DELETE /api/delete/{fileName}
//! GET    /downloads/{fileName}
//! ```

use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use actix_web::{HttpResponse, delete, get, post, web};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, FileName};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, blob_content_type, run_blocking};

/// Response body for `POST /api/upload`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Name the document was stored under.
    #[schema(example = "report.pdf")]
    pub file_name: String,
}

/// Multipart payload for `POST /api/upload`.
#[derive(Debug, MultipartForm)]
pub struct DocumentUploadForm {
    /// The uploaded document, buffered to a temp file.
    #[multipart(limit = "25MB")]
    pub file: Option<TempFile>,
}

/// List stored PDF names.
#[utoipa::path(
    get,
    path = "/api/files",
    tags = ["documents"],
    operation_id = "listFiles",
    responses(
        (status = 200, description = "Stored PDF names", body = [String]),
        (status = 500, description = "Directory could not be read", body = Error)
    )
)]
#[get("/files")]
pub async fn list_documents(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<String>>> {
    let store = state.documents();
    let names = run_blocking(move || store.list()).await?;
    Ok(web::Json(names))
}

/// Store an uploaded PDF under its original name, overwriting any existing
/// document of the same name.
#[utoipa::path(
    post,
    path = "/api/upload",
    tags = ["documents"],
    operation_id = "uploadFile",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Stored name", body = UploadResponse),
        (status = 400, description = "No file attached or unsafe name", body = Error)
    )
)]
#[post("/upload")]
pub async fn upload_document(
    state: web::Data<HttpState>,
    form: MultipartForm<DocumentUploadForm>,
) -> ApiResult<web::Json<UploadResponse>> {
    let DocumentUploadForm { file } = form.into_inner();
    let Some(file) = file else {
        return Err(Error::invalid_request("no file attached")
            .with_details(json!({ "field": "file" })));
    };
    let name = FileName::new(file.file_name.clone().unwrap_or_default())?;
    let store = state.documents();
    let stored = run_blocking(move || {
        let bytes = std::fs::read(file.file.path())?;
        store.store(&name, &bytes)?;
        Ok(name.into_inner())
    })
    .await?;
    Ok(web::Json(UploadResponse { file_name: stored }))
}

/// Remove a stored PDF by name.
#[utoipa::path(
    delete,
    path = "/api/delete/{file_name}",
    tags = ["documents"],
    operation_id = "deleteFile",
    params(("file_name" = String, Path, description = "Stored document name")),
    responses(
        (status = 200, description = "Document removed"),
        (status = 400, description = "Unsafe name", body = Error),
        (status = 404, description = "No such document", body = Error)
    )
)]
#[delete("/delete/{file_name}")]
pub async fn delete_document(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let name = FileName::new(path.into_inner())?;
    let store = state.documents();
    run_blocking(move || store.remove(&name)).await?;
    Ok(HttpResponse::Ok().finish())
}

/// Serve a stored PDF's raw bytes. Registered at the root, not under
/// `/api`, to match the download links the frontend renders.
#[utoipa::path(
    get,
    path = "/downloads/{file_name}",
    tags = ["documents"],
    operation_id = "downloadFile",
    params(("file_name" = String, Path, description = "Stored document name")),
    responses(
        (status = 200, description = "Raw document bytes"),
        (status = 404, description = "No such document", body = Error)
    )
)]
#[get("/downloads/{file_name}")]
pub async fn download_document(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let name = FileName::new(path.into_inner())?;
    let content_type = blob_content_type(name.as_str());
    let store = state.documents();
    let bytes = run_blocking(move || store.open_blob(&name)).await?;
    Ok(HttpResponse::Ok().content_type(content_type).body(bytes))
}

#[cfg(test)]
#[path = "documents_tests.rs"]
mod tests;
