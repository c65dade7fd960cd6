//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates every HTTP endpoint and the schemas they exchange.
//! The generated specification feeds Swagger UI, which is mounted at
//! `/docs` in debug builds.

use utoipa::OpenApi;

use crate::domain::{ActionPlan, Error, ErrorCode, PhotoRecord};
use crate::inbound::http::documents::UploadResponse;
use crate::inbound::http::plan::AckResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mural backend API",
        description = "File-backed storage for shared PDFs, the action plan document, and the photo gallery."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::ping,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::documents::list_documents,
        crate::inbound::http::documents::upload_document,
        crate::inbound::http::documents::delete_document,
        crate::inbound::http::documents::download_document,
        crate::inbound::http::plan::get_action_plan,
        crate::inbound::http::plan::save_action_plan,
        crate::inbound::http::gallery::upload_photo,
        crate::inbound::http::gallery::list_photos,
        crate::inbound::http::gallery::serve_photo,
        crate::inbound::http::gallery::delete_photo,
    ),
    components(schemas(
        Error,
        ErrorCode,
        ActionPlan,
        PhotoRecord,
        UploadResponse,
        AckResponse,
    )),
    tags(
        (name = "documents", description = "Uploaded PDF documents"),
        (name = "action-plan", description = "Singleton action plan document"),
        (name = "gallery", description = "Shared photo gallery"),
        (name = "health", description = "Liveness and readiness checks"),
    )
)]
pub struct ApiDoc;
