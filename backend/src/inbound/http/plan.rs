//! Action plan endpoints.
//!
//! ```text
//! GET  /api/action-plan
//! POST /api/action-plan  {"items": [...], "categorias": [...]}
//! ```

use actix_web::{get, post, web};
use serde::Serialize;
use serde_json::{Value, json};
use utoipa::ToSchema;

use crate::domain::{ActionPlan, Error, PlanValidationError};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, run_blocking};

/// Acknowledgement body for `POST /api/action-plan`.
#[derive(Debug, Serialize, ToSchema)]
pub struct AckResponse {
    /// Always `true` on success.
    pub ok: bool,
}

/// Fetch the current action plan document.
///
/// A missing or unparsable persisted document yields the empty default
/// rather than an error.
#[utoipa::path(
    get,
    path = "/api/action-plan",
    tags = ["action-plan"],
    operation_id = "getActionPlan",
    responses((status = 200, description = "Current document", body = ActionPlan))
)]
#[get("/action-plan")]
pub async fn get_action_plan(state: web::Data<HttpState>) -> ApiResult<web::Json<ActionPlan>> {
    let store = state.plan();
    let plan = run_blocking(move || store.load()).await?;
    Ok(web::Json(plan))
}

/// Replace the action plan document in full.
///
/// Both `items` and `categorias` must be sequences; a malformed submission
/// is rejected wholesale and the persisted document is left untouched.
#[utoipa::path(
    post,
    path = "/api/action-plan",
    tags = ["action-plan"],
    operation_id = "saveActionPlan",
    request_body = ActionPlan,
    responses(
        (status = 200, description = "Document replaced", body = AckResponse),
        (status = 400, description = "A field is not a sequence", body = Error)
    )
)]
#[post("/action-plan")]
pub async fn save_action_plan(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<AckResponse>> {
    let plan = ActionPlan::from_value(&payload).map_err(map_plan_validation_error)?;
    let store = state.plan();
    run_blocking(move || store.save(&plan)).await?;
    Ok(web::Json(AckResponse { ok: true }))
}

fn map_plan_validation_error(err: PlanValidationError) -> Error {
    let error = Error::invalid_request(err.to_string());
    match err.field() {
        Some(field) => error.with_details(json!({ "field": field })),
        None => error,
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
