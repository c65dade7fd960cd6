//! Domain primitives shared by the HTTP adapter and the stores.
//!
//! Purpose: define the strongly typed values the file-backed stores persist
//! and the API serialises. Keep types immutable and document invariants and
//! serde contracts in each type's Rustdoc.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`] — API error response payload.
//! - [`FileName`] — validated blob storage key.
//! - [`ActionPlan`] — singleton items/categories document.
//! - [`PhotoRecord`] and the gallery naming/grouping helpers.

pub mod error;
pub mod filename;
pub mod photo;
pub mod plan;

pub use self::error::{Error, ErrorCode};
pub use self::filename::{FileName, FileNameError};
pub use self::photo::{
    ALLOWED_IMAGE_EXTENSIONS, PhotoRecord, UNKNOWN_UPLOADER, group_by_date, is_allowed_image,
    stored_photo_name,
};
pub use self::plan::{ActionPlan, PlanValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("missing"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
