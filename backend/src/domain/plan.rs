//! Action plan document.
//!
//! A singleton JSON document holding two ordered lists. Item and category
//! contents are opaque to the backend; clients own their shape. Every write
//! replaces the whole document, so validation only checks that both fields
//! arrive as sequences.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

/// Validation failures for [`ActionPlan::from_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlanValidationError {
    /// The submitted body is not a JSON object.
    #[error("action plan body must be a JSON object")]
    NotAnObject,
    /// A required field is missing or is not a JSON array.
    #[error("field `{0}` must be a sequence")]
    FieldNotASequence(&'static str),
}

impl PlanValidationError {
    /// Name of the offending field, when one is known.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::NotAnObject => None,
            Self::FieldNotASequence(field) => Some(field),
        }
    }
}

/// The action plan document: ordered `items` and `categorias` lists.
///
/// Reads of a missing or unparsable persisted document fall back to
/// [`ActionPlan::default`] (both lists empty).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActionPlan {
    /// Ordered sequence of opaque item records.
    #[serde(default)]
    pub items: Vec<Value>,
    /// Ordered sequence of opaque category records.
    #[serde(default)]
    pub categorias: Vec<Value>,
}

impl ActionPlan {
    /// Build a plan from a raw JSON submission, rejecting malformed shapes.
    ///
    /// Both `items` and `categorias` must be present as JSON arrays; there
    /// is no partial merge.
    ///
    /// # Errors
    /// Returns [`PlanValidationError`] naming the first offending field.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::ActionPlan;
    /// use serde_json::json;
    ///
    /// let plan = ActionPlan::from_value(&json!({ "items": [1], "categorias": [] }))
    ///     .expect("well-formed plan");
    /// assert_eq!(plan.items.len(), 1);
    /// assert!(ActionPlan::from_value(&json!({ "items": "x", "categorias": [] })).is_err());
    /// ```
    pub fn from_value(value: &Value) -> Result<Self, PlanValidationError> {
        let body = value.as_object().ok_or(PlanValidationError::NotAnObject)?;
        let items = body
            .get("items")
            .and_then(Value::as_array)
            .ok_or(PlanValidationError::FieldNotASequence("items"))?;
        let categorias = body
            .get("categorias")
            .and_then(Value::as_array)
            .ok_or(PlanValidationError::FieldNotASequence("categorias"))?;
        Ok(Self {
            items: items.clone(),
            categorias: categorias.clone(),
        })
    }
}
