// src/api/schemas.rs
//! Documentation-only mirrors of the `ApiResponse` envelope.
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::shared::api::navigation::FlashNotice;

/// Envelope around every JSON success body
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
    /// Pending one-shot notice, sent once after a redirect that set it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<FlashNotice>,
}

/// Envelope around every JSON error body
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code clients branch on
    #[schema(example = "COURSE_NOT_FOUND")]
    pub code: String,

    #[schema(example = "Course not found")]
    pub message: String,

    /// Messages per form field; only sent with `VALIDATION_ERROR`
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = json!({"title": ["The title field is required."]}))]
    pub fields: Option<BTreeMap<String, Vec<String>>>,
}
