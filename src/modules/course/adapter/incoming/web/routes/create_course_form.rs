use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use super::common::ensure_allowed;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::course::application::ports::incoming::use_cases::{CourseCapability, MAX_TITLE_LEN};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub required: bool,
    pub max_length: usize,
}

/// What the create page renders: a blank form.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseFormView {
    pub action: String,
    pub method: String,
    pub fields: Vec<FormField>,
}

impl CourseFormView {
    fn blank() -> Self {
        Self {
            action: "/courses".to_string(),
            method: "POST".to_string(),
            fields: vec![FormField {
                name: "title".to_string(),
                label: "Title".to_string(),
                required: true,
                max_length: MAX_TITLE_LEN,
            }],
        }
    }
}

#[utoipa::path(
    get,
    path = "/courses/create",
    tag = "courses",
    responses(
        (status = 200, description = "Blank course form", body = inline(SuccessResponse<CourseFormView>)),
        (status = 403, description = "Actor may not create courses", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/courses/create")]
pub async fn create_course_form_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = ensure_allowed(&data, &user, CourseCapability::Create, None).await {
        return resp;
    }

    ApiResponse::success(CourseFormView::blank())
}
