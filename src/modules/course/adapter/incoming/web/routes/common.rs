use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::course::application::domain::entities::CourseId;
use crate::course::application::ports::incoming::use_cases::{
    AuthorizeCourseError, CourseCapability, CourseTitleError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Body of the create and update forms. Accepted form-encoded or as JSON.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CourseForm {
    #[serde(default)]
    pub title: Option<String>,
}

/// Confirmation returned to background requests.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Course Updated")]
    pub response: String,
}

impl MessageResponse {
    pub fn ok(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(MessageResponse {
            response: message.to_string(),
        })
    }
}

pub type CourseFormBody = web::Either<web::Json<CourseForm>, web::Form<CourseForm>>;

/// Runs the capability check. The error side is the response to send as is.
pub async fn ensure_allowed(
    data: &AppState,
    user: &AuthenticatedUser,
    capability: CourseCapability,
    course_id: Option<CourseId>,
) -> Result<(), HttpResponse> {
    data.course
        .authorize
        .authorize(user.user_id, capability, course_id)
        .await
        .map_err(map_authorize_error)
}

fn map_authorize_error(e: AuthorizeCourseError) -> HttpResponse {
    match e {
        AuthorizeCourseError::Forbidden(_) => {
            ApiResponse::forbidden("FORBIDDEN", "This action is unauthorized.")
        }
        AuthorizeCourseError::CourseNotFound => course_not_found(),
        AuthorizeCourseError::RepositoryError(e) => {
            error!("Repository error checking course access: {}", e);
            ApiResponse::internal_error()
        }
    }
}

pub fn course_not_found() -> HttpResponse {
    ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
}

pub fn title_error(e: CourseTitleError) -> HttpResponse {
    ApiResponse::field_error("title", &e.to_string())
}

pub fn course_path(course_id: CourseId) -> String {
    format!("/courses/{}", course_id)
}
