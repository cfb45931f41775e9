use actix_web::{patch, web, HttpRequest, Responder};
use tracing::error;

use super::common::{
    course_not_found, course_path, ensure_allowed, title_error, CourseFormBody, MessageResponse,
};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::course::application::domain::entities::CourseId;
use crate::course::application::ports::incoming::use_cases::{
    CourseCapability, UpdateCourseCommand, UpdateCourseError,
};
use crate::shared::api::navigation::{is_background, redirect_back};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    patch,
    path = "/courses/{course_id}",
    tag = "courses",
    params(("course_id" = i64, Path, description = "Course id")),
    request_body(content = super::CourseForm, description = "Form-encoded or JSON"),
    responses(
        (status = 200, description = "Background request: title saved", body = MessageResponse),
        (status = 303, description = "Page request: redirect back"),
        (status = 403, description = "Actor may not edit this course", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 422, description = "Title missing or too long", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[patch("/courses/{course_id}")]
pub async fn update_course_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    path: web::Path<i64>,
    body: CourseFormBody,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = CourseId::from(path.into_inner());

    if let Err(resp) = ensure_allowed(&data, &user, CourseCapability::Edit, Some(course_id)).await
    {
        return resp;
    }

    let command = match UpdateCourseCommand::new(course_id, body.into_inner().title) {
        Ok(cmd) => cmd,
        Err(e) => return title_error(e),
    };

    match data.course.update.execute(command).await {
        Ok(_) if is_background(&req) => MessageResponse::ok("Course Updated"),
        Ok(_) => redirect_back(&req, &course_path(course_id)),
        Err(UpdateCourseError::CourseNotFound) => course_not_found(),
        Err(UpdateCourseError::RepositoryError(e)) => {
            error!(course_id = %course_id, "Repository error updating course: {}", e);
            ApiResponse::internal_error()
        }
    }
}
