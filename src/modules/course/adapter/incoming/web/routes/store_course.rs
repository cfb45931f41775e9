use actix_web::{post, web, Responder};
use tracing::error;

use super::common::{ensure_allowed, title_error, CourseFormBody};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::course::application::ports::incoming::use_cases::{
    CourseCapability, CreateCourseCommand, CreateCourseError,
};
use crate::shared::api::navigation::{redirect_with_flash, FlashLevel};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/courses",
    tag = "courses",
    request_body(content = super::CourseForm, description = "Form-encoded or JSON"),
    responses(
        (status = 303, description = "Created; redirects to the course list with a flash notice"),
        (status = 403, description = "Actor may not create courses", body = ErrorResponse),
        (status = 422, description = "Title missing or too long", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/courses")]
pub async fn store_course_handler(
    user: AuthenticatedUser,
    body: CourseFormBody,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = ensure_allowed(&data, &user, CourseCapability::Create, None).await {
        return resp;
    }

    let command = match CreateCourseCommand::new(body.into_inner().title) {
        Ok(cmd) => cmd,
        Err(e) => return title_error(e),
    };

    match data.course.create.execute(command).await {
        Ok(_) => redirect_with_flash("/courses", FlashLevel::Success, "Course added"),
        Err(CreateCourseError::RepositoryError(e)) => {
            error!("Repository error creating course: {}", e);
            ApiResponse::internal_error()
        }
    }
}
