use actix_web::{delete, web, Responder};
use tracing::error;

use super::common::{course_not_found, ensure_allowed};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::course::application::domain::entities::CourseId;
use crate::course::application::ports::incoming::use_cases::{
    CourseCapability, DeleteCourseError,
};
use crate::shared::api::navigation::redirect_to;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/courses/{course_id}",
    tag = "courses",
    params(("course_id" = i64, Path, description = "Course id")),
    responses(
        (status = 303, description = "Deleted; redirects home"),
        (status = 403, description = "Actor may not edit this course", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/courses/{course_id}")]
pub async fn delete_course_handler(
    user: AuthenticatedUser,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = CourseId::from(path.into_inner());

    if let Err(resp) = ensure_allowed(&data, &user, CourseCapability::Edit, Some(course_id)).await
    {
        return resp;
    }

    match data.course.delete.execute(course_id).await {
        Ok(()) => redirect_to("/"),
        Err(DeleteCourseError::CourseNotFound) => course_not_found(),
        Err(DeleteCourseError::RepositoryError(e)) => {
            error!(course_id = %course_id, "Repository error deleting course: {}", e);
            ApiResponse::internal_error()
        }
    }
}
