use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use super::common::{course_not_found, ensure_allowed};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::course::application::domain::entities::{Course, CourseDetail, CourseId, Lesson};
use crate::course::application::ports::incoming::use_cases::{CourseCapability, ShowCourseError};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

/// A user as the roster checklists show them.
#[derive(Debug, Serialize, ToSchema)]
pub struct RosterCandidate {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_lecturer: bool,
    pub is_student: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseView {
    pub course: Course,
    pub lessons: Vec<Lesson>,
    pub lecturers: Vec<i64>,
    pub students: Vec<i64>,
    pub users: Vec<RosterCandidate>,
}

impl From<CourseDetail> for CourseView {
    fn from(detail: CourseDetail) -> Self {
        let users = detail
            .users
            .into_iter()
            .map(|u| RosterCandidate {
                is_lecturer: detail.lecturers.contains(&u.id),
                is_student: detail.students.contains(&u.id),
                id: u.id.value(),
                name: u.name,
                email: u.email,
            })
            .collect();

        Self {
            course: detail.course,
            lessons: detail.lessons,
            lecturers: detail.lecturers.iter().map(|id| id.value()).collect(),
            students: detail.students.iter().map(|id| id.value()).collect(),
            users,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/courses/{course_id}",
    tag = "courses",
    params(("course_id" = i64, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course with lessons, rosters and user directory", body = inline(SuccessResponse<CourseView>)),
        (status = 403, description = "Actor may not view this course", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/courses/{course_id}")]
pub async fn show_course_handler(
    user: AuthenticatedUser,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = CourseId::from(path.into_inner());

    if let Err(resp) = ensure_allowed(&data, &user, CourseCapability::View, Some(course_id)).await
    {
        return resp;
    }

    match data.course.show.execute(course_id).await {
        Ok(detail) => ApiResponse::success(CourseView::from(detail)),
        Err(ShowCourseError::CourseNotFound) => course_not_found(),
        Err(ShowCourseError::RepositoryError(e)) => {
            error!(course_id = %course_id, "Repository error loading course: {}", e);
            ApiResponse::internal_error()
        }
    }
}
