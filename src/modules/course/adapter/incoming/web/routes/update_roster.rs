use actix_web::{patch, web, HttpRequest, HttpResponse, Responder};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::error;

use super::common::{course_not_found, course_path, ensure_allowed, MessageResponse};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::course::application::domain::entities::{CourseId, RosterRole};
use crate::course::application::ports::incoming::use_cases::{
    CourseCapability, UpdateRosterCommand, UpdateRosterError,
};
use crate::shared::api::navigation::{is_background, redirect_back};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Checked user ids as field names. Values are ignored.
pub type SelectionBody =
    web::Either<web::Json<BTreeMap<String, Value>>, web::Form<Vec<(String, String)>>>;

fn selection_keys(body: SelectionBody) -> Vec<String> {
    match body {
        web::Either::Left(json) => json.into_inner().into_keys().collect(),
        web::Either::Right(form) => form.into_inner().into_iter().map(|(k, _)| k).collect(),
    }
}

async fn update_roster(
    role: RosterRole,
    req: HttpRequest,
    user: AuthenticatedUser,
    course_id: CourseId,
    body: SelectionBody,
    data: web::Data<AppState>,
) -> HttpResponse {
    if let Err(resp) = ensure_allowed(&data, &user, CourseCapability::Edit, Some(course_id)).await
    {
        return resp;
    }

    // Rosters are only changed from the page's checkbox script
    if !is_background(&req) {
        return redirect_back(&req, &course_path(course_id));
    }

    let command = match UpdateRosterCommand::new(course_id, role, selection_keys(body)) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::field_error("selections", &e.to_string()),
    };

    match data.course.update_roster.execute(command).await {
        Ok(_) => MessageResponse::ok(role.updated_message()),
        Err(e) => map_roster_error(course_id, e),
    }
}

fn map_roster_error(course_id: CourseId, e: UpdateRosterError) -> HttpResponse {
    match e {
        UpdateRosterError::CourseNotFound => course_not_found(),
        UpdateRosterError::UnknownUsers(ids) => {
            let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
            ApiResponse::not_found(
                "USER_NOT_FOUND",
                &format!("Unknown users: {}", ids.join(", ")),
            )
        }
        UpdateRosterError::RepositoryError(e) => {
            error!(course_id = %course_id, "Repository error updating roster: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    patch,
    path = "/courses/{course_id}/lecturers",
    tag = "courses",
    params(("course_id" = i64, Path, description = "Course id")),
    request_body(content = BTreeMap<String, String>, content_type = "application/x-www-form-urlencoded", description = "Checked user ids as keys"),
    responses(
        (status = 200, description = "Lecturer roster replaced", body = MessageResponse),
        (status = 303, description = "Not a background request; nothing changed"),
        (status = 403, description = "Actor may not edit this course", body = ErrorResponse),
        (status = 404, description = "Course or user not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[patch("/courses/{course_id}/lecturers")]
pub async fn update_lecturers_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    path: web::Path<i64>,
    body: SelectionBody,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = CourseId::from(path.into_inner());
    update_roster(RosterRole::Lecturer, req, user, course_id, body, data).await
}

#[utoipa::path(
    patch,
    path = "/courses/{course_id}/students",
    tag = "courses",
    params(("course_id" = i64, Path, description = "Course id")),
    request_body(content = BTreeMap<String, String>, content_type = "application/x-www-form-urlencoded", description = "Checked user ids as keys"),
    responses(
        (status = 200, description = "Student roster replaced", body = MessageResponse),
        (status = 303, description = "Not a background request; nothing changed"),
        (status = 403, description = "Actor may not edit this course", body = ErrorResponse),
        (status = 404, description = "Course or user not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[patch("/courses/{course_id}/students")]
pub async fn update_students_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    path: web::Path<i64>,
    body: SelectionBody,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = CourseId::from(path.into_inner());
    update_roster(RosterRole::Student, req, user, course_id, body, data).await
}
