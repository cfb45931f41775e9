use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::course::adapter::incoming::web::routes::{
    CourseForm, CourseFormView, CourseView, FormField, MessageResponse, RosterCandidate,
    UploadResponse, UploadedUrl,
};
use crate::course::application::domain::entities::{Course, Lesson};
use crate::shared::api::navigation::{FlashLevel, FlashNotice};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Course Management API",
        version = "1.0.0",
        description = "Courses, their lecturer and student rosters, and banner images",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        crate::course::adapter::incoming::web::routes::list_courses_handler,
        crate::course::adapter::incoming::web::routes::create_course_form_handler,
        crate::course::adapter::incoming::web::routes::show_course_handler,
        crate::course::adapter::incoming::web::routes::store_course_handler,
        crate::course::adapter::incoming::web::routes::update_course_handler,
        crate::course::adapter::incoming::web::routes::update_lecturers_handler,
        crate::course::adapter::incoming::web::routes::update_students_handler,
        crate::course::adapter::incoming::web::routes::delete_course_handler,
        crate::course::adapter::incoming::web::routes::upload_course_image_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<CourseView>,
            ErrorResponse,
            ErrorDetail,
            FlashNotice,
            FlashLevel,

            // Course DTOs
            Course,
            Lesson,
            CourseForm,
            CourseFormView,
            FormField,
            CourseView,
            RosterCandidate,
            MessageResponse,
            UploadResponse,
            UploadedUrl
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "courses", description = "Course management endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Bearer access token"))
                        .build(),
                ),
            )
        }
    }
}
