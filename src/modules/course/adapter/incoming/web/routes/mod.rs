mod common;
mod create_course_form;
mod delete_course;
mod list_courses;
mod show_course;
mod store_course;
mod update_course;
mod update_roster;
mod upload_course_image;

// `__path_*` items are the OpenAPI descriptors `#[utoipa::path]` generates.
pub use common::{CourseForm, MessageResponse};
pub use create_course_form::{
    __path_create_course_form_handler, create_course_form_handler, CourseFormView, FormField,
};
pub use delete_course::{__path_delete_course_handler, delete_course_handler};
pub use list_courses::{__path_list_courses_handler, list_courses_handler};
pub use show_course::{__path_show_course_handler, show_course_handler, CourseView, RosterCandidate};
pub use store_course::{__path_store_course_handler, store_course_handler};
pub use update_course::{__path_update_course_handler, update_course_handler};
pub use update_roster::{
    __path_update_lecturers_handler, __path_update_students_handler, update_lecturers_handler,
    update_students_handler,
};
pub use upload_course_image::{
    __path_upload_course_image_handler, upload_course_image_handler, UploadResponse, UploadedUrl,
};
