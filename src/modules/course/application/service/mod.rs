mod authorize_course_service;
mod create_course_service;
mod delete_course_service;
mod list_courses_service;
mod show_course_service;
mod update_course_service;
mod update_roster_service;
mod upload_course_image_service;

pub use authorize_course_service::AuthorizeCourseService;
pub use create_course_service::CreateCourseService;
pub use delete_course_service::DeleteCourseService;
pub use list_courses_service::ListCoursesService;
pub use show_course_service::ShowCourseService;
pub use update_course_service::UpdateCourseService;
pub use update_roster_service::UpdateRosterService;
pub use upload_course_image_service::UploadCourseImageService;
