mod authorize_course;
mod create_course;
mod delete_course;
mod list_courses;
mod show_course;
mod update_course;
mod update_roster;
mod upload_course_image;

pub use authorize_course::{AuthorizeCourseError, AuthorizeCourseUseCase, CourseCapability};
pub use create_course::{
    validate_title, CourseTitleError, CreateCourseCommand, CreateCourseError, CreateCourseUseCase,
    MAX_TITLE_LEN,
};
pub use delete_course::{DeleteCourseError, DeleteCourseUseCase};
pub use list_courses::{ListCoursesError, ListCoursesUseCase};
pub use show_course::{ShowCourseError, ShowCourseUseCase};
pub use update_course::{UpdateCourseCommand, UpdateCourseError, UpdateCourseUseCase};
pub use update_roster::{UpdateRosterCommand, UpdateRosterError, UpdateRosterUseCase};
pub use upload_course_image::{
    UploadCourseImageCommand, UploadCourseImageError, UploadCourseImageUseCase, UploadOutcome,
};
