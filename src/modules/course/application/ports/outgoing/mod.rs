mod course_query;
mod course_repository;
mod image_storage;
mod roster_repository;

pub use course_query::{CourseQuery, CourseQueryError};
pub use course_repository::{CourseRepository, CourseRepositoryError, CreateCourseData};
pub use image_storage::{ImageStorage, ImageStorageError};
pub use roster_repository::{RosterRepository, RosterRepositoryError};
