pub mod course_members;
pub mod courses;
pub mod lessons;
