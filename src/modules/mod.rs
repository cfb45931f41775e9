pub mod auth;
pub mod course;
