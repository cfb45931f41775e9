pub mod app_state_builder;
pub mod auth_helper;
pub mod course_fakes;
pub mod stubs;
