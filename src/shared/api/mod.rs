pub mod json_config;
pub mod navigation;
mod response;

pub use response::{ApiError, ApiResponse, FieldErrors};
