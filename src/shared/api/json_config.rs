// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use crate::course::application::domain::policies::UploadPolicy;
use actix_web::web::{FormConfig, JsonConfig};

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::unprocessable("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

pub fn custom_form_config() -> FormConfig {
    FormConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::unprocessable("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

/// Size caps for the image upload route, registered with `App::app_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    pub max_file_bytes: u64,
}

impl UploadLimits {
    /// Room left for multipart headers and any non-file fields.
    pub const FRAMING_BYTES: u64 = 64 * 1024;

    pub fn new(max_file_bytes: u64) -> Self {
        Self { max_file_bytes }
    }

    /// Bytes of request body read before the rest is discarded.
    pub fn body_bytes(&self) -> usize {
        (self.max_file_bytes + Self::FRAMING_BYTES) as usize
    }

    /// File bytes kept: one past the cap, enough for the policy to refuse it.
    pub fn file_bytes(&self) -> usize {
        self.max_file_bytes as usize + 1
    }
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self::new(UploadPolicy::DEFAULT_MAX_FILE_SIZE_BYTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_limits_leave_room_for_framing() {
        let limits = UploadLimits::new(1024);

        assert_eq!(limits.body_bytes(), 1024 + 64 * 1024);
        assert_eq!(limits.file_bytes(), 1025);
        assert_eq!(
            UploadLimits::default().max_file_bytes,
            UploadPolicy::DEFAULT_MAX_FILE_SIZE_BYTES
        );
    }
}
