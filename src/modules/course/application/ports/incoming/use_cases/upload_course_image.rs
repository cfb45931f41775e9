use async_trait::async_trait;
use serde::Serialize;

use crate::course::application::domain::entities::CourseId;

#[derive(Debug, Clone)]
pub struct UploadCourseImageCommand {
    pub course_id: CourseId,
    /// Name the browser sent, kept for logging only.
    pub original_name: Option<String>,
    pub bytes: Vec<u8>,
}

/// An invalid file is not an error: the page still gets a URL to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UploadOutcome {
    Stored { url: String },
    Rejected { url: String, reason: String },
}

impl UploadOutcome {
    pub fn url(&self) -> &str {
        match self {
            UploadOutcome::Stored { url } | UploadOutcome::Rejected { url, .. } => url,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadCourseImageError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UploadCourseImageUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UploadCourseImageCommand,
    ) -> Result<UploadOutcome, UploadCourseImageError>;
}
