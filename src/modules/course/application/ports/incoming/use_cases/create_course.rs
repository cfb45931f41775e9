use async_trait::async_trait;

use crate::course::application::domain::entities::Course;

pub const MAX_TITLE_LEN: usize = 255;

//
// ──────────────────────────────────────────────────────────
// Title validation (shared by create and update)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CourseTitleError {
    #[error("The title field is required.")]
    Required,

    #[error("The title may not be greater than 255 characters.")]
    TooLong,
}

/// Trims `raw` and checks it is a usable course title.
pub fn validate_title(raw: Option<&str>) -> Result<String, CourseTitleError> {
    let title = raw.map(str::trim).unwrap_or_default();

    if title.is_empty() {
        return Err(CourseTitleError::Required);
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CourseTitleError::TooLong);
    }

    Ok(title.to_string())
}

//
// ──────────────────────────────────────────────────────────
// Create Course Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateCourseCommand {
    title: String,
}

impl CreateCourseCommand {
    pub fn new(title: Option<String>) -> Result<Self, CourseTitleError> {
        Ok(Self {
            title: validate_title(title.as_deref())?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCourseError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCourseUseCase: Send + Sync {
    async fn execute(&self, command: CreateCourseCommand) -> Result<Course, CreateCourseError>;
}
