use async_trait::async_trait;
use tracing::{info, warn};

use crate::course::application::domain::policies::UploadPolicy;
use crate::course::application::ports::{
    incoming::use_cases::{
        UploadCourseImageCommand, UploadCourseImageError, UploadCourseImageUseCase, UploadOutcome,
    },
    outgoing::{CourseQuery, CourseRepository, CourseRepositoryError, ImageStorage},
};

pub struct UploadCourseImageService<Q, R, S>
where
    Q: CourseQuery,
    R: CourseRepository,
    S: ImageStorage,
{
    query: Q,
    repository: R,
    storage: S,
    policy: UploadPolicy,
}

impl<Q, R, S> UploadCourseImageService<Q, R, S>
where
    Q: CourseQuery,
    R: CourseRepository,
    S: ImageStorage,
{
    pub fn new(query: Q, repository: R, storage: S, policy: UploadPolicy) -> Self {
        Self {
            query,
            repository,
            storage,
            policy,
        }
    }
}

#[async_trait]
impl<Q, R, S> UploadCourseImageUseCase for UploadCourseImageService<Q, R, S>
where
    Q: CourseQuery + Send + Sync,
    R: CourseRepository + Send + Sync,
    S: ImageStorage + Send + Sync,
{
    async fn execute(
        &self,
        command: UploadCourseImageCommand,
    ) -> Result<UploadOutcome, UploadCourseImageError> {
        let course_id = command.course_id;

        self.query
            .find_course(course_id)
            .await
            .map_err(|e| UploadCourseImageError::RepositoryError(e.to_string()))?
            .ok_or(UploadCourseImageError::CourseNotFound)?;

        let kind = match self.policy.inspect(&command.bytes) {
            Ok(kind) => kind,
            Err(rejection) => {
                warn!(
                    course_id = %course_id,
                    original_name = command.original_name.as_deref().unwrap_or(""),
                    reason = %rejection,
                    "Course image rejected"
                );
                return Ok(UploadOutcome::Rejected {
                    url: self.storage.placeholder_url(),
                    reason: rejection.to_string(),
                });
            }
        };

        let file_name = format!("course_{}.{}", course_id, kind.extension());
        let url = self
            .storage
            .store(&file_name, &command.bytes)
            .await
            .map_err(|e| UploadCourseImageError::StorageError(e.to_string()))?;

        self.repository
            .set_image(course_id, url.clone())
            .await
            .map_err(|e| match e {
                CourseRepositoryError::NotFound => UploadCourseImageError::CourseNotFound,
                other => UploadCourseImageError::RepositoryError(other.to_string()),
            })?;

        info!(course_id = %course_id, %url, "Course image stored");
        Ok(UploadOutcome::Stored { url })
    }
}
