use async_trait::async_trait;

use crate::course::application::domain::entities::{Course, CourseDetail, CourseId};
use crate::course::application::domain::roster::RosterDiff;
use crate::course::application::ports::incoming::use_cases::{
    AuthorizeCourseError, AuthorizeCourseUseCase, CourseCapability, CreateCourseCommand,
    CreateCourseError, CreateCourseUseCase, DeleteCourseError, DeleteCourseUseCase,
    ListCoursesError, ListCoursesUseCase, ShowCourseError, ShowCourseUseCase,
    UpdateCourseCommand, UpdateCourseError, UpdateCourseUseCase, UpdateRosterCommand,
    UpdateRosterError, UpdateRosterUseCase, UploadCourseImageCommand, UploadCourseImageError,
    UploadCourseImageUseCase, UploadOutcome,
};
use crate::auth::application::domain::entities::UserId;

// ============================================================
// Access gate
// ============================================================

#[derive(Clone)]
pub struct StubAuthorizeCourse {
    result: Result<(), AuthorizeCourseError>,
}

impl StubAuthorizeCourse {
    pub fn allow() -> Self {
        Self { result: Ok(()) }
    }

    pub fn forbid(capability: CourseCapability) -> Self {
        Self {
            result: Err(AuthorizeCourseError::Forbidden(capability)),
        }
    }

    pub fn course_not_found() -> Self {
        Self {
            result: Err(AuthorizeCourseError::CourseNotFound),
        }
    }
}

#[async_trait]
impl AuthorizeCourseUseCase for StubAuthorizeCourse {
    async fn authorize(
        &self,
        _actor: UserId,
        _capability: CourseCapability,
        _course_id: Option<CourseId>,
    ) -> Result<(), AuthorizeCourseError> {
        self.result.clone()
    }
}

// ============================================================
// Course use cases
// ============================================================

#[derive(Clone)]
pub struct StubListCourses {
    result: Result<Vec<Course>, ListCoursesError>,
}

impl StubListCourses {
    pub fn success(courses: Vec<Course>) -> Self {
        Self {
            result: Ok(courses),
        }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(ListCoursesError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl ListCoursesUseCase for StubListCourses {
    async fn execute(&self) -> Result<Vec<Course>, ListCoursesError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubShowCourse {
    result: Result<CourseDetail, ShowCourseError>,
}

impl StubShowCourse {
    pub fn success(detail: CourseDetail) -> Self {
        Self { result: Ok(detail) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(ShowCourseError::CourseNotFound),
        }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(ShowCourseError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl ShowCourseUseCase for StubShowCourse {
    async fn execute(&self, _course_id: CourseId) -> Result<CourseDetail, ShowCourseError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubCreateCourse {
    result: Result<Course, CreateCourseError>,
}

impl StubCreateCourse {
    pub fn success(course: Course) -> Self {
        Self { result: Ok(course) }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(CreateCourseError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl CreateCourseUseCase for StubCreateCourse {
    async fn execute(&self, _command: CreateCourseCommand) -> Result<Course, CreateCourseError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubUpdateCourse {
    result: Result<Course, UpdateCourseError>,
}

impl StubUpdateCourse {
    pub fn success(course: Course) -> Self {
        Self { result: Ok(course) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(UpdateCourseError::CourseNotFound),
        }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(UpdateCourseError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl UpdateCourseUseCase for StubUpdateCourse {
    async fn execute(&self, _command: UpdateCourseCommand) -> Result<Course, UpdateCourseError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubUpdateRoster {
    result: Result<RosterDiff, UpdateRosterError>,
}

impl StubUpdateRoster {
    pub fn success(diff: RosterDiff) -> Self {
        Self { result: Ok(diff) }
    }

    pub fn error(err: UpdateRosterError) -> Self {
        Self { result: Err(err) }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self::error(UpdateRosterError::RepositoryError(msg.to_string()))
    }
}

#[async_trait]
impl UpdateRosterUseCase for StubUpdateRoster {
    async fn execute(&self, _command: UpdateRosterCommand) -> Result<RosterDiff, UpdateRosterError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubDeleteCourse {
    result: Result<(), DeleteCourseError>,
}

impl StubDeleteCourse {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(DeleteCourseError::CourseNotFound),
        }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(DeleteCourseError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl DeleteCourseUseCase for StubDeleteCourse {
    async fn execute(&self, _course_id: CourseId) -> Result<(), DeleteCourseError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubUploadCourseImage {
    result: Result<UploadOutcome, UploadCourseImageError>,
}

impl StubUploadCourseImage {
    pub fn outcome(outcome: UploadOutcome) -> Self {
        Self {
            result: Ok(outcome),
        }
    }

    pub fn error(err: UploadCourseImageError) -> Self {
        Self { result: Err(err) }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self::error(UploadCourseImageError::RepositoryError(msg.to_string()))
    }
}

#[async_trait]
impl UploadCourseImageUseCase for StubUploadCourseImage {
    async fn execute(
        &self,
        _command: UploadCourseImageCommand,
    ) -> Result<UploadOutcome, UploadCourseImageError> {
        self.result.clone()
    }
}
