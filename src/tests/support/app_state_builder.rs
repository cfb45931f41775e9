use actix_web::web;
use std::sync::Arc;

use crate::course::application::course_use_cases::CourseUseCases;
use crate::course::application::ports::incoming::use_cases::{
    AuthorizeCourseUseCase, CreateCourseUseCase, DeleteCourseUseCase, ListCoursesUseCase,
    ShowCourseUseCase, UpdateCourseUseCase, UpdateRosterUseCase, UploadCourseImageUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case defaults to a stub that fails with a repository error, so a
/// handler that reaches one it should not answers 500. The gate allows.
pub struct TestAppStateBuilder {
    course: CourseUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            course: CourseUseCases {
                authorize: Arc::new(StubAuthorizeCourse::allow()),
                list: Arc::new(StubListCourses::repo_error("not used in this test")),
                show: Arc::new(StubShowCourse::repo_error("not used in this test")),
                create: Arc::new(StubCreateCourse::repo_error("not used in this test")),
                update: Arc::new(StubUpdateCourse::repo_error("not used in this test")),
                update_roster: Arc::new(StubUpdateRoster::repo_error("not used in this test")),
                delete: Arc::new(StubDeleteCourse::repo_error("not used in this test")),
                upload_image: Arc::new(StubUploadCourseImage::repo_error(
                    "not used in this test",
                )),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_authorize(
        mut self,
        uc: impl AuthorizeCourseUseCase + Send + Sync + 'static,
    ) -> Self {
        self.course.authorize = Arc::new(uc);
        self
    }

    pub fn with_list_courses(mut self, uc: impl ListCoursesUseCase + Send + Sync + 'static) -> Self {
        self.course.list = Arc::new(uc);
        self
    }

    pub fn with_show_course(mut self, uc: impl ShowCourseUseCase + Send + Sync + 'static) -> Self {
        self.course.show = Arc::new(uc);
        self
    }

    pub fn with_create_course(
        mut self,
        uc: impl CreateCourseUseCase + Send + Sync + 'static,
    ) -> Self {
        self.course.create = Arc::new(uc);
        self
    }

    pub fn with_update_course(
        mut self,
        uc: impl UpdateCourseUseCase + Send + Sync + 'static,
    ) -> Self {
        self.course.update = Arc::new(uc);
        self
    }

    pub fn with_update_roster(
        mut self,
        uc: impl UpdateRosterUseCase + Send + Sync + 'static,
    ) -> Self {
        self.course.update_roster = Arc::new(uc);
        self
    }

    pub fn with_delete_course(
        mut self,
        uc: impl DeleteCourseUseCase + Send + Sync + 'static,
    ) -> Self {
        self.course.delete = Arc::new(uc);
        self
    }

    pub fn with_upload_image(
        mut self,
        uc: impl UploadCourseImageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.course.upload_image = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            course: self.course,
        })
    }
}
