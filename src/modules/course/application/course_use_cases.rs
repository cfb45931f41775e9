use std::sync::Arc;

use crate::course::application::ports::incoming::use_cases::{
    AuthorizeCourseUseCase, CreateCourseUseCase, DeleteCourseUseCase, ListCoursesUseCase,
    ShowCourseUseCase, UpdateCourseUseCase, UpdateRosterUseCase, UploadCourseImageUseCase,
};

#[derive(Clone)]
pub struct CourseUseCases {
    pub authorize: Arc<dyn AuthorizeCourseUseCase + Send + Sync>,
    pub list: Arc<dyn ListCoursesUseCase + Send + Sync>,
    pub show: Arc<dyn ShowCourseUseCase + Send + Sync>,
    pub create: Arc<dyn CreateCourseUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCourseUseCase + Send + Sync>,
    pub update_roster: Arc<dyn UpdateRosterUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCourseUseCase + Send + Sync>,
    pub upload_image: Arc<dyn UploadCourseImageUseCase + Send + Sync>,
}
