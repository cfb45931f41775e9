//! In-memory doubles for the course ports, shared by service tests.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};
use crate::course::application::domain::entities::{
    Course, CourseId, Lesson, Membership, RosterRole,
};
use crate::course::application::domain::roster::RosterDiff;
use crate::course::application::ports::outgoing::{
    CourseQuery, CourseQueryError, CourseRepository, CourseRepositoryError, CreateCourseData,
    ImageStorage, ImageStorageError, RosterRepository, RosterRepositoryError,
};

pub fn sample_course(id: i64, title: &str) -> Course {
    let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
    Course {
        id: CourseId::from(id),
        title: title.to_string(),
        image: None,
        created_at: at,
        updated_at: at,
    }
}

pub fn sample_user(id: i64, name: &str, is_admin: bool) -> User {
    User {
        id: UserId::from(id),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        is_admin,
    }
}

pub fn user_ids(raw: &[i64]) -> BTreeSet<UserId> {
    raw.iter().copied().map(UserId::from).collect()
}

#[derive(Default)]
struct Store {
    next_id: i64,
    courses: BTreeMap<CourseId, Course>,
    lessons: BTreeMap<CourseId, Vec<Lesson>>,
    lecturers: BTreeMap<CourseId, BTreeSet<UserId>>,
    students: BTreeMap<CourseId, BTreeSet<UserId>>,
    applied_diffs: usize,
}

impl Store {
    fn roster_mut(&mut self, course_id: CourseId, role: RosterRole) -> &mut BTreeSet<UserId> {
        match role {
            RosterRole::Lecturer => self.lecturers.entry(course_id).or_default(),
            RosterRole::Student => self.students.entry(course_id).or_default(),
        }
    }
}

/// Course tables behind one lock; cloning shares the state.
#[derive(Clone, Default)]
pub struct InMemoryCourseStore {
    inner: Arc<Mutex<Store>>,
}

impl InMemoryCourseStore {
    pub fn with_course(self, course: Course) -> Self {
        {
            let mut store = self.inner.lock().unwrap();
            store.next_id = store.next_id.max(course.id.value());
            store.courses.insert(course.id, course);
        }
        self
    }

    pub fn with_roster(self, course_id: i64, role: RosterRole, members: &[i64]) -> Self {
        self.inner
            .lock()
            .unwrap()
            .roster_mut(CourseId::from(course_id), role)
            .extend(user_ids(members));
        self
    }

    pub fn with_lessons(self, course_id: i64, lessons: Vec<Lesson>) -> Self {
        self.inner
            .lock()
            .unwrap()
            .lessons
            .insert(CourseId::from(course_id), lessons);
        self
    }

    pub fn course(&self, course_id: i64) -> Option<Course> {
        self.inner
            .lock()
            .unwrap()
            .courses
            .get(&CourseId::from(course_id))
            .cloned()
    }

    pub fn members(&self, course_id: i64, role: RosterRole) -> BTreeSet<UserId> {
        self.inner
            .lock()
            .unwrap()
            .roster_mut(CourseId::from(course_id), role)
            .clone()
    }

    pub fn applied_diffs(&self) -> usize {
        self.inner.lock().unwrap().applied_diffs
    }
}

#[async_trait]
impl CourseQuery for InMemoryCourseStore {
    async fn list_courses(&self) -> Result<Vec<Course>, CourseQueryError> {
        Ok(self.inner.lock().unwrap().courses.values().cloned().collect())
    }

    async fn find_course(&self, course_id: CourseId) -> Result<Option<Course>, CourseQueryError> {
        Ok(self.inner.lock().unwrap().courses.get(&course_id).cloned())
    }

    async fn lessons_for(&self, course_id: CourseId) -> Result<Vec<Lesson>, CourseQueryError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .lessons
            .get(&course_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn roster(
        &self,
        course_id: CourseId,
        role: RosterRole,
    ) -> Result<BTreeSet<UserId>, CourseQueryError> {
        Ok(self.inner.lock().unwrap().roster_mut(course_id, role).clone())
    }

    async fn membership(
        &self,
        course_id: CourseId,
        user_id: UserId,
    ) -> Result<Membership, CourseQueryError> {
        let mut store = self.inner.lock().unwrap();
        Ok(Membership {
            is_lecturer: store
                .roster_mut(course_id, RosterRole::Lecturer)
                .contains(&user_id),
            is_student: store
                .roster_mut(course_id, RosterRole::Student)
                .contains(&user_id),
        })
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseStore {
    async fn create_course(
        &self,
        data: CreateCourseData,
    ) -> Result<Course, CourseRepositoryError> {
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let course = sample_course(store.next_id, &data.title);
        store.courses.insert(course.id, course.clone());
        Ok(course)
    }

    async fn update_title(
        &self,
        course_id: CourseId,
        title: String,
    ) -> Result<Course, CourseRepositoryError> {
        let mut store = self.inner.lock().unwrap();
        let course = store
            .courses
            .get_mut(&course_id)
            .ok_or(CourseRepositoryError::NotFound)?;
        course.title = title;
        Ok(course.clone())
    }

    async fn set_image(
        &self,
        course_id: CourseId,
        image_url: String,
    ) -> Result<Course, CourseRepositoryError> {
        let mut store = self.inner.lock().unwrap();
        let course = store
            .courses
            .get_mut(&course_id)
            .ok_or(CourseRepositoryError::NotFound)?;
        course.image = Some(image_url);
        Ok(course.clone())
    }

    async fn delete_course(&self, course_id: CourseId) -> Result<(), CourseRepositoryError> {
        let mut store = self.inner.lock().unwrap();
        store
            .courses
            .remove(&course_id)
            .ok_or(CourseRepositoryError::NotFound)?;
        store.lessons.remove(&course_id);
        store.lecturers.remove(&course_id);
        store.students.remove(&course_id);
        Ok(())
    }
}

#[async_trait]
impl RosterRepository for InMemoryCourseStore {
    async fn apply_roster_diff(
        &self,
        course_id: CourseId,
        role: RosterRole,
        diff: &RosterDiff,
    ) -> Result<(), RosterRepositoryError> {
        let mut store = self.inner.lock().unwrap();
        if !store.courses.contains_key(&course_id) {
            return Err(RosterRepositoryError::CourseNotFound);
        }
        store.applied_diffs += 1;

        let roster = store.roster_mut(course_id, role);
        for id in &diff.to_remove {
            roster.remove(id);
        }
        roster.extend(diff.to_add.iter().copied());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryUserQuery {
    users: Vec<User>,
}

impl InMemoryUserQuery {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserQuery for InMemoryUserQuery {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        Ok(self.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, UserQueryError> {
        let mut users = self.users.clone();
        users.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(users)
    }

    async fn existing_ids(
        &self,
        ids: &BTreeSet<UserId>,
    ) -> Result<BTreeSet<UserId>, UserQueryError> {
        Ok(self
            .users
            .iter()
            .map(|u| u.id)
            .filter(|id| ids.contains(id))
            .collect())
    }
}

/// Records every stored object instead of touching the filesystem.
#[derive(Clone, Default)]
pub struct RecordingImageStorage {
    stored: Arc<Mutex<Vec<(String, usize)>>>,
    fail: bool,
}

impl RecordingImageStorage {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Vec<(String, usize)> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStorage for RecordingImageStorage {
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String, ImageStorageError> {
        if self.fail {
            return Err(ImageStorageError::Io("disk full".to_string()));
        }
        self.stored
            .lock()
            .unwrap()
            .push((file_name.to_string(), bytes.len()));
        Ok(format!("http://localhost/uploads/courses/{}", file_name))
    }

    fn placeholder_url(&self) -> String {
        "http://localhost/uploads/error.png".to_string()
    }
}
