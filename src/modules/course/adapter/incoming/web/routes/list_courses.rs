use actix_web::{get, web, HttpRequest, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::course::application::domain::entities::Course;
use crate::course::application::ports::incoming::use_cases::ListCoursesError;
use crate::shared::api::navigation::{FlashNotice, FLASH_COOKIE};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/courses",
    tag = "courses",
    responses(
        (status = 200, description = "All courses ordered by id, plus any pending flash notice (its cookie is then expired)", body = inline(SuccessResponse<Vec<Course>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/courses")]
pub async fn list_courses_handler(
    req: HttpRequest,
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.course.list.execute().await {
        Ok(courses) => match req.cookie(FLASH_COOKIE) {
            Some(pending) => {
                ApiResponse::success_with_flash(courses, FlashNotice::parse(pending.value()))
            }
            None => ApiResponse::success(courses),
        },
        Err(ListCoursesError::RepositoryError(e)) => {
            error!("Repository error listing courses: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use actix_web::cookie::time::Duration;
    use serde_json::Value;

    use crate::course::application::service::{CreateCourseService, ListCoursesService};
    use crate::shared::api::json_config::custom_form_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, StubTokenProvider};
    use crate::tests::support::course_fakes::{sample_course, InMemoryCourseStore};
    use crate::tests::support::stubs::StubListCourses;

    #[actix_web::test]
    async fn lists_courses_in_envelope() {
        let state = TestAppStateBuilder::default()
            .with_list_courses(StubListCourses::success(vec![
                sample_course(1, "Algebra"),
                sample_course(2, "Biology"),
            ]))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::for_user(1).into_app_data())
                .service(list_courses_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/courses")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["id"], 1);
        assert_eq!(body["data"][1]["title"], "Biology");
        assert!(body["data"][0]["image"].is_null());
    }

    #[actix_web::test]
    async fn requires_token() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(StubTokenProvider::for_user(1).into_app_data())
                .service(list_courses_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/courses").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn repository_failure_is_internal_error() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(StubTokenProvider::for_user(1).into_app_data())
                .service(list_courses_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/courses")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }

    #[actix_web::test]
    async fn flash_from_store_is_shown_once_then_cleared() {
        let store = InMemoryCourseStore::default();
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_create_course(CreateCourseService::new(store.clone()))
                        .with_list_courses(ListCoursesService::new(store.clone()))
                        .build(),
                )
                .app_data(custom_form_config())
                .app_data(StubTokenProvider::for_user(1).into_app_data())
                .service(super::super::store_course_handler)
                .service(list_courses_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/courses")
            .insert_header(bearer())
            .set_form([("title", "Algebra")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let flash = resp
            .response()
            .cookies()
            .find(|c| c.name() == FLASH_COOKIE)
            .expect("flash cookie")
            .into_owned();

        // First page after the redirect carries the notice and expires the cookie.
        let req = test::TestRequest::get()
            .uri("/courses")
            .insert_header(bearer())
            .cookie(flash)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let cleared = resp
            .response()
            .cookies()
            .find(|c| c.name() == FLASH_COOKIE)
            .expect("removal cookie")
            .into_owned();
        assert_eq!(cleared.value(), "");
        assert_eq!(cleared.max_age(), Some(Duration::ZERO));
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["flash"]["level"], "success");
        assert_eq!(body["flash"]["message"], "Course added");
        assert_eq!(body["data"][0]["title"], "Algebra");

        // The browser has dropped the cookie, so the next listing is plain.
        let req = test::TestRequest::get()
            .uri("/courses")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp
            .response()
            .cookies()
            .all(|c| c.name() != FLASH_COOKIE));
        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("flash").is_none());
    }

    #[actix_web::test]
    async fn unreadable_flash_cookie_is_still_cleared() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_list_courses(StubListCourses::success(vec![]))
                        .build(),
                )
                .app_data(StubTokenProvider::for_user(1).into_app_data())
                .service(list_courses_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/courses")
            .insert_header(bearer())
            .cookie(actix_web::cookie::Cookie::new(FLASH_COOKIE, "garbage"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp
            .response()
            .cookies()
            .any(|c| c.name() == FLASH_COOKIE && c.value().is_empty()));
        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("flash").is_none());
    }
}
