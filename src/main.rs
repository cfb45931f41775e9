pub mod modules;
pub use modules::auth;
pub use modules::course;
pub mod api;
pub mod config;
pub mod health;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::UserQueryPostgres;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::config::AppConfig;
use crate::course::adapter::outgoing::{
    CourseQueryPostgres, CourseRepositoryPostgres, LocalImageStorage, RosterRepositoryPostgres,
};
use crate::course::application::course_use_cases::CourseUseCases;
use crate::course::application::service::{
    AuthorizeCourseService, CreateCourseService, DeleteCourseService, ListCoursesService,
    ShowCourseService, UpdateCourseService, UpdateRosterService, UploadCourseImageService,
};
use crate::shared::api::json_config::{
    custom_form_config, custom_json_config, UploadLimits,
};

use actix_web::middleware::{Logger, NormalizePath, TrailingSlash};
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};

use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub course: CourseUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.bind_address();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    let course_query = CourseQueryPostgres::new(Arc::clone(&db_arc));
    let course_repo = CourseRepositoryPostgres::new(Arc::clone(&db_arc));
    let roster_repo = RosterRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let image_storage = LocalImageStorage::new(config.public_root.clone(), config.app_url.clone());

    let course = CourseUseCases {
        authorize: Arc::new(AuthorizeCourseService::new(
            course_query.clone(),
            user_query.clone(),
        )),
        list: Arc::new(ListCoursesService::new(course_query.clone())),
        show: Arc::new(ShowCourseService::new(
            course_query.clone(),
            user_query.clone(),
        )),
        create: Arc::new(CreateCourseService::new(course_repo.clone())),
        update: Arc::new(UpdateCourseService::new(course_repo.clone())),
        update_roster: Arc::new(UpdateRosterService::new(
            course_query.clone(),
            user_query,
            roster_repo,
        )),
        delete: Arc::new(DeleteCourseService::new(course_repo.clone())),
        upload_image: Arc::new(UploadCourseImageService::new(
            course_query,
            course_repo,
            image_storage,
            config.upload_policy.clone(),
        )),
    };

    let state = AppState { course };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));
    let upload_limits = UploadLimits::new(config.upload_policy.max_file_size_bytes);

    info!(address = %server_url, public_url = %config.app_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_form_config())
            .app_data(upload_limits)
            .service(
                SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await
    .context("Server error")
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::course::adapter::incoming::web::routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Courses; the create form must precede the `{course_id}` routes
    cfg.service(routes::list_courses_handler);
    cfg.service(routes::create_course_form_handler);
    cfg.service(routes::store_course_handler);
    cfg.service(routes::show_course_handler);
    cfg.service(routes::update_course_handler);
    cfg.service(routes::delete_course_handler);
    cfg.service(routes::update_lecturers_handler);
    cfg.service(routes::update_students_handler);
    cfg.service(routes::upload_course_image_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
