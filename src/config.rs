// src/config.rs
use std::env;
use std::path::PathBuf;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtConfigError};
use crate::course::application::domain::policies::UploadPolicy;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Prefix of every public URL handed out, without a trailing slash.
    pub app_url: String,
    /// Directory served as the site root; uploads land under `uploads/`.
    pub public_root: PathBuf,
    pub run_migrations: bool,
    pub jwt: JwtConfig,
    pub upload_policy: UploadPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },

    #[error(transparent)]
    Jwt(#[from] JwtConfigError),
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key source. `lookup` returns `None` for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));
        let or_default =
            |key: &'static str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = required("DATABASE_URL")?;
        let host = or_default("HOST", "127.0.0.1");
        let port = parse("PORT", or_default("PORT", "8080"))?;
        let app_url = lookup("APP_URL")
            .unwrap_or_else(|| format!("http://{}:{}", host, port))
            .trim_end_matches('/')
            .to_string();
        let public_root = PathBuf::from(or_default("PUBLIC_ROOT", "public"));
        let run_migrations = parse_flag("RUN_MIGRATIONS", or_default("RUN_MIGRATIONS", "false"))?;

        let jwt = JwtConfig::new(
            required("JWT_SECRET")?,
            or_default("JWT_ISSUER", "course-backend"),
        )?;

        let upload_policy = match lookup("COURSE_IMAGE_MAX_BYTES") {
            Some(raw) => UploadPolicy::with_max_file_size(parse("COURSE_IMAGE_MAX_BYTES", raw)?),
            None => UploadPolicy::default(),
        };

        Ok(Self {
            database_url,
            host,
            port,
            app_url,
            public_root,
            run_migrations,
            jwt,
            upload_policy,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::Invalid { key, value })
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value }),
    }
}
