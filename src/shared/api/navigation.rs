// src/shared/api/navigation.rs
use actix_web::{
    cookie::{Cookie, SameSite},
    http::header,
    HttpRequest, HttpResponse,
};
use serde::Serialize;
use utoipa::ToSchema;

pub const FLASH_COOKIE: &str = "flash";

/// Requests sent by page scripts mark themselves with `X-Requested-With`.
pub fn is_background(req: &HttpRequest) -> bool {
    req.headers()
        .get("X-Requested-With")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
        .unwrap_or(false)
}

pub fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

/// Redirect to the referring page, or `fallback` when there is none.
pub fn redirect_back(req: &HttpRequest, fallback: &str) -> HttpResponse {
    let location = req
        .headers()
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(fallback);

    redirect_to(location)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
}

impl FlashLevel {
    fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "success" => Some(FlashLevel::Success),
            _ => None,
        }
    }
}

/// Notice handed to the page rendered after a redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FlashNotice {
    pub level: FlashLevel,
    #[schema(example = "Course added")]
    pub message: String,
}

impl FlashNotice {
    /// Reads the `level:message` cookie value; unknown levels yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let (level, message) = value.split_once(':')?;
        Some(Self {
            level: FlashLevel::parse(level)?,
            message: message.to_string(),
        })
    }
}

/// One-shot notice for the next rendered page. Stored as `level:message`.
pub fn flash_cookie(level: FlashLevel, message: &str) -> Cookie<'static> {
    Cookie::build(FLASH_COOKIE, format!("{}:{}", level.as_str(), message))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

/// Expires the flash cookie once its notice has been shown.
pub fn flash_removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

pub fn redirect_with_flash(location: &str, level: FlashLevel, message: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .cookie(flash_cookie(level, message))
        .finish()
}
