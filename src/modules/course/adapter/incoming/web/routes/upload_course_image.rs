use actix_web::{
    error::PayloadError,
    http::{header, StatusCode},
    post, web, HttpRequest, HttpResponse, Responder,
};
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use super::common::{course_not_found, ensure_allowed};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::course::application::domain::entities::CourseId;
use crate::course::application::ports::incoming::use_cases::{
    CourseCapability, UploadCourseImageCommand, UploadCourseImageError,
};
use crate::shared::api::json_config::UploadLimits;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Multipart field names the upload widget sends the file under.
const FILE_FIELDS: [&str; 2] = ["files", "files[]"];
const FILES_REQUIRED: &str = "The files field is required.";

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UploadedUrl {
    #[schema(example = "http://localhost:8080/uploads/courses/course_7.jpg")]
    pub url: String,
}

/// Shape the upload widget expects: one entry per received file.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UploadResponse {
    pub files: Vec<UploadedUrl>,
}

struct CappedBody {
    bytes: web::Bytes,
    /// The client sent more than the cap; the tail was never read.
    truncated: bool,
}

/// Reads at most `limit` bytes of the request body.
async fn read_capped(mut payload: web::Payload, limit: usize) -> Result<CappedBody, PayloadError> {
    let mut buf = web::BytesMut::new();

    while let Some(chunk) = payload.next().await {
        let chunk = chunk?;
        let room = limit - buf.len();
        if chunk.len() > room {
            buf.extend_from_slice(&chunk[..room]);
            return Ok(CappedBody {
                bytes: buf.freeze(),
                truncated: true,
            });
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(CappedBody {
        bytes: buf.freeze(),
        truncated: false,
    })
}

struct UploadedFile {
    name: Option<String>,
    bytes: web::Bytes,
}

/// First file part under one of [`FILE_FIELDS`], if any. At most `max_bytes`
/// of its content are kept.
async fn first_file(
    boundary: String,
    body: web::Bytes,
    max_bytes: usize,
) -> Result<Option<UploadedFile>, multer::Error> {
    let stream = futures_util::stream::once(async move { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    while let Some(mut field) = multipart.next_field().await? {
        let is_file_field = field
            .name()
            .map(|n| FILE_FIELDS.contains(&n))
            .unwrap_or(false);
        if !is_file_field || field.file_name().is_none() {
            continue;
        }

        let name = field.file_name().map(str::to_string);
        let mut bytes = web::BytesMut::new();
        while let Some(chunk) = field.chunk().await? {
            let room = max_bytes - bytes.len();
            bytes.extend_from_slice(&chunk[..chunk.len().min(room)]);
            if bytes.len() == max_bytes {
                break;
            }
        }
        return Ok(Some(UploadedFile {
            name,
            bytes: bytes.freeze(),
        }));
    }

    Ok(None)
}

fn payload_too_large(limits: &UploadLimits) -> HttpResponse {
    ApiResponse::error(
        StatusCode::PAYLOAD_TOO_LARGE,
        "PAYLOAD_TOO_LARGE",
        &format!(
            "Upload body exceeds {} bytes before the file ends",
            limits.body_bytes()
        ),
    )
}

/// Files over the size cap are cut one byte past it and answered with the
/// placeholder. A 413 is only sent when the body overflows before the file
/// part could be read.
#[utoipa::path(
    post,
    path = "/courses/{course_id}/upload",
    tag = "courses",
    params(("course_id" = i64, Path, description = "Course id")),
    request_body(content = String, content_type = "multipart/form-data", description = "Image file under the `files` field"),
    responses(
        (status = 200, description = "Stored image URL, or the placeholder when the file was too large or not a valid image", body = UploadResponse),
        (status = 400, description = "Malformed multipart body", body = ErrorResponse),
        (status = 403, description = "Actor may not edit this course", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 413, description = "Non-file parts overflow the body limit", body = ErrorResponse),
        (status = 422, description = "No file sent", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/courses/{course_id}/upload")]
pub async fn upload_course_image_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    path: web::Path<i64>,
    payload: web::Payload,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = CourseId::from(path.into_inner());

    if let Err(resp) = ensure_allowed(&data, &user, CourseCapability::Edit, Some(course_id)).await
    {
        return resp;
    }

    let boundary = match req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
    {
        Some(b) => b,
        None => return ApiResponse::field_error("files", FILES_REQUIRED),
    };

    let limits = req.app_data::<UploadLimits>().copied().unwrap_or_default();
    let body = match read_capped(payload, limits.body_bytes()).await {
        Ok(body) => body,
        Err(e) => {
            warn!(course_id = %course_id, "Upload body could not be read: {}", e);
            return ApiResponse::bad_request("INVALID_MULTIPART", &e.to_string());
        }
    };
    let truncated = body.truncated;

    let file = match first_file(boundary, body.bytes, limits.file_bytes()).await {
        Ok(Some(file)) => file,
        Ok(None) if truncated => return payload_too_large(&limits),
        Ok(None) => return ApiResponse::field_error("files", FILES_REQUIRED),
        Err(e) if truncated => {
            warn!(course_id = %course_id, "Upload body overflowed before the file: {}", e);
            return payload_too_large(&limits);
        }
        Err(e) => {
            warn!(course_id = %course_id, "Malformed upload body: {}", e);
            return ApiResponse::bad_request("INVALID_MULTIPART", &e.to_string());
        }
    };

    let command = UploadCourseImageCommand {
        course_id,
        original_name: file.name,
        bytes: file.bytes.to_vec(),
    };

    match data.course.upload_image.execute(command).await {
        Ok(outcome) => HttpResponse::Ok().json(UploadResponse {
            files: vec![UploadedUrl {
                url: outcome.url().to_string(),
            }],
        }),
        Err(UploadCourseImageError::CourseNotFound) => course_not_found(),
        Err(e) => {
            error!(course_id = %course_id, "Course image upload failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
