//! HTTP client for the course endpoints.

use crate::error::{PanelError, Result};
use crate::types::{
    ErrorEnvelope, MessageResponse, RosterRole, UploadProgress, UploadResponse,
};
use async_trait::async_trait;
use futures_util::stream;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, RequestBuilder, Response};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Receives upload progress as the request body is streamed out.
pub type ProgressFn = Arc<dyn Fn(UploadProgress) + Send + Sync>;

const UPLOAD_CHUNK_BYTES: usize = 16 * 1024;

/// The calls the panel makes. Each returns the server's confirmation text,
/// or the stored image URL for uploads.
#[async_trait]
pub trait CourseApi: Send + Sync {
    async fn update_title(&self, course_id: i64, title: &str) -> Result<String>;

    async fn update_roster(
        &self,
        course_id: i64,
        role: RosterRole,
        selected: &[i64],
    ) -> Result<String>;

    async fn upload_image(
        &self,
        course_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
        progress: ProgressFn,
    ) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub access_token: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }
}

pub struct CourseClient {
    http: Client,
    base_url: String,
    access_token: String,
}

impl CourseClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(PanelError::InvalidUrl("URL cannot be empty".into()));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(PanelError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            base_url,
            access_token: config.access_token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn course_url(&self, course_id: i64) -> String {
        format!("{}/courses/{}", self.base_url, course_id)
    }

    /// Marks the request as background so the server answers JSON.
    fn background(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.access_token)
            .header("X-Requested-With", "XMLHttpRequest")
            .header(reqwest::header::ACCEPT, "application/json")
    }

    async fn message(response: Response) -> Result<String> {
        let body: MessageResponse = Self::success_json(response).await?;
        Ok(body.response)
    }

    async fn success_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::server_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| PanelError::ParseError(e.to_string()))
    }

    async fn server_error(response: Response) -> PanelError {
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();

        match serde_json::from_str::<ErrorEnvelope>(&text) {
            Ok(envelope) => PanelError::Server {
                status,
                message: envelope.error.message,
                fields: envelope.error.fields,
            },
            Err(_) => PanelError::Server {
                status,
                message: text,
                fields: BTreeMap::new(),
            },
        }
    }
}

#[async_trait]
impl CourseApi for CourseClient {
    async fn update_title(&self, course_id: i64, title: &str) -> Result<String> {
        debug!(course_id, "Saving course title");

        let response = self
            .background(self.http.patch(self.course_url(course_id)))
            .json(&serde_json::json!({ "title": title }))
            .send()
            .await?;

        Self::message(response).await
    }

    async fn update_roster(
        &self,
        course_id: i64,
        role: RosterRole,
        selected: &[i64],
    ) -> Result<String> {
        let url = format!("{}/{}", self.course_url(course_id), role.path_segment());
        let form: Vec<(String, &str)> = selected.iter().map(|id| (id.to_string(), "on")).collect();

        debug!(course_id, role = role.path_segment(), selected = form.len(), "Saving roster");

        let response = self
            .background(self.http.patch(url))
            .form(&form)
            .send()
            .await?;

        Self::message(response).await
    }

    async fn upload_image(
        &self,
        course_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
        progress: ProgressFn,
    ) -> Result<String> {
        let total = bytes.len() as u64;
        let chunks: Vec<Vec<u8>> = bytes.chunks(UPLOAD_CHUNK_BYTES).map(<[u8]>::to_vec).collect();

        let mut loaded = 0u64;
        let body = stream::iter(chunks.into_iter().map(move |chunk| {
            loaded += chunk.len() as u64;
            progress(UploadProgress { loaded, total });
            Ok::<_, std::io::Error>(chunk)
        }));

        let part = Part::stream_with_length(Body::wrap_stream(body), total)
            .file_name(file_name.to_string());
        let form = Form::new().part("files[]", part);

        let response = self
            .background(
                self.http
                    .post(format!("{}/upload", self.course_url(course_id))),
            )
            .multipart(form)
            .send()
            .await?;

        let uploaded: UploadResponse = Self::success_json(response).await?;
        let url = uploaded
            .files
            .into_iter()
            .next()
            .map(|f| f.url)
            .ok_or_else(|| PanelError::ParseError("Upload response listed no files".into()))?;

        if url.ends_with("/uploads/error.png") {
            warn!(course_id, file = %file_name, "Server rejected the image");
        } else {
            info!(course_id, url = %url, "Course image uploaded");
        }

        Ok(url)
    }
}
