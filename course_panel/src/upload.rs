//! Banner image upload widget.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::warn;

use crate::client::{CourseApi, ProgressFn};
use crate::controller::CoursePanel;
use crate::error::PanelError;
use crate::types::{AlertLevel, UploadProgress};
use crate::view::PanelView;

const ACCEPTED_EXTENSIONS: [&str; 4] = [".gif", ".jpg", ".jpeg", ".png"];

/// Client-side accept filter, by file name only. The server checks content.
pub fn accepts_file_name(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// `url` with a query of the timestamp's digits, so the browser refetches
/// an image stored under an unchanged name.
pub fn cache_busted(url: &str, at: DateTime<Utc>) -> String {
    format!("{}?{}", url, at.format("%Y%m%d%H%M%S%3f"))
}

impl<V: PanelView, A: CourseApi> CoursePanel<V, A> {
    pub async fn upload_image(&mut self, file_name: &str, bytes: Vec<u8>) {
        if !accepts_file_name(file_name) {
            let err = PanelError::UnsupportedFile(file_name.to_string());
            self.view.show_alert(AlertLevel::Danger, &err.alert_text());
            return;
        }

        self.view.set_progress_visible(true);
        self.view.set_hero_uploading(true);
        self.view.set_upload_trigger_visible(false);

        let (tx, mut rx) = mpsc::unbounded_channel::<UploadProgress>();
        let progress: ProgressFn = Arc::new(move |p| {
            let _ = tx.send(p);
        });

        let upload = self
            .api
            .upload_image(self.course_id, file_name, bytes, progress);
        tokio::pin!(upload);

        let result = loop {
            tokio::select! {
                res = &mut upload => break res,
                Some(p) = rx.recv() => self.view.set_progress(p.percent()),
            }
        };
        while let Ok(p) = rx.try_recv() {
            self.view.set_progress(p.percent());
        }

        match result {
            Ok(url) => self
                .view
                .set_hero_background(&cache_busted(&url, Utc::now())),
            Err(e) => {
                warn!(course_id = self.course_id, error = %e, "Image upload failed");
                self.view.show_alert(AlertLevel::Danger, &e.alert_text());
            }
        }

        self.view.set_progress_visible(false);
        self.view.set_hero_uploading(false);
        self.view.set_upload_trigger_visible(true);
    }
}
