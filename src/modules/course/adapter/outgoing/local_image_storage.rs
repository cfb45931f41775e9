use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

use crate::course::application::ports::outgoing::{ImageStorage, ImageStorageError};

const COURSE_DIR: &str = "uploads/courses";
const PLACEHOLDER: &str = "uploads/error.png";

/// Writes course images under `<public_root>/uploads/courses` and serves them
/// from `<base_url>/uploads/courses`.
#[derive(Clone, Debug)]
pub struct LocalImageStorage {
    public_root: PathBuf,
    base_url: String,
}

impl LocalImageStorage {
    pub fn new(public_root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            public_root: public_root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn directory(&self) -> PathBuf {
        self.public_root.join(COURSE_DIR)
    }

    fn public_url(&self, relative: &str) -> String {
        format!("{}/{}", self.base_url, relative)
    }
}

fn check_name(file_name: &str) -> Result<(), ImageStorageError> {
    let bad = file_name.is_empty()
        || file_name.starts_with('.')
        || file_name.contains('/')
        || file_name.contains('\\')
        || file_name.contains("..");

    if bad {
        return Err(ImageStorageError::InvalidName(file_name.to_string()));
    }
    Ok(())
}

fn io_err(path: &Path, e: std::io::Error) -> ImageStorageError {
    ImageStorageError::Io(format!("{}: {}", path.display(), e))
}

/// The partial file is removed whichever step fails.
async fn write_then_rename(
    partial: &Path,
    target: &Path,
    bytes: &[u8],
) -> Result<(), ImageStorageError> {
    let result = match tokio::fs::write(partial, bytes).await {
        Ok(()) => tokio::fs::rename(partial, target)
            .await
            .map_err(|e| io_err(target, e)),
        Err(e) => Err(io_err(partial, e)),
    };

    if result.is_err() {
        let _ = tokio::fs::remove_file(partial).await;
    }
    result
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String, ImageStorageError> {
        check_name(file_name)?;

        let dir = self.directory();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| io_err(&dir, e))?;

        // Write aside then rename so readers never see a partial file
        let partial = dir.join(format!(".{}.part", Uuid::new_v4()));
        let target = dir.join(file_name);

        write_then_rename(&partial, &target, bytes).await?;

        debug!(path = %target.display(), bytes = bytes.len(), "Image written");
        Ok(self.public_url(&format!("{}/{}", COURSE_DIR, file_name)))
    }

    fn placeholder_url(&self) -> String {
        self.public_url(PLACEHOLDER)
    }
}
