use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ImageStorageError {
    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Invalid object name: {0}")]
    InvalidName(String),
}

/// Where accepted banner images end up.
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Stores `bytes` under `file_name`, replacing any previous object, and
    /// returns its public URL.
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String, ImageStorageError>;

    /// Public URL of the image shown when an upload is rejected.
    fn placeholder_url(&self) -> String;
}
