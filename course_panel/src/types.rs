//! Wire types shared with the course backend.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RosterRole {
    Lecturer,
    Student,
}

impl RosterRole {
    /// Last segment of the roster endpoint.
    pub fn path_segment(&self) -> &'static str {
        match self {
            RosterRole::Lecturer => "lecturers",
            RosterRole::Student => "students",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Success,
    Danger,
}

/// Byte counts reported while an upload body is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    pub loaded: u64,
    pub total: u64,
}

impl UploadProgress {
    /// Whole percent sent, rounded down.
    pub fn percent(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        self.loaded.min(self.total) * 100 / self.total
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedUrl {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub files: Vec<UploadedUrl>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
    #[serde(default)]
    pub fields: BTreeMap<String, Vec<String>>,
}
