//! Error types for the course panel.

use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server error ({status}): {message}")]
    Server {
        status: u16,
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// File refused by the accept filter; nothing was sent
    #[error("{0} is not a gif, jpg or png image")]
    UnsupportedFile(String),
}

impl PanelError {
    /// Text for a danger alert: every field message joined by spaces, or the
    /// plain message when the server sent no field errors.
    pub fn alert_text(&self) -> String {
        match self {
            PanelError::Server {
                fields, message, ..
            } => {
                let joined: Vec<&str> = fields
                    .values()
                    .flat_map(|messages| messages.iter().map(String::as_str))
                    .collect();
                if joined.is_empty() {
                    message.clone()
                } else {
                    joined.join(" ")
                }
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PanelError>;
