//! Drives the course detail page: inline title editing, roster checklists
//! and banner uploads, talking to the course backend over HTTP.

pub mod client;
pub mod controller;
pub mod error;
pub mod types;
pub mod upload;
pub mod view;

pub use client::{ClientConfig, CourseApi, CourseClient, ProgressFn};
pub use controller::{CoursePanel, PanelState};
pub use error::{PanelError, Result};
pub use types::{AlertLevel, RosterRole, UploadProgress};
pub use upload::{accepts_file_name, cache_busted};
pub use view::{ActionGroup, PanelView};
