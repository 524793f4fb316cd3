// components/spotify_downloader/src/types.rs
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("retrieval engine not found: {0} is not on PATH")]
    EngineNotFound(&'static str),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("download timed out after {0:?}")]
    TimedOut(Duration),
}

/// Uniform outcome record returned to every caller, interactive or
/// programmatic. Exactly one of message/error is populated; the private
/// fields make the constructors the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadResult {
    success: bool,
    message: Option<String>,
    error: Option<String>,
}

impl DownloadResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl From<DownloadError> for DownloadResult {
    fn from(error: DownloadError) -> Self {
        DownloadResult::failure(error.to_string())
    }
}
