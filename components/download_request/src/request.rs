// components/download_request/src/request.rs
use crate::{ContentType, Parallelism};
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Canonical secure origin every acceptable URL must start with.
pub const SPOTIFY_URL_PREFIX: &str = "https://open.spotify.com/";

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("not a Spotify URL (expected it to start with {SPOTIFY_URL_PREFIX}): {0}")]
    NotSpotify(String),

    #[error("unrecognized content type: {0} (expected track, playlist, or album)")]
    UnknownContentType(String),
}

/// A validated download request. Construction is the validation boundary:
/// once a value of this type exists, no malformed input can reach the
/// dispatcher. Immutable; consumed by a single dispatch.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    url: Url,
    content_type: ContentType,
    parallelism: Parallelism,
    destination: PathBuf,
}

impl DownloadRequest {
    pub fn new(
        url: &str,
        content_type: ContentType,
        parallelism: Parallelism,
        destination: impl Into<PathBuf>,
    ) -> Result<Self, ValidationError> {
        let url = validate_url(url)?;
        Ok(Self {
            url,
            content_type,
            parallelism,
            destination: destination.into(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Worker count carried by the request. Only consulted for multi-item
    /// content; single tracks are never parallelized.
    pub fn parallelism(&self) -> Parallelism {
        self.parallelism
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

fn validate_url(raw: &str) -> Result<Url, ValidationError> {
    let trimmed = raw.trim();
    if !trimmed.starts_with(SPOTIFY_URL_PREFIX) {
        return Err(ValidationError::NotSpotify(trimmed.to_string()));
    }
    Url::parse(trimmed).map_err(|e| ValidationError::InvalidUrl(e.to_string()))
}

/// Cheap prefix check for interactive re-prompting, where the caller wants
/// a yes/no answer rather than an error value.
pub fn looks_like_spotify_url(raw: &str) -> bool {
    raw.trim().starts_with(SPOTIFY_URL_PREFIX)
}
