// components/spotify_downloader/src/lib.rs
mod invocation;
mod spotdl;
mod types;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use download_request::{ContentType, DownloadRequest, Parallelism};

pub use invocation::{Invocation, SPOTDL_PROGRAM};
pub use spotdl::{RetrievalEngine, SpotDl};
pub use types::{DownloadError, DownloadResult};

/// The retrieval dispatcher: turns one validated request into one external
/// engine invocation and a uniform result record.
///
/// Stateless across calls. Each dispatch creates the destination
/// directory, builds the command, runs it to completion, and classifies
/// the outcome; nothing is retried and nothing escapes as a panic or an
/// unhandled error.
pub struct SpotifyDownloader {
    engine: Arc<dyn RetrievalEngine + Send + Sync>,
    timeout: Option<Duration>,
}

impl SpotifyDownloader {
    pub fn new() -> Self {
        Self::with_engine(Arc::new(SpotDl))
    }

    /// Construct with a specific engine implementation.
    pub fn with_engine(engine: Arc<dyn RetrievalEngine + Send + Sync>) -> Self {
        Self {
            engine,
            timeout: None,
        }
    }

    /// Bound each dispatch by a wall-clock limit. Without one, a hung
    /// engine process blocks the dispatch indefinitely.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Dispatch a validated request. The returned record carries either a
    /// success message or an error description, never both.
    pub async fn dispatch(&self, request: &DownloadRequest, verbose: bool) -> DownloadResult {
        match self.try_dispatch(request, verbose).await {
            Ok(message) => DownloadResult::success(message),
            Err(error) => {
                tracing::warn!(%error, url = %request.url(), "download failed");
                DownloadResult::from(error)
            }
        }
    }

    /// String-typed boundary for programmatic callers (the presentation
    /// layer). Validation failures are folded into the result record so
    /// the caller always receives the uniform shape.
    pub async fn download(
        &self,
        url: &str,
        content_type: &str,
        threads: u32,
        destination: impl Into<PathBuf>,
        verbose: bool,
    ) -> DownloadResult {
        let content_type: ContentType = match content_type.parse() {
            Ok(content_type) => content_type,
            Err(error) => return DownloadResult::failure(error.to_string()),
        };

        let request = match DownloadRequest::new(
            url,
            content_type,
            Parallelism::new(threads),
            destination,
        ) {
            Ok(request) => request,
            Err(error) => return DownloadResult::failure(error.to_string()),
        };

        self.dispatch(&request, verbose).await
    }

    async fn try_dispatch(
        &self,
        request: &DownloadRequest,
        verbose: bool,
    ) -> Result<String, DownloadError> {
        self.engine.check_available().await?;

        // Idempotent: an already-existing destination is not an error.
        tokio::fs::create_dir_all(request.destination()).await?;

        let invocation = Invocation::from_request(request);
        tracing::debug!(command = %invocation.command_line(), "running retrieval engine");

        let run = self.engine.run(&invocation, verbose);
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, run)
                .await
                .map_err(|_| DownloadError::TimedOut(limit))??,
            None => run.await?,
        }

        tracing::info!(content_type = %request.content_type(), "download complete");
        Ok(format!(
            "{} downloaded successfully!",
            request.content_type().label()
        ))
    }
}

impl Default for SpotifyDownloader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience entry point matching the presentation-layer contract:
/// validate, dispatch through the real engine, report.
pub async fn download(
    url: &str,
    content_type: &str,
    threads: u32,
    destination: impl Into<PathBuf>,
    verbose: bool,
) -> DownloadResult {
    SpotifyDownloader::new()
        .download(url, content_type, threads, destination, verbose)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spotdl::stub::EngineStub;
    use tempfile::TempDir;

    fn downloader(stub: Arc<EngineStub>) -> SpotifyDownloader {
        SpotifyDownloader::with_engine(stub)
    }

    fn track_request(destination: &std::path::Path) -> DownloadRequest {
        DownloadRequest::new(
            "https://open.spotify.com/track/abc123",
            ContentType::Track,
            Parallelism::DEFAULT,
            destination,
        )
        .expect("valid request")
    }

    #[tokio::test]
    async fn successful_track_dispatch_reports_success() {
        let temp = TempDir::new().unwrap();
        let stub = Arc::new(EngineStub::succeeding());
        let result = downloader(Arc::clone(&stub))
            .dispatch(&track_request(temp.path()), false)
            .await;

        assert!(result.is_success());
        assert_eq!(result.message(), Some("Track downloaded successfully!"));
        assert_eq!(result.error(), None);

        let recorded = stub.recorded();
        assert_eq!(recorded.len(), 1, "expected exactly one engine invocation");
        assert_eq!(
            recorded[0].args(),
            &[
                "--format".to_string(),
                "mp3".to_string(),
                "https://open.spotify.com/track/abc123".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn engine_failure_surfaces_stderr_text() {
        let temp = TempDir::new().unwrap();
        let stub = Arc::new(EngineStub::failing("404 not found"));
        let result = downloader(stub)
            .dispatch(&track_request(temp.path()), false)
            .await;

        assert!(!result.is_success());
        assert_eq!(result.message(), None);
        assert_eq!(result.error(), Some("Download failed: 404 not found"));
    }

    #[tokio::test]
    async fn missing_engine_is_a_failure_result_without_invocation() {
        let temp = TempDir::new().unwrap();
        let stub = Arc::new(EngineStub::unavailable());
        let result = downloader(Arc::clone(&stub))
            .dispatch(&track_request(temp.path()), false)
            .await;

        assert!(!result.is_success());
        assert_eq!(
            result.error(),
            Some("retrieval engine not found: spotdl is not on PATH")
        );
        assert!(stub.recorded().is_empty(), "engine must not be invoked");
    }

    #[tokio::test]
    async fn destination_directory_is_created_idempotently() {
        let temp = TempDir::new().unwrap();
        let destination = temp.path().join("music").join("spotify");
        let stub = Arc::new(EngineStub::succeeding());
        let downloader = downloader(stub);

        let request = DownloadRequest::new(
            "https://open.spotify.com/album/def",
            ContentType::Album,
            Parallelism::DEFAULT,
            &destination,
        )
        .unwrap();

        let first = downloader.dispatch(&request, false).await;
        assert!(first.is_success());
        assert!(destination.is_dir());

        // Second dispatch with the directory already present.
        let second = downloader.dispatch(&request, false).await;
        assert!(second.is_success());
    }

    #[tokio::test]
    async fn hung_engine_times_out_when_a_limit_is_set() {
        let temp = TempDir::new().unwrap();
        let stub = Arc::new(EngineStub::hanging());
        let engine: Arc<dyn RetrievalEngine + Send + Sync> = stub.clone();
        let result = SpotifyDownloader::with_engine(engine)
            .with_timeout(Duration::from_millis(50))
            .dispatch(&track_request(temp.path()), false)
            .await;

        assert!(!result.is_success());
        let error = result.error().expect("timeout must produce an error");
        assert!(
            error.contains("timed out"),
            "unexpected error text: {error}"
        );
        assert_eq!(stub.recorded().len(), 1);
    }

    #[tokio::test]
    async fn playlist_dispatch_clamps_workers_in_command() {
        let temp = TempDir::new().unwrap();
        let stub = Arc::new(EngineStub::succeeding());
        let result = downloader(Arc::clone(&stub))
            .download(
                "https://open.spotify.com/playlist/xyz",
                "playlist",
                20,
                temp.path(),
                false,
            )
            .await;

        assert!(result.is_success());
        assert_eq!(result.message(), Some("Playlist downloaded successfully!"));

        let recorded = stub.recorded();
        let args = recorded[0].args();
        let threads_pos = args.iter().position(|a| a == "--threads").unwrap();
        assert_eq!(args[threads_pos + 1], "16");
    }

    #[tokio::test]
    async fn invalid_url_is_rejected_before_any_invocation() {
        let temp = TempDir::new().unwrap();
        let stub = Arc::new(EngineStub::succeeding());
        let result = downloader(Arc::clone(&stub))
            .download("not-a-url", "track", 4, temp.path(), false)
            .await;

        assert!(!result.is_success());
        assert!(result.error().unwrap().contains("not a Spotify URL"));
        assert!(stub.recorded().is_empty(), "no subprocess may be launched");
    }

    #[tokio::test]
    async fn unknown_content_type_is_rejected_before_any_invocation() {
        let temp = TempDir::new().unwrap();
        let stub = Arc::new(EngineStub::succeeding());
        let result = downloader(Arc::clone(&stub))
            .download(
                "https://open.spotify.com/track/abc123",
                "podcast",
                4,
                temp.path(),
                false,
            )
            .await;

        assert!(!result.is_success());
        assert!(result.error().unwrap().contains("unrecognized content type"));
        assert!(stub.recorded().is_empty());
    }
}
