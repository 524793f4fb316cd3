// components/spotify_downloader/src/spotdl.rs
use crate::invocation::{Invocation, SPOTDL_PROGRAM};
use crate::types::DownloadError;
use async_trait::async_trait;
use tokio::process::Command;

/// Seam between dispatch logic and the external process. The production
/// implementation shells out to spotdl; tests substitute a stub so no
/// subprocess is ever spawned.
#[async_trait]
pub trait RetrievalEngine {
    /// Check that the engine binary can be found at all.
    async fn check_available(&self) -> Result<(), DownloadError>;

    /// Execute one invocation to completion. With `verbose` the child
    /// inherits stdout/stderr for live feedback; otherwise output is
    /// captured so stderr can be surfaced on failure.
    async fn run(&self, invocation: &Invocation, verbose: bool) -> Result<(), DownloadError>;
}

pub struct SpotDl;

#[async_trait]
impl RetrievalEngine for SpotDl {
    async fn check_available(&self) -> Result<(), DownloadError> {
        which::which(SPOTDL_PROGRAM)
            .map(|_| ())
            .map_err(|_| DownloadError::EngineNotFound(SPOTDL_PROGRAM))
    }

    async fn run(&self, invocation: &Invocation, verbose: bool) -> Result<(), DownloadError> {
        let mut command = Command::new(invocation.program());
        command
            .args(invocation.args())
            .current_dir(invocation.working_dir())
            .kill_on_drop(true);

        if verbose {
            // Live passthrough: stdio is inherited, so there is no stderr
            // to report beyond the exit status.
            let status = command.status().await?;
            if !status.success() {
                return Err(DownloadError::DownloadFailed(format!(
                    "{} exited with status: {}",
                    invocation.program(),
                    status
                )));
            }
        } else {
            let output = command.output().await?;
            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let stderr = stderr.trim();
                let detail = if stderr.is_empty() {
                    format!(
                        "{} exited with status: {}",
                        invocation.program(),
                        output.status
                    )
                } else {
                    stderr.to_string()
                };
                return Err(DownloadError::DownloadFailed(detail));
            }
        }

        Ok(())
    }
}
