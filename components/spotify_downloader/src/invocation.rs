// components/spotify_downloader/src/invocation.rs
use download_request::DownloadRequest;
use std::path::{Path, PathBuf};

/// Name of the external retrieval engine binary.
pub const SPOTDL_PROGRAM: &str = "spotdl";

/// A fully constructed external command: program, arguments, and working
/// directory. Built as a plain value so command construction can be
/// asserted on without spawning anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: &'static str,
    args: Vec<String>,
    working_dir: PathBuf,
}

impl Invocation {
    /// Build the engine command for a validated request:
    /// `spotdl --format mp3 [--threads N] <url>`, run inside the
    /// destination directory. The worker-count flag is appended only for
    /// multi-item content; single tracks are never parallelized.
    pub fn from_request(request: &DownloadRequest) -> Self {
        let mut args = vec!["--format".to_string(), "mp3".to_string()];

        if request.content_type().is_multi_item() {
            args.push("--threads".to_string());
            args.push(request.parallelism().to_string());
        }

        args.push(request.url().as_str().to_string());

        Self {
            program: SPOTDL_PROGRAM,
            args,
            working_dir: request.destination().to_path_buf(),
        }
    }

    pub fn program(&self) -> &'static str {
        self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Single-line rendering for logs.
    pub fn command_line(&self) -> String {
        let mut line = self.program.to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}
