// bases/download_cli/src/app.rs
use crate::args::Args;
use crate::output::OutputHandler;
use crate::prompt;
use color_eyre::Result;
use download_request::{ContentType, DownloadRequest, Parallelism, Selection};
use spotify_downloader::SpotifyDownloader;
use std::path::Path;

pub struct App {
    args: Args,
    output: OutputHandler,
    downloader: SpotifyDownloader,
}

impl App {
    pub fn new(args: Args) -> Self {
        let output = OutputHandler::new(args.json, args.verbose);
        Self {
            args,
            output,
            downloader: SpotifyDownloader::new(),
        }
    }

    pub async fn run(&self) -> Result<()> {
        let destination = self.args.resolved_output_dir();
        tracing::debug!(destination = %destination.display(), "resolved output directory");

        match self.args.url.clone() {
            Some(url) => self.run_once(&url, &destination).await,
            None => self.run_interactive(&destination).await,
        }
    }

    /// Flag-driven single dispatch: validation errors are fatal (no
    /// re-prompting without a terminal menu), a failed download sets the
    /// exit code.
    async fn run_once(&self, url: &str, destination: &Path) -> Result<()> {
        let content_type: ContentType = self.args.content_type.parse()?;
        let request = DownloadRequest::new(
            url,
            content_type,
            Parallelism::new(self.args.threads),
            destination,
        )?;

        let result = self.downloader.dispatch(&request, self.args.verbose).await;
        self.output.print_result(&result)?;

        if !result.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }

    /// Menu loop: prompt, download, report, repeat until Exit. Malformed
    /// answers never reach the dispatcher; the prompts re-ask instead.
    async fn run_interactive(&self, destination: &Path) -> Result<()> {
        self.output.print_banner();

        loop {
            let content_type = match prompt::menu_selection()? {
                Selection::Exit => {
                    self.output.print_goodbye();
                    return Ok(());
                }
                Selection::Content(content_type) => content_type,
            };

            let url = prompt::spotify_url(content_type)?;
            let parallelism = if content_type.is_multi_item() {
                prompt::worker_count()?
            } else {
                Parallelism::DEFAULT
            };

            let request = DownloadRequest::new(&url, content_type, parallelism, destination)?;

            self.output.print_download_start(content_type, parallelism);
            // Interactive use wants live engine output, not a silent wait.
            let result = self.downloader.dispatch(&request, true).await;
            self.output.print_result(&result)?;
        }
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(error);
    }
}
