// bases/download_cli/src/output.rs
use color_eyre::Result;
use console::style;
use download_request::{ContentType, Parallelism};
use spotify_downloader::DownloadResult;

pub struct OutputHandler {
    json: bool,
    verbose: bool,
}

impl OutputHandler {
    pub fn new(json: bool, verbose: bool) -> Self {
        Self { json, verbose }
    }

    pub fn print_banner(&self) {
        println!("Spotify to MP3 Downloader");
    }

    pub fn print_download_start(&self, content_type: ContentType, parallelism: Parallelism) {
        if content_type.is_multi_item() {
            println!(
                "\nDownloading {content_type} as MP3 using {parallelism} parallel downloads..."
            );
        } else {
            println!("\nDownloading {content_type} as MP3...");
        }
    }

    /// Render the uniform result record: a JSON line in `--json` mode,
    /// otherwise a checkmark- or cross-prefixed one-liner.
    pub fn print_result(&self, result: &DownloadResult) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(result)?);
            return Ok(());
        }

        match (result.message(), result.error()) {
            (Some(message), _) => println!("\n{} {message}\n", style("✓").green().bold()),
            (_, Some(error)) => eprintln!("\n{} {error}\n", style("✗").red().bold()),
            // Unreachable by construction; keep the record visible anyway.
            (None, None) => println!("\n{result:?}\n"),
        }
        Ok(())
    }

    pub fn print_goodbye(&self) {
        println!("Exiting.");
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        eprintln!("Error: {error}");

        if self.verbose {
            eprintln!("\nError details:");
            error.chain().skip(1).for_each(|cause| {
                eprintln!("  caused by: {cause}");
            });
        }
    }
}
