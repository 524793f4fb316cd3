// bases/download_cli/src/args.rs
use clap::Parser;
use std::path::{Path, PathBuf};

/// Download Spotify tracks, playlists, and albums as MP3 files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Spotify URL to download; omit to run the interactive menu
    pub url: Option<String>,

    /// What the URL points at: track, playlist, or album
    #[arg(short, long, default_value = "track")]
    pub content_type: String,

    /// Directory to store downloaded files (defaults to your Music directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Parallel downloads for playlists and albums (clamped to 16)
    #[arg(short, long, default_value_t = 4)]
    pub threads: u32,

    /// Pass the retrieval engine's output through live
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the result record as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Destination directory: the explicit flag wins, then the platform
    /// Music directory, then `./Music`.
    pub fn resolved_output_dir(&self) -> PathBuf {
        if let Some(dir) = &self.output_dir {
            return dir.clone();
        }
        directories::UserDirs::new()
            .map(|dirs| {
                dirs.audio_dir()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| dirs.home_dir().join("Music"))
            })
            .unwrap_or_else(|| PathBuf::from("Music"))
    }
}
