mod content_type;
mod parallelism;
mod request;

pub use content_type::{ContentType, Selection};
pub use parallelism::Parallelism;
pub use request::{looks_like_spotify_url, DownloadRequest, ValidationError, SPOTIFY_URL_PREFIX};
