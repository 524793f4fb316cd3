// components/download_request/src/content_type.rs
use crate::request::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity of the requested media: one track, or a multi-item
/// playlist/album collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Track,
    Playlist,
    Album,
}

impl ContentType {
    /// True for content that resolves to more than one item. Only these
    /// kinds are ever parallelized by the retrieval engine.
    pub fn is_multi_item(&self) -> bool {
        matches!(self, ContentType::Playlist | ContentType::Album)
    }

    /// Capitalized label for user-facing messages ("Track downloaded...").
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Track => "Track",
            ContentType::Playlist => "Playlist",
            ContentType::Album => "Album",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentType::Track => "track",
            ContentType::Playlist => "playlist",
            ContentType::Album => "album",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ContentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "track" => Ok(ContentType::Track),
            "playlist" => Ok(ContentType::Playlist),
            "album" => Ok(ContentType::Album),
            other => Err(ValidationError::UnknownContentType(other.to_string())),
        }
    }
}

/// What the interactive menu resolved to: a content type to download, or
/// the exit sentinel. The numeric selector is mapped to this at the prompt
/// boundary so the rest of the code never sees "1"/"2"/"3"/"4" strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Content(ContentType),
    Exit,
}

impl Selection {
    /// Map a menu answer to a selection. Accepts the numeric choices as
    /// well as the spelled-out names.
    pub fn from_menu_answer(answer: &str) -> Result<Self, ValidationError> {
        match answer.trim().to_ascii_lowercase().as_str() {
            "1" | "track" => Ok(Selection::Content(ContentType::Track)),
            "2" | "playlist" => Ok(Selection::Content(ContentType::Playlist)),
            "3" | "album" => Ok(Selection::Content(ContentType::Album)),
            "4" | "exit" => Ok(Selection::Exit),
            other => Err(ValidationError::UnknownContentType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("track", ContentType::Track)]
    #[case("playlist", ContentType::Playlist)]
    #[case("album", ContentType::Album)]
    #[case("  Album  ", ContentType::Album)]
    #[case("TRACK", ContentType::Track)]
    fn parses_known_content_types(#[case] input: &str, #[case] expected: ContentType) {
        assert_eq!(input.parse::<ContentType>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_content_type() {
        let err = "podcast".parse::<ContentType>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unrecognized content type: podcast (expected track, playlist, or album)"
        );
    }

    #[test]
    fn only_collections_are_multi_item() {
        assert!(!ContentType::Track.is_multi_item());
        assert!(ContentType::Playlist.is_multi_item());
        assert!(ContentType::Album.is_multi_item());
    }

    #[rstest]
    #[case("1", Selection::Content(ContentType::Track))]
    #[case("2", Selection::Content(ContentType::Playlist))]
    #[case("3", Selection::Content(ContentType::Album))]
    #[case("4", Selection::Exit)]
    #[case("exit", Selection::Exit)]
    fn menu_answers_map_to_selections(#[case] input: &str, #[case] expected: Selection) {
        assert_eq!(Selection::from_menu_answer(input).unwrap(), expected);
    }

    #[test]
    fn menu_rejects_out_of_range_choice() {
        assert!(Selection::from_menu_answer("5").is_err());
        assert!(Selection::from_menu_answer("").is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ContentType::Playlist).unwrap(),
            "\"playlist\""
        );
    }
}
