//! Episode feed loading
//!
//! A feed is a JSON array of episode objects:
//! `[{ "title", "members", "thumbnail", "duration", "url" }, ...]`.

use crate::error::{CliError, Result};
use podplayer_playback::Episode;
use std::path::Path;

/// Parse a feed document
pub fn parse_feed(json: &str) -> Result<Vec<Episode>> {
    let episodes: Vec<Episode> = serde_json::from_str(json)?;
    if episodes.is_empty() {
        return Err(CliError::EmptyFeed);
    }
    Ok(episodes)
}

/// Read and parse a feed file
pub fn load_feed(path: &Path) -> Result<Vec<Episode>> {
    let json = std::fs::read_to_string(path).map_err(|source| CliError::FeedRead {
        path: path.to_path_buf(),
        source,
    })?;

    let episodes = parse_feed(&json)?;
    tracing::debug!(path = %path.display(), episodes = episodes.len(), "Loaded feed");
    Ok(episodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_episode_array() {
        let json = r#"[
            {"title": "One", "members": "A, B", "thumbnail": "/t/1.jpg", "duration": 90, "url": "/m/1.mp3"},
            {"title": "Two", "thumbnail": "/t/2.jpg", "duration": 30, "url": "https://cdn.example.com/2.mp3"}
        ]"#;

        let episodes = parse_feed(json).unwrap();
        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[0].title(), "One");
        assert_eq!(episodes[1].members(), "");
        assert_eq!(episodes[1].duration_secs(), 30);
    }

    #[test]
    fn rejects_empty_feed() {
        assert!(matches!(parse_feed("[]"), Err(CliError::EmptyFeed)));
    }

    #[test]
    fn rejects_invalid_episode() {
        let json = r#"[{"title": "", "thumbnail": "/t.jpg", "duration": 1, "url": "/m.mp3"}]"#;
        assert!(matches!(parse_feed(json), Err(CliError::FeedParse(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_feed(Path::new("/nonexistent/feed.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/feed.json"));
    }
}
