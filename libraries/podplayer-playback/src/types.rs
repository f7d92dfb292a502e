//! Core types for playback state

use crate::error::EpisodeError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// A playable podcast episode
///
/// Validated at construction; every `Episode` in a queue has a title and
/// well-formed media and artwork URIs. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EpisodeFields", into = "EpisodeFields")]
pub struct Episode {
    title: String,
    members: String,
    thumbnail: String,
    duration_secs: u32,
    url: String,
}

/// Wire shape of an episode, as found in feeds and JS payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EpisodeFields {
    title: String,
    #[serde(default)]
    members: String,
    thumbnail: String,
    duration: u32,
    url: String,
}

impl Episode {
    /// Build a validated episode
    pub fn new(
        title: impl Into<String>,
        members: impl Into<String>,
        thumbnail: impl Into<String>,
        duration_secs: u32,
        url: impl Into<String>,
    ) -> Result<Self, EpisodeError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(EpisodeError::EmptyTitle);
        }

        Ok(Self {
            title,
            members: members.into(),
            thumbnail: validate_uri("thumbnail", thumbnail.into())?,
            duration_secs,
            url: validate_uri("url", url.into())?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Credits line (hosts and guests)
    pub fn members(&self) -> &str {
        &self.members
    }

    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    /// Advertised length in whole seconds
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_secs))
    }

    /// Media URI handed to the audio element
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl TryFrom<EpisodeFields> for Episode {
    type Error = EpisodeError;

    fn try_from(fields: EpisodeFields) -> Result<Self, Self::Error> {
        Episode::new(
            fields.title,
            fields.members,
            fields.thumbnail,
            fields.duration,
            fields.url,
        )
    }
}

impl From<Episode> for EpisodeFields {
    fn from(episode: Episode) -> Self {
        Self {
            title: episode.title,
            members: episode.members,
            thumbnail: episode.thumbnail,
            duration: episode.duration_secs,
            url: episode.url,
        }
    }
}

/// Accept absolute URLs and root-relative paths (`/media/ep1.mp3`)
fn validate_uri(field: &'static str, value: String) -> Result<String, EpisodeError> {
    let trimmed = value.trim();
    let valid = if trimmed.starts_with('/') {
        !trimmed.chars().any(char::is_whitespace)
    } else {
        Url::parse(trimmed).is_ok()
    };

    if valid {
        Ok(trimmed.to_string())
    } else {
        Err(EpisodeError::InvalidUri { field, value })
    }
}

/// Initial flags for a new playback store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Start with loop enabled (default: false)
    pub looping: bool,

    /// Start with shuffle enabled (default: false)
    pub shuffling: bool,

    /// Start with the player panel expanded (default: false)
    pub panel_expanded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert!(!config.looping);
        assert!(!config.shuffling);
        assert!(!config.panel_expanded);
    }

    #[test]
    fn episode_creation() {
        let episode = Episode::new(
            "Faladev #30",
            "Diego e Richard",
            "https://cdn.example.com/thumb.jpg",
            3981,
            "https://cdn.example.com/ep30.mp3",
        )
        .unwrap();

        assert_eq!(episode.title(), "Faladev #30");
        assert_eq!(episode.members(), "Diego e Richard");
        assert_eq!(episode.duration_secs(), 3981);
        assert_eq!(episode.duration(), Duration::from_secs(3981));
    }

    #[test]
    fn root_relative_uris_accepted() {
        let episode = Episode::new("Local", "", "/thumbs/a.png", 10, "/media/a.mp3").unwrap();
        assert_eq!(episode.url(), "/media/a.mp3");
        assert_eq!(episode.thumbnail(), "/thumbs/a.png");
    }

    #[test]
    fn blank_title_rejected() {
        let err = Episode::new("   ", "", "/a.png", 10, "/a.mp3").unwrap_err();
        assert_eq!(err, EpisodeError::EmptyTitle);
    }

    #[test]
    fn malformed_url_rejected() {
        let err = Episode::new("Ep", "", "/a.png", 10, "not a url").unwrap_err();
        assert_eq!(
            err,
            EpisodeError::InvalidUri {
                field: "url",
                value: "not a url".to_string()
            }
        );

        let err = Episode::new("Ep", "", "", 10, "/a.mp3").unwrap_err();
        assert!(matches!(err, EpisodeError::InvalidUri { field: "thumbnail", .. }));
    }

    #[test]
    fn deserialize_validates() {
        let json = r#"{"title":"Ep","members":"A","thumbnail":"/t.png","duration":60,"url":"/e.mp3"}"#;
        let episode: Episode = serde_json::from_str(json).unwrap();
        assert_eq!(episode.duration_secs(), 60);

        let bad = r#"{"title":"","thumbnail":"/t.png","duration":60,"url":"/e.mp3"}"#;
        assert!(serde_json::from_str::<Episode>(bad).is_err());

        let negative = r#"{"title":"Ep","thumbnail":"/t.png","duration":-5,"url":"/e.mp3"}"#;
        assert!(serde_json::from_str::<Episode>(negative).is_err());
    }

    #[test]
    fn serializes_with_feed_field_names() {
        let episode = Episode::new("Ep", "A", "/t.png", 60, "/e.mp3").unwrap();
        let value = serde_json::to_value(&episode).unwrap();
        assert_eq!(value["duration"], 60);
        assert_eq!(value["url"], "/e.mp3");
    }
}
