//! YouTube video ID extraction.
//!
//! Accepts standard `watch?v=` links, embed links, `youtu.be` short links,
//! Shorts links and bare 11-character IDs.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Patterns tried in order; the first capture wins.
static VIDEO_ID_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:v=|/)([0-9A-Za-z_-]{11})",
        r"embed/([0-9A-Za-z_-]{11})",
        r"youtu\.be/([0-9A-Za-z_-]{11})",
        r"shorts/([0-9A-Za-z_-]{11})",
        r"^([0-9A-Za-z_-]{11})$",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("video id pattern must compile"))
    .collect()
});

/// No recognised URL shape matched the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not extract a video ID from {input:?}; check the link and try again")]
pub struct UrlParseError {
    pub input: String,
}

/// An 11-character YouTube video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch URL for this video.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VideoId {
    type Err = UrlParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        extract_video_id(s)
    }
}

/// Extract the video ID from a URL or a bare ID.
pub fn extract_video_id(input: &str) -> Result<VideoId, UrlParseError> {
    let trimmed = input.trim();

    VIDEO_ID_PATTERNS
        .iter()
        .find_map(|re| re.captures(trimmed).and_then(|cap| cap.get(1)))
        .map(|m| VideoId(m.as_str().to_string()))
        .ok_or_else(|| UrlParseError {
            input: trimmed.to_string(),
        })
}
