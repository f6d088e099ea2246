//! Transcript types and the source trait implemented by `tubequiz-providers`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::video::VideoId;

/// A fetched transcript, flattened to plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub video_id: VideoId,
    pub text: String,
    /// Language code of the track the text came from (e.g. "en").
    pub language_code: String,
}

/// Reasons a transcript could not be obtained. Each has its own message
/// because each has a different fix.
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("cookie file not found at {0}; export your YouTube cookies to this path")]
    CookieFileMissing(PathBuf),

    #[error("cookie file {0} is empty; re-export your YouTube cookies")]
    CookieFileEmpty(PathBuf),

    #[error("failed to read cookie file {path}: {source}")]
    CookieFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no transcript available for video {video_id} ({reason}); your YouTube cookies may have expired, re-export them and try again")]
    Unavailable { video_id: String, reason: String },

    #[error("authentication with YouTube failed for video {video_id} ({reason}); update your cookies.txt with a fresh export")]
    Authentication { video_id: String, reason: String },
}

/// A cookie file that exists and is not empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieFile {
    path: PathBuf,
}

impl CookieFile {
    /// Check that `path` holds a non-empty cookie export.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, TranscriptError> {
        let path = path.into();
        if !path.exists() {
            return Err(TranscriptError::CookieFileMissing(path));
        }

        let content = std::fs::read_to_string(&path).map_err(|source| {
            TranscriptError::CookieFileUnreadable {
                path: path.clone(),
                source,
            }
        })?;
        if content.trim().is_empty() {
            return Err(TranscriptError::CookieFileEmpty(path));
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Somewhere transcripts come from.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch_transcript(
        &self,
        video_id: &VideoId,
        cookies: &CookieFile,
    ) -> Result<Transcript, TranscriptError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cookie_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CookieFile::load(dir.path().join("cookies.txt")).unwrap_err();
        assert!(matches!(err, TranscriptError::CookieFileMissing(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn empty_cookie_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.txt");
        std::fs::write(&path, "  \n\t").unwrap();

        let err = CookieFile::load(&path).unwrap_err();
        assert!(matches!(err, TranscriptError::CookieFileEmpty(_)));
        assert!(err.to_string().contains("re-export"));
    }

    #[test]
    fn valid_cookie_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.txt");
        std::fs::write(&path, "# Netscape HTTP Cookie File\n.youtube.com\tTRUE\t/\n").unwrap();

        let cookies = CookieFile::load(&path).unwrap();
        assert_eq!(cookies.path(), path.as_path());
    }

    #[test]
    fn unavailable_and_authentication_messages_differ() {
        let unavailable = TranscriptError::Unavailable {
            video_id: "dQw4w9WgXcQ".into(),
            reason: "transcripts disabled".into(),
        }
        .to_string();
        assert!(unavailable.contains("no transcript available for video dQw4w9WgXcQ"));
        assert!(unavailable.contains("cookies may have expired"));

        let auth = TranscriptError::Authentication {
            video_id: "dQw4w9WgXcQ".into(),
            reason: "request blocked".into(),
        }
        .to_string();
        assert!(auth.contains("authentication with YouTube failed"));
        assert!(auth.contains("request blocked"));
        assert!(auth.contains("update your cookies.txt"));
        assert!(!auth.contains("no transcript available"));
    }
}
