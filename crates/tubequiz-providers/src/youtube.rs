//! YouTube transcript source backed by `yt-transcript-rs`.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::instrument;
use yt_transcript_rs::api::YouTubeTranscriptApi;
use yt_transcript_rs::errors::{CouldNotRetrieveTranscript, CouldNotRetrieveTranscriptReason};
use yt_transcript_rs::transcript::Transcript as Track;
use yt_transcript_rs::transcript_list::TranscriptList;

use tubequiz_core::transcript::{CookieFile, Transcript, TranscriptError, TranscriptSource};
use tubequiz_core::video::VideoId;

/// Fetches caption tracks from YouTube using an exported cookie file.
#[derive(Debug, Clone)]
pub struct YoutubeTranscriptSource {
    languages: Vec<String>,
}

impl YoutubeTranscriptSource {
    /// `languages` are tried in order. When none of them has a track,
    /// the first track the video lists is used instead.
    pub fn new(languages: Vec<String>) -> Self {
        let languages = if languages.is_empty() {
            vec!["en".to_string()]
        } else {
            languages
        };
        Self { languages }
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }
}

/// Join caption snippets into one line of prose.
fn join_snippets<'a>(snippets: impl IntoIterator<Item = &'a str>) -> String {
    snippets
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pick the language code of the track to fetch.
///
/// Preferred codes win in order. Otherwise manual tracks beat generated
/// ones, and ties go to the smallest code so the choice is stable.
fn select_language(list: &TranscriptList, preferred: &[String]) -> Option<String> {
    fn first_code(tracks: &HashMap<String, Track>) -> Option<String> {
        tracks.keys().min().cloned()
    }

    preferred
        .iter()
        .find(|code| {
            list.manually_created_transcripts.contains_key(code.as_str())
                || list.generated_transcripts.contains_key(code.as_str())
        })
        .cloned()
        .or_else(|| first_code(&list.manually_created_transcripts))
        .or_else(|| first_code(&list.generated_transcripts))
}

/// Sort a library failure into "nothing to fetch" and "YouTube refused us".
fn classify_failure(video_id: &VideoId, err: CouldNotRetrieveTranscript) -> TranscriptError {
    use CouldNotRetrieveTranscriptReason as Reason;

    let video_id = video_id.to_string();
    let reason = err.to_string();
    match err.reason {
        Some(
            Reason::TranscriptsDisabled
            | Reason::NoTranscriptFound { .. }
            | Reason::VideoUnavailable
            | Reason::InvalidVideoId,
        ) => TranscriptError::Unavailable { video_id, reason },
        _ => TranscriptError::Authentication { video_id, reason },
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscriptSource {
    #[instrument(skip(self, cookies), fields(video_id = %video_id))]
    async fn fetch_transcript(
        &self,
        video_id: &VideoId,
        cookies: &CookieFile,
    ) -> Result<Transcript, TranscriptError> {
        let api = YouTubeTranscriptApi::new(Some(cookies.path()), None, None).map_err(|e| {
            TranscriptError::Authentication {
                video_id: video_id.to_string(),
                reason: e.to_string(),
            }
        })?;

        let code = {
            let list = api
                .list_transcripts(video_id.as_str())
                .await
                .map_err(|e| classify_failure(video_id, e))?;
            select_language(&list, &self.languages).ok_or_else(|| {
                TranscriptError::Unavailable {
                    video_id: video_id.to_string(),
                    reason: "the video lists no caption tracks".to_string(),
                }
            })?
        };
        if !self.languages.contains(&code) {
            tracing::info!(
                language = %code,
                preferred = ?self.languages,
                "no preferred caption track, using the first listed one"
            );
        }

        let fetched = api
            .fetch_transcript(video_id.as_str(), &[code.as_str()], false)
            .await
            .map_err(|e| {
                let err = classify_failure(video_id, e);
                tracing::warn!(error = %err, "transcript fetch failed");
                err
            })?;

        let text = join_snippets(fetched.snippets.iter().map(|s| s.text.as_str()));
        tracing::info!(
            language = %fetched.language_code,
            snippets = fetched.snippets.len(),
            chars = text.len(),
            "transcript fetched"
        );

        Ok(Transcript {
            video_id: video_id.clone(),
            text,
            language_code: fetched.language_code,
        })
    }
}
