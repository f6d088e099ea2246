pub mod init;
pub mod quiz;
pub mod summarize;
pub mod video_id;

use anyhow::{Context, Result};

use tubequiz_core::progress::{ProgressReporter, Stage};
use tubequiz_core::transcript::{CookieFile, Transcript, TranscriptSource};
use tubequiz_core::video::extract_video_id;
use tubequiz_providers::youtube::YoutubeTranscriptSource;
use tubequiz_providers::TubequizConfig;

/// Resolve `url` to a video and fetch its transcript with the configured cookies.
pub(crate) async fn fetch_transcript(
    url: &str,
    config: &TubequizConfig,
    progress: &dyn ProgressReporter,
) -> Result<Transcript> {
    let video_id = extract_video_id(url)?;
    let cookies = CookieFile::load(&config.cookie_path)?;

    progress.on_stage(Stage::FetchingTranscript);
    let source = YoutubeTranscriptSource::new(config.transcript_languages.clone());
    let transcript = source
        .fetch_transcript(&video_id, &cookies)
        .await
        .with_context(|| format!("failed to fetch transcript for {}", video_id.watch_url()))?;

    anyhow::ensure!(
        !transcript.text.trim().is_empty(),
        "transcript for {video_id} is empty"
    );
    Ok(transcript)
}
