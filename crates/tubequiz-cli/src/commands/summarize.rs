//! The `tubequiz summarize` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use tubequiz_core::progress::{ProgressReporter, Stage};
use tubequiz_core::summarizer::{Summarizer, SummarizerConfig};
use tubequiz_providers::{create_client, load_config_from};

use crate::reporter::ConsoleReporter;

pub async fn execute(
    url: String,
    language: Option<String>,
    model: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let client = create_client(&config)?;
    let reporter = ConsoleReporter;

    let transcript = super::fetch_transcript(&url, &config, &reporter).await?;

    let language = language.unwrap_or_else(|| config.language_code.clone());
    let model = model.unwrap_or_else(|| config.summary_model.clone());
    tracing::debug!(%language, %model, "summarizing");

    let summarizer = Summarizer::new(client, SummarizerConfig::default());
    let summary = summarizer
        .summarize(&transcript.text, &language, &model, &reporter)
        .await
        .context("summarization failed")?;
    reporter.on_stage(Stage::Done);

    println!("{summary}");
    Ok(())
}
