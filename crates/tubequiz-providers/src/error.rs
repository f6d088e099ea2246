//! Provider error types.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration problems that stop a command before it does any work.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No API key in the config file or the environment.
    #[error("no API key configured; set GROQ_API_KEY or `api_key` in tubequiz.toml")]
    MissingApiKey,

    /// An explicitly requested config file does not exist.
    #[error("config file not found: {}", .0.display())]
    FileNotFound(PathBuf),
}
