//! tubequiz-providers: Completion clients, transcript source and configuration.
//!
//! Implements `CompletionClient` for OpenAI-compatible chat endpoints (Groq
//! by default) and `TranscriptSource` for YouTube, and loads the settings
//! that wire them together.

pub mod config;
pub mod error;
pub mod mock;
pub mod openai;
pub mod youtube;

pub use config::{create_client, load_config, load_config_from, TubequizConfig};
pub use error::ConfigError;
