//! Configuration loading and client factory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tubequiz_core::quiz::DEFAULT_QUIZ_MODEL;
use tubequiz_core::summarizer::DEFAULT_SUMMARY_MODEL;
use tubequiz_core::traits::CompletionClient;

use crate::error::ConfigError;
use crate::openai::OpenAiClient;

pub const API_KEY_ENV: &str = "GROQ_API_KEY";
pub const BASE_URL_ENV: &str = "GROQ_BASE_URL";
pub const COOKIE_PATH_ENV: &str = "COOKIE_PATH";

/// Top-level tubequiz configuration.
///
/// Note: Custom Debug impl masks the API key to prevent accidental exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
pub struct TubequizConfig {
    /// API key for the completion endpoint. Usually `${GROQ_API_KEY}`.
    #[serde(default)]
    pub api_key: String,
    /// Endpoint root; `/v1/chat/completions` is appended.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Netscape-format cookie export used for transcript requests.
    #[serde(default = "default_cookie_path")]
    pub cookie_path: PathBuf,
    #[serde(default = "default_summary_model")]
    pub summary_model: String,
    #[serde(default = "default_quiz_model")]
    pub quiz_model: String,
    /// Language the summary is written in.
    #[serde(default = "default_language_code")]
    pub language_code: String,
    /// Preferred caption languages, in order.
    #[serde(default = "default_transcript_languages")]
    pub transcript_languages: Vec<String>,
    #[serde(default = "default_num_questions")]
    pub num_questions: usize,
}

impl std::fmt::Debug for TubequizConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let api_key = if self.api_key.is_empty() { "" } else { "***" };
        f.debug_struct("TubequizConfig")
            .field("api_key", &api_key)
            .field("base_url", &self.base_url)
            .field("cookie_path", &self.cookie_path)
            .field("summary_model", &self.summary_model)
            .field("quiz_model", &self.quiz_model)
            .field("language_code", &self.language_code)
            .field("transcript_languages", &self.transcript_languages)
            .field("num_questions", &self.num_questions)
            .finish()
    }
}

fn default_cookie_path() -> PathBuf {
    PathBuf::from("cookies.txt")
}
fn default_summary_model() -> String {
    DEFAULT_SUMMARY_MODEL.to_string()
}
fn default_quiz_model() -> String {
    DEFAULT_QUIZ_MODEL.to_string()
}
fn default_language_code() -> String {
    "en".to_string()
}
fn default_transcript_languages() -> Vec<String> {
    vec!["en".to_string()]
}
fn default_num_questions() -> usize {
    10
}

impl Default for TubequizConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: None,
            cookie_path: default_cookie_path(),
            summary_model: default_summary_model(),
            quiz_model: default_quiz_model(),
            language_code: default_language_code(),
            transcript_languages: default_transcript_languages(),
            num_questions: default_num_questions(),
        }
    }
}

impl TubequizConfig {
    /// The API key, or [`ConfigError::MissingApiKey`] if none is set.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        let key = self.api_key.trim();
        if key.is_empty() {
            Err(ConfigError::MissingApiKey)
        } else {
            Ok(key)
        }
    }

    /// Overlay environment settings; `lookup` returns a variable's value.
    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty(API_KEY_ENV) {
            self.api_key = key;
        }
        if let Some(url) = non_empty(BASE_URL_ENV) {
            self.base_url = Some(url);
        }
        if let Some(path) = non_empty(COOKIE_PATH_ENV) {
            self.cookie_path = PathBuf::from(path);
        }
    }

    /// Replace `${VAR}` references in string fields.
    fn resolve_references(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        self.api_key = resolve_env_vars(&self.api_key, &lookup);
        self.base_url = self
            .base_url
            .as_deref()
            .map(|u| resolve_env_vars(u, &lookup))
            .filter(|u| !u.is_empty());
        let cookie_path = resolve_env_vars(&self.cookie_path.to_string_lossy(), &lookup);
        self.cookie_path = PathBuf::from(cookie_path);
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str, lookup: &impl Fn(&str) -> Option<String>) -> String {
    let mut result = s.to_string();
    let mut from = 0;
    while let Some(offset) = result[from..].find("${") {
        let start = from + offset;
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let var_name = &result[start + 2..start + end];
        let value = lookup(var_name).unwrap_or_default();
        result = format!("{}{}{}", &result[..start], value, &result[start + end + 1..]);
        from = start + value.len();
    }
    result
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `tubequiz.toml` in the current directory
/// 2. `~/.config/tubequiz/config.toml`
///
/// Environment variable overrides: `GROQ_API_KEY`, `GROQ_BASE_URL`, `COOKIE_PATH`.
pub fn load_config() -> Result<TubequizConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<TubequizConfig> {
    load_config_with(path, env_lookup)
}

fn load_config_with(
    path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<TubequizConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => return Err(ConfigError::FileNotFound(p.to_path_buf()).into()),
        None => {
            let local = PathBuf::from("tubequiz.toml");
            if local.exists() {
                Some(local)
            } else {
                lookup("HOME")
                    .map(|h| global_config_path(Path::new(&h)))
                    .filter(|p| p.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<TubequizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => TubequizConfig::default(),
    };

    config.resolve_references(&lookup);
    config.apply_env_overrides(&lookup);

    Ok(config)
}

fn global_config_path(home: &Path) -> PathBuf {
    home.join(".config").join("tubequiz").join("config.toml")
}

/// Create the completion client described by `config`.
pub fn create_client(config: &TubequizConfig) -> Result<Arc<dyn CompletionClient>, ConfigError> {
    let api_key = config.require_api_key()?;
    Ok(Arc::new(OpenAiClient::new(api_key, config.base_url.clone())))
}

/// Starter config written by `tubequiz init`.
pub const STARTER_CONFIG: &str = r#"# tubequiz configuration

# API key for the OpenAI-compatible endpoint (Groq by default).
api_key = "${GROQ_API_KEY}"

# Endpoint root; "/v1/chat/completions" is appended.
# base_url = "https://api.groq.com/openai"

# Netscape-format YouTube cookie export.
cookie_path = "cookies.txt"

summary_model = "llama-3.1-8b-instant"
quiz_model = "llama-3.1-8b-instant"

# Language of the generated summary.
language_code = "en"

# Preferred caption languages, in order.
transcript_languages = ["en"]

num_questions = 10
"#;
