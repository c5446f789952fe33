//! Configuration for the prompt pipeline
//!
//! Values are resolved once at startup: embedded defaults, then an optional
//! TOML file, then environment overrides. The resolved [`PipelineConfig`] is
//! passed down explicitly; nothing below the binary reads the environment.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "veo-prompts.toml";

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_ENV: &str = "VEO_PROMPTS_CONFIG";

/// Main pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PipelineConfig {
    /// Input document and paragraph cap
    pub input: InputConfig,
    /// Output file locations
    pub output: OutputConfig,
    /// Remote LLM configuration
    pub llm: LlmConfig,
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path to a .docx or UTF-8 text file
    pub path: PathBuf,
    /// Process only the first N paragraphs (None or 0 = all)
    pub max_paragraphs: Option<usize>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("input.docx"),
            max_paragraphs: None,
        }
    }
}

impl InputConfig {
    /// Effective cap; a cap of zero means no cap
    pub fn limit(&self) -> Option<usize> {
        self.max_paragraphs.filter(|&n| n > 0)
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Plain-text report path
    pub txt_path: PathBuf,
    /// Two-column CSV path
    pub csv_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            txt_path: PathBuf::from("video_prompts.txt"),
            csv_path: PathBuf::from("video_prompts.csv"),
        }
    }
}

/// LLM (OpenRouter) configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// OpenAI-compatible base URL
    pub base_url: String,
    /// Bearer API key (required, no default)
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Output length cap in tokens
    pub max_tokens: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Sent as HTTP-Referer when non-empty
    pub site_url: String,
    /// Sent as X-Title when non-empty
    pub site_name: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            api_key: String::new(),
            model: "openai/gpt-4o".to_string(),
            temperature: 0.7,
            max_tokens: 200,
            timeout_secs: 120,
            site_url: String::new(),
            site_name: "Video Prompt Generator".to_string(),
        }
    }
}

// Keep the key out of logs.
impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .field("site_url", &self.site_url)
            .field("site_name", &self.site_name)
            .finish()
    }
}

impl PipelineConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Ok(toml::from_str(&raw)?)
    }

    /// Resolve configuration from defaults, config file and process environment
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn load() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }

        let explicit = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
        let mut config = match explicit {
            Some(path) => Self::from_file(&path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("OPENROUTER_API_KEY") {
            self.llm.api_key = key.trim().to_string();
        }
        if let Some(url) = lookup("OPENROUTER_BASE_URL") {
            self.llm.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = lookup("SITE_URL") {
            self.llm.site_url = url;
        }
        if let Some(name) = lookup("SITE_NAME") {
            self.llm.site_name = name;
        }
        if let Some(path) = lookup("VEO_INPUT_FILE") {
            self.input.path = PathBuf::from(path);
        }
        if let Some(path) = lookup("VEO_OUTPUT_TXT") {
            self.output.txt_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("VEO_OUTPUT_CSV") {
            self.output.csv_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup("VEO_MAX_PARAGRAPHS") {
            self.input.max_paragraphs = parse_cap(&raw)?;
        }
        Ok(())
    }

    /// Fail with [`Error::MissingCredential`] when no API key is configured
    pub fn validate_credential(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            return Err(Error::MissingCredential(
                "OPENROUTER_API_KEY is not set".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_cap(raw: &str) -> Result<Option<usize>> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    raw.parse::<usize>()
        .map(|n| if n == 0 { None } else { Some(n) })
        .map_err(|_| Error::config(format!("VEO_MAX_PARAGRAPHS must be a number or 'all', got '{}'", raw)))
}
