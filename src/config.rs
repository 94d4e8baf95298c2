//! Runtime configuration resolved from the environment.
//!
//! Values come from process environment variables, optionally seeded from a
//! `.env` file in the working directory. Empty values count as unset.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Default store directory, relative to the working directory.
pub const DEFAULT_STORE_DIR: &str = ".axis";
/// Default OpenAI-compatible chat completions endpoint.
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// Default model used for task extraction.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Extraction needs an API key and none was configured.
    #[error("GROQ_API_KEY is not set (export it or add it to .env)")]
    MissingApiKey,
}

/// Resolved configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root directory of the task store (`AXIS_STORE`).
    pub store_root: PathBuf,
    /// API key for the completions endpoint (`GROQ_API_KEY`).
    pub api_key: Option<String>,
    /// Completions endpoint (`GROQ_API_URL`).
    pub api_url: String,
    /// Model id (`AXIS_MODEL`).
    pub model: String,
    /// When set, port interactions are recorded into this directory (`AXIS_RECORD`).
    pub record_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_root: PathBuf::from(DEFAULT_STORE_DIR),
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            record_dir: None,
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            store_root: get("AXIS_STORE").map_or(defaults.store_root, PathBuf::from),
            api_key: get("GROQ_API_KEY"),
            api_url: get("GROQ_API_URL").unwrap_or(defaults.api_url),
            model: get("AXIS_MODEL").unwrap_or(defaults.model),
            record_dir: get("AXIS_RECORD").map(PathBuf::from),
        }
    }
}
