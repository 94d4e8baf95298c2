//! Task extraction: turning journal text into task strings with an LLM.
//!
//! The model is told to answer with a bare JSON array of strings. Responses
//! are still cleaned up: code fences are stripped, the old
//! `{"today": [...], "overall": [...]}` layout is flattened, and any other
//! JSON shape counts as "no tasks".

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::context::ServiceContext;
use crate::ports::CompletionRequest;
use crate::store::legacy;

/// Upper bound on tokens the model may generate for one extraction.
pub const MAX_TOKENS: u32 = 512;
/// Sampling temperature for extraction.
pub const TEMPERATURE: f32 = 0.2;

/// System instruction sent with every extraction request.
pub const SYSTEM_PROMPT: &str = "\
IMPORTANT: You must respond with ONLY a JSON array of strings. No other text. No markdown. Just JSON.

[\"Create a logo for Vynce with modern design\", \"Design landing page mockups\", \"Setup Firebase database\"]

User will provide journal text. Extract actionable tasks with full context and details.
Include WHO/WHAT/WHERE details to make each task clear and understandable when read later.
Keep tasks detailed but concise (one short sentence each).
Return an empty array if no tasks found. Return ONLY the JSON array, no other text.";

/// Errors raised while extracting tasks.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The journal text was blank.
    #[error("Write something first.")]
    EmptyJournal,

    /// The LLM call itself failed.
    #[error("Task extraction failed: {0}")]
    Llm(String),

    /// The model answered with something that is not JSON.
    #[error("Invalid AI response format: {raw}")]
    InvalidFormat {
        /// The cleaned response text.
        raw: String,
    },
}

/// Builds the completion request for `journal_text`.
#[must_use]
pub fn build_request(config: &Config, journal_text: &str) -> CompletionRequest {
    CompletionRequest {
        model: config.model.clone(),
        system: Some(SYSTEM_PROMPT.to_string()),
        prompt: journal_text.to_string(),
        max_tokens: MAX_TOKENS,
        temperature: Some(TEMPERATURE),
    }
}

/// Removes markdown code fences the model sometimes wraps its answer in.
fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json\n", "")
        .replace("```json", "")
        .replace("```\n", "")
        .replace("```", "")
        .trim()
        .to_string()
}

fn strings_of(items: Vec<Value>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(text) => Some(text),
            other => {
                warn!(item = %other, "skipping non-string task");
                None
            }
        })
        .collect()
}

/// Parses the model's answer into task strings.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidFormat`] if the cleaned answer is not JSON.
pub fn parse_tasks(raw: &str) -> Result<Vec<String>, ExtractError> {
    let cleaned = strip_code_fences(raw);
    let value: Value = serde_json::from_str(&cleaned)
        .map_err(|_| ExtractError::InvalidFormat { raw: cleaned.clone() })?;

    match value {
        Value::Array(items) => Ok(strings_of(items)),
        other => {
            if let Some(items) = legacy::flatten_buckets(&other) {
                info!("converting legacy task buckets in model response");
                Ok(strings_of(items))
            } else {
                warn!(response = %other, "model response is not a task list");
                Ok(Vec::new())
            }
        }
    }
}

/// Extracts task strings from `journal_text` with the context's LLM.
///
/// # Errors
///
/// Returns [`ExtractError::EmptyJournal`] for blank text,
/// [`ExtractError::Llm`] if the call fails and
/// [`ExtractError::InvalidFormat`] if the answer is not JSON.
pub async fn extract_tasks(
    ctx: &ServiceContext,
    config: &Config,
    journal_text: &str,
) -> Result<Vec<String>, ExtractError> {
    if journal_text.trim().is_empty() {
        return Err(ExtractError::EmptyJournal);
    }

    let request = build_request(config, journal_text);
    let response =
        ctx.llm.complete(&request).await.map_err(|e| ExtractError::Llm(e.to_string()))?;
    debug!(
        prompt_tokens = response.prompt_tokens,
        completion_tokens = response.completion_tokens,
        "extraction response received"
    );

    let tasks = parse_tasks(&response.text)?;
    info!(count = tasks.len(), "extracted tasks");
    Ok(tasks)
}
