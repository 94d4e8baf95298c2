//! Live adapter for the `LlmClient` port using an OpenAI-compatible
//! chat-completions API (Groq by default).

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ConfigError;
use crate::ports::llm::{CompletionRequest, CompletionResponse, LlmClient, LlmFuture};
use crate::ports::PortError;

/// Live LLM client that posts to a chat-completions endpoint.
pub struct LiveLlmClient {
    client: Client,
    api_url: String,
    api_key: Option<String>,
}

impl LiveLlmClient {
    /// Creates a client for `api_url`. A missing key fails each call, not
    /// construction, so commands that never call the model still work.
    #[must_use]
    pub fn new(api_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self { client: Client::new(), api_url: api_url.into(), api_key }
    }
}

/// Request body sent to the chat-completions API.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// A single message in the chat request.
#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Top-level chat-completions response.
#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Token usage reported by the API.
#[derive(Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

/// Error body returned by the API.
#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

fn chat_body(request: &CompletionRequest) -> ChatRequest<'_> {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = &request.system {
        messages.push(ChatMessage { role: "system", content: system });
    }
    messages.push(ChatMessage { role: "user", content: &request.prompt });
    ChatRequest {
        model: &request.model,
        messages,
        max_tokens: request.max_tokens,
        temperature: request.temperature,
    }
}

/// Turns an HTTP status and body into a completion.
///
/// A response with missing or empty message content yields `"{}"`, which downstream
/// parsing treats as "no tasks".
fn parse_chat_response(status: StatusCode, body: &str) -> Result<CompletionResponse, PortError> {
    if !status.is_success() {
        let msg = serde_json::from_str::<ApiError>(body)
            .map_or_else(|_| body.to_string(), |e| e.error.message);
        return Err(format!("LLM API error ({}): {msg}", status.as_u16()).into());
    }

    let parsed: ChatResponse = serde_json::from_str(body)
        .map_err(|e| format!("Failed to parse LLM API response: {e}"))?;

    let text = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|content| !content.is_empty())
        .unwrap_or_else(|| "{}".to_string());
    let (prompt_tokens, completion_tokens) =
        parsed.usage.map_or((0, 0), |u| (u.prompt_tokens, u.completion_tokens));

    Ok(CompletionResponse { text, prompt_tokens, completion_tokens })
}

impl LlmClient for LiveLlmClient {
    fn complete(&self, request: &CompletionRequest) -> LlmFuture<'_> {
        let request = request.clone();

        Box::pin(async move {
            let api_key = self.api_key.as_deref().ok_or(ConfigError::MissingApiKey)?;

            debug!(url = %self.api_url, model = %request.model, "calling LLM");
            let response = self
                .client
                .post(&self.api_url)
                .bearer_auth(api_key)
                .json(&chat_body(&request))
                .send()
                .await
                .map_err(|e| -> PortError { format!("LLM API request failed: {e}").into() })?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| -> PortError { format!("Failed to read LLM API response: {e}").into() })?;

            if !status.is_success() {
                warn!(status = status.as_u16(), "LLM API returned an error");
            }
            parse_chat_response(status, &body)
        })
    }
}
