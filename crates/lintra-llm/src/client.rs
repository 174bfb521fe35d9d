//! HTTP client for the external suggestion service.
//!
//! The service is an opaque collaborator: we send it the language and code,
//! and merge whatever suggestion list comes back. Every fault — timeout,
//! auth failure, malformed body — degrades to an empty list so the overall
//! report is never blocked on the collaborator.

use crate::config::LlmConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use lintra_core::RawSuggestion;
use serde::{Deserialize, Serialize};

const SYSTEM_PROMPT: &str = "You are a code review expert. Analyze the following code and \
    provide suggestions and best practices as a JSON array of objects with fields: kind \
    (\"suggestion\" or \"best_practice\"), line, message, severity, suggested_fix, reference.";

/// Source of raw suggestions for the style and best-practice categories.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Produce suggestions for a code submission.
    ///
    /// Infallible by contract: implementations degrade any internal fault
    /// to an empty list.
    async fn suggest(&self, language: &str, code: &str) -> Vec<RawSuggestion>;
}

/// Chat-completion request body.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

/// Chat-completion response body (only the fields we read).
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: String,
}

/// Reqwest-backed suggestion service client.
#[derive(Debug, Clone)]
pub struct SuggestionClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl SuggestionClient {
    /// Create a client from explicit configuration.
    pub fn new(config: LlmConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("lintra/{}", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client, config })
    }

    /// Fallible request path; `suggest` wraps this with degradation.
    async fn request_suggestions(&self, language: &str, code: &str) -> Result<Vec<RawSuggestion>> {
        let api_key = self.config.api_key.as_deref().ok_or(Error::MissingApiKey)?;

        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("Language: {language}\n\nCode:\n{code}"),
                },
            ],
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::BadStatus(response.status()));
        }

        let reply: ChatResponse = response.json().await?;
        let content = reply
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(Error::EmptyResponse);
        }

        Ok(parse_content(content))
    }
}

#[async_trait]
impl SuggestionProvider for SuggestionClient {
    async fn suggest(&self, language: &str, code: &str) -> Vec<RawSuggestion> {
        match self.request_suggestions(language, code).await {
            Ok(suggestions) => {
                tracing::debug!(count = suggestions.len(), "suggestion service replied");
                suggestions
            }
            Err(err) => {
                tracing::warn!(error = %err, "suggestion service unavailable, continuing without it");
                Vec::new()
            }
        }
    }
}

/// Parse reply content into raw suggestions.
///
/// Accepts a JSON array of suggestion objects (optionally inside a Markdown
/// code fence); anything else is treated as plain text, one suggestion per
/// non-empty line.
fn parse_content(content: &str) -> Vec<RawSuggestion> {
    let trimmed = strip_code_fence(content.trim());

    if let Ok(parsed) = serde_json::from_str::<Vec<RawSuggestion>>(trimmed) {
        return parsed;
    }

    trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| RawSuggestion {
            message: line.to_string(),
            ..Default::default()
        })
        .collect()
}

/// Strip a surrounding Markdown code fence, if present.
fn strip_code_fence(content: &str) -> &str {
    let Some(rest) = content.strip_prefix("```") else {
        return content;
    };
    // Drop the language tag on the opening fence line
    let rest = rest.split_once('\n').map(|(_, body)| body).unwrap_or(rest);
    rest.strip_suffix("```").map(str::trim_end).unwrap_or(rest)
}
