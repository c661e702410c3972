//! Client for an OpenAI-compatible chat-completions API.
//!
//! Used only for delegated document summaries. Every failure path returns an
//! error; the fallback to the template summary happens one layer up, in
//! `analysis::summary`.

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::domain::DocumentMetrics;

/// Document text beyond this many characters is not sent to the API.
const EXCERPT_CHARS: usize = 4000;

const SYSTEM_PROMPT: &str = "You are a real estate document analyst. Summarize key findings \
     in 2-3 sentences, highlighting risk, rent, and compliance indicators.";

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl LlmClient {
    pub fn new(base_url: &str, api_key: &str, model: &str, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        tracing::info!(base_url = base_url, model = model, "LLM client initialized");

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    /// One bounded round-trip, no retries.
    pub async fn summarize_document(
        &self,
        text: &str,
        file_name: &str,
        metrics: &DocumentMetrics,
    ) -> Result<String> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let excerpt = truncate_chars(text, EXCERPT_CHARS);

        let user_prompt = format!(
            "Analyze this document ({file_name}):\n\n{excerpt}...\n\nKey metrics: {} clauses, \
             {}% compliance, Rent: {}, Expiring soon: {}",
            metrics.total_clauses,
            metrics.compliance_score,
            metrics.rent_amount,
            metrics.expiring_soon,
        );

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            max_tokens: 150,
            temperature: 0.7,
        };

        debug!(url = %url, file_name = %file_name, "Requesting delegated summary");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Summarization request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("Summarization request returned status {status}");
        }

        let body: ChatResponse = response
            .json()
            .await
            .context("Invalid summarization response")?;

        body.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|s| !s.trim().is_empty())
            .context("Summarization response contained no content")
    }
}

/// Char-safe prefix of at most `max` characters.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 2), "he");
        // Multi-byte chars must not be split
        assert_eq!(truncate_chars("héllo", 2), "hé");
    }
}
