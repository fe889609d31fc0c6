//! Anthropic Messages API client.
//!
//! Single-turn request per story. The API key comes from the environment
//! and its absence aborts before any work starts.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::StoryProvider;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// HTTP client for the messages API.
pub struct AnthropicClient {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

/// Response envelope (only the fields we read).
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,

    #[serde(default)]
    text: String,
}

impl AnthropicClient {
    /// Create a client, reading the credential from the environment.
    ///
    /// Each request gets a hard timeout so a stuck call cannot occupy a
    /// worker slot forever.
    pub fn from_env(model: impl Into<String>, request_timeout: Duration) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .with_context(|| format!("{} not set", API_KEY_ENV))?;

        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            api_key,
            model: model.into(),
            client,
        })
    }
}

#[async_trait]
impl StoryProvider for AnthropicClient {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let response = self
            .client
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&serde_json::json!({
                "model": self.model,
                "max_tokens": MAX_TOKENS,
                "messages": [{ "role": "user", "content": prompt }],
            }))
            .send()
            .await
            .context("Failed to reach the messages API")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Messages API returned {}: {}", status, body.trim());
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .context("Failed to parse messages API response")?;

        let text = parsed
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .map(|block| block.text)
            .unwrap_or_default();

        if text.is_empty() {
            anyhow::bail!("Messages API response contained no text block");
        }

        Ok(text)
    }
}
