//! OpenRouter chat-completions client
//!
//! Speaks the OpenAI-compatible `/chat/completions` API with bearer auth and
//! OpenRouter's optional attribution headers. One request per call, no retry.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::LlmConfig;
use crate::error::{Error, Result};
use crate::generation::{ChatMessage, PromptBuilder};

use super::llm::LlmProvider;

/// OpenRouter API client
pub struct OpenRouterClient {
    /// HTTP client with auth and attribution headers preset
    client: Client,
    /// Configuration
    config: LlmConfig,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenRouterClient {
    /// Create a new client; fails on an empty key or a header value that is not valid ASCII
    pub fn new(config: &LlmConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::MissingCredential(
                "OpenRouter API key is empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(Self::default_headers(config)?)
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn default_headers(config: &LlmConfig) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key.trim()))
            .map_err(|e| Error::config(format!("invalid API key: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        if !config.site_url.is_empty() {
            let value = HeaderValue::from_str(&config.site_url)
                .map_err(|e| Error::config(format!("invalid SITE_URL: {}", e)))?;
            headers.insert("http-referer", value);
        }
        if !config.site_name.is_empty() {
            let value = HeaderValue::from_str(&config.site_name)
                .map_err(|e| Error::config(format!("invalid SITE_NAME: {}", e)))?;
            headers.insert("x-title", value);
        }

        Ok(headers)
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    pub(crate) fn build_request(&self, paragraph: &str) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: PromptBuilder::build_messages(paragraph),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }
}

/// Pull the first choice's text out of a response body
fn extract_content(body: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| Error::llm(format!("Failed to parse completion response: {}", e)))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|text| text.trim().to_string())
        .ok_or_else(|| Error::llm("No text in completion response"))
}

#[async_trait]
impl LlmProvider for OpenRouterClient {
    async fn generate_prompt(&self, paragraph: &str) -> Result<String> {
        let request = self.build_request(paragraph);

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::llm(format!("Completion request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::llm(format!("Failed to read completion response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::llm(format!("Completion failed: HTTP {} - {}", status, body)));
        }

        extract_content(&body)
    }

    fn name(&self) -> &str {
        "openrouter"
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}
