// src/services/llm.rs
//! OpenAI-compatible chat-completions client used for cover letter generation

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info, warn};

use crate::common::config::AppConfig;

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    total_tokens: u32,
}

#[derive(Debug, Clone)]
pub struct LlmService {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl LlmService {
    const MAX_RETRIES: u32 = 3;

    pub fn new(client: Client, api_key: String, base_url: String, model: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
            model,
        }
    }

    /// Returns `None` when no API key is configured
    pub fn from_config(client: Client, config: &AppConfig) -> Option<Self> {
        let api_key = config.openai_api_key.clone()?;
        Some(Self::new(
            client,
            api_key,
            config.openai_base_url.clone(),
            config.openai_model.clone(),
        ))
    }

    /// Single-turn completion: one system message, one user message
    pub async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: Some(0.7),
        };

        let response = self.make_request_with_retry(&request).await?;

        if let Some(usage) = &response.usage {
            info!(
                model = %self.model,
                tokens_used = usage.total_tokens,
                "LLM completion finished"
            );
        }

        extract_content(response)
    }

    async fn make_request_with_retry(
        &self,
        request: &ChatCompletionRequest<'_>,
    ) -> Result<ChatCompletionResponse, LlmError> {
        let mut last_error = None;

        for attempt in 1..=Self::MAX_RETRIES {
            match self.make_request(request).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    warn!(
                        attempt = attempt,
                        max_retries = Self::MAX_RETRIES,
                        error = %e,
                        "LLM request failed, retrying..."
                    );
                    last_error = Some(e);

                    if attempt < Self::MAX_RETRIES {
                        let delay = Duration::from_millis(1000 * 2_u64.pow(attempt - 1));
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| LlmError::RequestFailed("Unknown error".to_string())))
    }

    async fn make_request(
        &self,
        request: &ChatCompletionRequest<'_>,
    ) -> Result<ChatCompletionResponse, LlmError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimitExceeded);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = %status, error = %error_text, "LLM API request failed");
            return Err(LlmError::RequestFailed(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))
    }
}

fn extract_content(response: ChatCompletionResponse) -> Result<String, LlmError> {
    response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse("No choices in response".to_string()))
        .map(|choice| choice.message.content.unwrap_or_default())
}
