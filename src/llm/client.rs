//! Chat Completions Client
//!
//! HTTP client for OpenAI-compatible chat-completion endpoints (Groq by default).

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::LlmConfig;

/// Chat-completions client
pub struct LlmClient {
    client: Client,
    config: LlmConfig,
}

impl LlmClient {
    /// Create a new client with the given configuration
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Send a single user prompt and return the trimmed reply
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
        };

        let response: ChatResponse = self.send_post(&self.completions_url(), &body).await?;

        let reply = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(LlmError::EmptyReply)?;

        Ok(reply)
    }

    /// Send a POST request with retry logic
    async fn send_post<T: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<R, LlmError> {
        let mut last_error = LlmError::Unavailable;
        let attempts = self.config.max_retries + 1;

        for attempt in 0..attempts {
            if attempt > 0 {
                // Backoff: 1s, 4s, 9s...
                let delay = std::time::Duration::from_secs(u64::from(attempt).pow(2));
                tokio::time::sleep(delay).await;
            }

            let mut request = self.client.post(url).json(body);
            if let Some(key) = &self.config.api_key {
                request = request.bearer_auth(key);
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response.json::<R>().await.map_err(LlmError::Request);
                    } else if status.as_u16() == 429 {
                        tracing::debug!(attempt, "LLM provider rate limited the request");
                        last_error = LlmError::RateLimited;
                        continue;
                    } else {
                        let text = response.text().await.unwrap_or_default();
                        return Err(LlmError::ApiError {
                            status: status.as_u16(),
                            message: text,
                        });
                    }
                }
                Err(e) => {
                    last_error = if e.is_timeout() {
                        LlmError::Timeout
                    } else if e.is_connect() {
                        LlmError::Unavailable
                    } else {
                        LlmError::Request(e)
                    };
                    continue;
                }
            }
        }

        Err(last_error)
    }
}

// ============================================
// Request/Response DTOs
// ============================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: String,
}

// ============================================
// Errors
// ============================================

/// Errors that can occur when talking to the LLM provider
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("LLM provider unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Request timeout")]
    Timeout,

    #[error("Rate limited")]
    RateLimited,

    #[error("LLM returned an empty reply")]
    EmptyReply,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_url() {
        let config = LlmConfig {
            base_url: "https://api.groq.com/openai/v1/".to_string(),
            ..Default::default()
        };
        let client = LlmClient::new(config).unwrap();
        assert_eq!(
            client.completions_url(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn test_chat_request_shape() {
        let body = ChatRequest {
            model: "llama-3.1-8b-instant",
            messages: vec![ChatMessage {
                role: "user",
                content: "hello",
            }],
            temperature: 0.2,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "llama-3.1-8b-instant");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
    }

    #[test]
    fn test_chat_response_parses() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"  Fine. "}}]}"#,
        )
        .unwrap();
        assert_eq!(response.choices[0].message.content, "  Fine. ");
    }

    #[tokio::test]
    async fn test_unreachable_provider() {
        let config = LlmConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            api_key: Some("test".to_string()),
            max_retries: 0,
            request_timeout_ms: 500,
            ..Default::default()
        };
        let client = LlmClient::new(config).unwrap();

        assert!(client.complete("hello").await.is_err());
    }
}
