use futures_util::Stream;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the chat-completion API
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// A single chat message in the completion wire format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Client for the external chat-completion API
///
/// Supports two shapes of the same endpoint: a single JSON completion
/// (used by the vendor ranker and the recommendations path) and a streamed
/// SSE body (`data: {...}` frames terminated by `data: [DONE]`) that the
/// assistant route relays verbatim.
pub struct CompletionClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl CompletionClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            model,
            client,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Request a single (non-streamed) completion and return its content
    pub async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        max_tokens: u32,
    ) -> Result<String, CompletionError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": max_tokens,
        });

        self.send_completion(body).await
    }

    /// Request a completion constrained to a JSON object reply
    pub async fn complete_json(
        &self,
        messages: Vec<ChatMessage>,
        max_tokens: u32,
    ) -> Result<String, CompletionError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": max_tokens,
            "response_format": { "type": "json_object" },
        });

        self.send_completion(body).await
    }

    async fn send_completion(&self, body: Value) -> Result<String, CompletionError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CompletionError::ApiError(format!(
                "Completion request failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        json.get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(str::to_string)
            .ok_or_else(|| CompletionError::InvalidResponse("Missing completion content".into()))
    }

    /// Request a streamed completion and return the raw SSE byte stream
    ///
    /// The body is relayed as-is; the caller owns framing and termination
    /// (`data: [DONE]`).
    pub async fn stream(
        &self,
        messages: Vec<ChatMessage>,
        max_tokens: u32,
        temperature: f64,
    ) -> Result<impl Stream<Item = Result<bytes::Bytes, reqwest::Error>>, CompletionError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "stream": true,
            "max_tokens": max_tokens,
            "temperature": temperature,
        });

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CompletionError::ApiError(format!(
                "Completion request failed: {}",
                response.status()
            )));
        }

        Ok(response.bytes_stream())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = CompletionClient::new(
            "https://llm.test/v1/".to_string(),
            "key".to_string(),
            "gpt-4o-mini".to_string(),
        );
        assert_eq!(client.endpoint(), "https://llm.test/v1/chat/completions");
    }

    #[test]
    fn test_message_constructors() {
        assert_eq!(ChatMessage::system("a").role, "system");
        assert_eq!(ChatMessage::user("b").role, "user");
        assert_eq!(ChatMessage::assistant("c").role, "assistant");
    }
}
