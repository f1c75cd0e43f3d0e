//! Transport seam between request construction and network I/O.

use crate::sse::data_events;
use crate::wire::ApiErrorBody;
use crate::{
    ChatCompletionChunk, ChatCompletionRequest, ChatCompletionResponse, GenerationSettings,
};
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use slideprompt_error::{ModelsError, ModelsErrorKind, ModelsResult};
use std::pin::Pin;
use tracing::instrument;

/// Decoded streaming chunks, in arrival order.
pub type ChunkStream = Pin<Box<dyn Stream<Item = ModelsResult<ChatCompletionChunk>> + Send>>;

/// Something that can carry a chat completion request to an endpoint.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send a buffered request and wait for the full completion.
    async fn complete(&self, request: &ChatCompletionRequest)
    -> ModelsResult<ChatCompletionResponse>;

    /// Send a streaming request. Dropping the returned stream abandons the call.
    async fn complete_stream(&self, request: &ChatCompletionRequest) -> ModelsResult<ChunkStream>;

    /// Provider label for logs and metrics.
    fn provider_name(&self) -> &'static str;
}

/// OpenAI-compatible HTTP transport.
#[derive(Debug, Clone)]
pub struct OpenAiTransport {
    api_base: String,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiTransport {
    /// Transport for `api_base`; an empty `api_key` sends no `Authorization` header.
    pub fn new(api_base: impl Into<String>, api_key: impl Into<String>) -> Self {
        let api_base = api_base.into();
        tracing::debug!(%api_base, "Creating OpenAI-compatible transport");
        Self {
            api_base,
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Transport for the endpoint named in `settings`.
    pub fn from_settings(settings: &GenerationSettings) -> Self {
        Self::new(settings.api_base().clone(), settings.api_key().clone())
    }

    /// The completions URL.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }

    async fn send(&self, request: &ChatCompletionRequest) -> ModelsResult<reqwest::Response> {
        let url = self.endpoint();
        tracing::debug!("Sending chat completion request to {}", url);

        let mut req = self.client.post(&url).json(request);
        if !self.api_key.is_empty() {
            req = req.bearer_auth(&self.api_key);
        }

        let response = req.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            ModelsError::new(ModelsErrorKind::Http(format!("Request failed: {}", e)))
        })?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = api_error_message(status, &body);
        tracing::error!(status = status.as_u16(), %message, "Endpoint returned error");
        Err(ModelsError::new(ModelsErrorKind::Api {
            status: status.as_u16(),
            message,
        }))
    }
}

/// The endpoint's own message when the body is `{"error":{"message":..}}`,
/// otherwise the raw body, otherwise the status reason.
fn api_error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        return parsed.error.message;
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}

#[async_trait]
impl ChatTransport for OpenAiTransport {
    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> ModelsResult<ChatCompletionResponse> {
        let response = self.send(request).await?;

        let result = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            ModelsError::new(ModelsErrorKind::Deserialization(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        tracing::debug!("Chat completion successful");
        Ok(result)
    }

    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn complete_stream(&self, request: &ChatCompletionRequest) -> ModelsResult<ChunkStream> {
        let response = self.send(request).await?;
        tracing::debug!("Streaming request accepted, decoding event stream");

        let chunks = data_events(response.bytes_stream()).map(|event| {
            event.and_then(|data| {
                serde_json::from_str::<ChatCompletionChunk>(&data).map_err(|e| {
                    ModelsError::new(ModelsErrorKind::Deserialization(format!(
                        "Failed to parse chunk: {}",
                        e
                    )))
                })
            })
        });
        Ok(Box::pin(chunks))
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_api_error_message_sources() {
        let json = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        assert_eq!(
            api_error_message(StatusCode::UNAUTHORIZED, json),
            "Incorrect API key provided"
        );
        assert_eq!(
            api_error_message(StatusCode::BAD_GATEWAY, "upstream down\n"),
            "upstream down"
        );
        assert_eq!(
            api_error_message(StatusCode::SERVICE_UNAVAILABLE, ""),
            "Service Unavailable"
        );
    }

    #[test]
    fn test_endpoint_trims_slash() {
        let transport = OpenAiTransport::new("http://localhost:8080/v1/", "");
        assert_eq!(transport.endpoint(), "http://localhost:8080/v1/chat/completions");
    }
}
