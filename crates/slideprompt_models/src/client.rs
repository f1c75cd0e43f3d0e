//! Generation client: instruction pair in, reply text out.

use crate::metrics::{GenerationMetrics, GenerationMode};
use crate::{
    ChatCompletionChunk, ChatCompletionRequest, ChatMessage, ChatTransport, ContentPart,
    GenerationSettings, OpenAiTransport,
};
use futures::{Stream, StreamExt, future};
use slideprompt_core::{PromptPair, SecondaryContent};
use slideprompt_error::{ConfigError, ModelsResult};
use std::pin::Pin;
use std::time::Instant;
use tracing::instrument;

/// Reply fragments in arrival order; concatenated they form the full reply.
pub type FragmentStream = Pin<Box<dyn Stream<Item = ModelsResult<String>> + Send>>;

/// Sends instruction pairs to a text-generation endpoint.
///
/// One attempt per call: no retries and no backoff.
#[derive(Debug, Clone)]
pub struct GenerationClient<T> {
    transport: T,
    model: String,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl GenerationClient<OpenAiTransport> {
    /// Client for the endpoint described by `settings`.
    pub fn from_settings(settings: &GenerationSettings) -> Self {
        Self::new(OpenAiTransport::from_settings(settings), settings)
    }

    /// Client using the process-wide settings.
    pub fn from_global() -> Result<Self, ConfigError> {
        Ok(Self::from_settings(GenerationSettings::global()?))
    }
}

impl<T: ChatTransport> GenerationClient<T> {
    /// Client over any transport, taking model parameters from `settings`.
    pub fn new(transport: T, settings: &GenerationSettings) -> Self {
        Self {
            transport,
            model: settings.model().clone(),
            max_tokens: *settings.max_tokens(),
            temperature: *settings.temperature(),
        }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Model identifier sent with each request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Map an instruction pair to a system and a user message.
    ///
    /// With secondary content the user message becomes multi-part: the
    /// instruction text followed by an image part referencing the content.
    pub fn build_request(
        &self,
        prompt: &PromptPair,
        secondary: Option<&SecondaryContent>,
        stream: bool,
    ) -> ChatCompletionRequest {
        let user = match secondary {
            Some(content) => ChatMessage::user_parts(vec![
                ContentPart::text(prompt.user().clone()),
                ContentPart::image_url(content.url()),
            ]),
            None => ChatMessage::user(prompt.user().clone()),
        };

        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(prompt.system().clone()), user],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            stream: stream.then_some(true),
        }
    }

    /// Buffered generation. A reply without content yields an empty string.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success response.
    #[instrument(
        skip(self, prompt, secondary),
        fields(
            provider = self.transport.provider_name(),
            model = %self.model,
            user_len = prompt.user().len(),
            has_secondary = secondary.is_some(),
        )
    )]
    pub async fn generate(
        &self,
        prompt: &PromptPair,
        secondary: Option<&SecondaryContent>,
    ) -> ModelsResult<String> {
        let request = self.build_request(prompt, secondary, false);
        let metrics = GenerationMetrics::get();
        let provider = self.transport.provider_name();
        let start = Instant::now();

        let response = match self.transport.complete(&request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Generation failed");
                metrics.record_error(provider, &self.model, GenerationMode::Buffered, &e);
                return Err(e);
            }
        };

        metrics.record_request(
            provider,
            &self.model,
            GenerationMode::Buffered,
            start.elapsed().as_secs_f64(),
        );
        if let Some(usage) = &response.usage {
            metrics.record_usage(&self.model, usage);
        }

        let text = response.into_text();
        tracing::debug!(reply_len = text.len(), "Generation complete");
        Ok(text)
    }

    /// Streaming generation. Each non-empty delta becomes one fragment, in
    /// the order the transport delivered it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is rejected before streaming starts.
    /// Failures after that arrive as stream items.
    #[instrument(
        skip(self, prompt, secondary),
        fields(
            provider = self.transport.provider_name(),
            model = %self.model,
            user_len = prompt.user().len(),
            has_secondary = secondary.is_some(),
        )
    )]
    pub async fn generate_stream(
        &self,
        prompt: &PromptPair,
        secondary: Option<&SecondaryContent>,
    ) -> ModelsResult<FragmentStream> {
        let request = self.build_request(prompt, secondary, true);
        let metrics = GenerationMetrics::get();
        let provider = self.transport.provider_name();
        let start = Instant::now();

        let chunks = match self.transport.complete_stream(&request).await {
            Ok(chunks) => chunks,
            Err(e) => {
                tracing::warn!(error = %e, "Streaming generation failed");
                metrics.record_error(provider, &self.model, GenerationMode::Stream, &e);
                return Err(e);
            }
        };
        metrics.record_request(
            provider,
            &self.model,
            GenerationMode::Stream,
            start.elapsed().as_secs_f64(),
        );
        tracing::debug!("Streaming generation started");

        let model = self.model.clone();
        let fragments = chunks.filter_map(move |chunk| {
            future::ready(match chunk {
                Ok(chunk) => fragment_of(chunk, &model).map(Ok),
                Err(e) => {
                    metrics.record_error(provider, &model, GenerationMode::Stream, &e);
                    Some(Err(e))
                }
            })
        });
        Ok(Box::pin(fragments))
    }
}

/// Text a chunk contributes to the reply, recording any usage it carries.
///
/// Usage typically arrives on a final chunk with no choices.
fn fragment_of(mut chunk: ChatCompletionChunk, model: &str) -> Option<String> {
    let metrics = GenerationMetrics::get();
    if let Some(usage) = chunk.usage.take() {
        tracing::debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "Stream reported usage"
        );
        metrics.record_usage(model, &usage);
    }

    let text = chunk.into_delta_text().filter(|text| !text.is_empty())?;
    metrics.record_fragment(model);
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Usage;

    fn usage() -> Usage {
        Usage {
            prompt_tokens: 12,
            completion_tokens: 34,
            total_tokens: 46,
        }
    }

    #[test]
    fn test_usage_only_chunk_yields_no_fragment() {
        let chunk = ChatCompletionChunk {
            usage: Some(usage()),
            ..ChatCompletionChunk::default()
        };
        assert_eq!(fragment_of(chunk, "gpt-4o"), None);
    }

    #[test]
    fn test_chunk_with_usage_keeps_its_text() {
        let chunk = ChatCompletionChunk {
            usage: Some(usage()),
            ..ChatCompletionChunk::from_text("tail")
        };
        assert_eq!(fragment_of(chunk, "gpt-4o").as_deref(), Some("tail"));
    }

    #[test]
    fn test_empty_delta_yields_no_fragment() {
        assert_eq!(fragment_of(ChatCompletionChunk::from_text(""), "gpt-4o"), None);
    }
}
