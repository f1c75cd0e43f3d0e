//! End-to-end pipeline: assemble, generate, parse.

use crate::{GeneratePromptRequest, GeneratePromptResponse, ValidatedRequest};
use futures::{Stream, StreamExt};
use slideprompt_core::{GenerationResult, PromptPair, SecondaryContent};
use slideprompt_error::{ModelsResult, SlidePromptError, SlidePromptResult};
use slideprompt_models::{
    ChatTransport, FragmentStream, GenerationClient, GenerationMetrics, GenerationMode,
    GenerationSettings, OpenAiTransport,
};
use slideprompt_parser::parse;
use slideprompt_prompt::assemble;
use tracing::{info, instrument};

/// Runs validated requests through the generation client and the parser.
///
/// Holds no per-request state; one pipeline can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct SlidePipeline<T> {
    client: GenerationClient<T>,
}

impl SlidePipeline<OpenAiTransport> {
    /// Pipeline for the endpoint described by `settings`.
    pub fn from_settings(settings: &GenerationSettings) -> Self {
        Self::new(GenerationClient::from_settings(settings))
    }

    /// Pipeline using the process-wide settings.
    pub fn from_global() -> SlidePromptResult<Self> {
        Ok(Self::new(GenerationClient::from_global()?))
    }
}

impl<T: ChatTransport> SlidePipeline<T> {
    /// Pipeline over an existing client.
    pub fn new(client: GenerationClient<T>) -> Self {
        Self { client }
    }

    /// The generation client.
    pub fn client(&self) -> &GenerationClient<T> {
        &self.client
    }

    /// Instruction pair for a request, without calling the endpoint.
    pub fn prompt(&self, request: &ValidatedRequest) -> PromptPair {
        assemble(request.content_text(), request.config())
    }

    /// Generate and parse in one buffered call.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint call fails. Parsing never fails.
    #[instrument(skip(self, request, secondary), fields(slide_count = *request.config().slide_count()))]
    pub async fn run(
        &self,
        request: &ValidatedRequest,
        secondary: Option<&SecondaryContent>,
    ) -> SlidePromptResult<GenerationResult> {
        let prompt = self.prompt(request);
        let raw = self.client.generate(&prompt, secondary).await?;
        let slides = parse(&raw);
        GenerationMetrics::get().record_slides(GenerationMode::Buffered, slides.len());
        info!(reply_len = raw.len(), slides = slides.len(), "Generation finished");
        Ok(GenerationResult::new(raw, slides))
    }

    /// Start a streaming generation. Pass the stream to [`collect_result`]
    /// to obtain the parsed result once it ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint rejects the request.
    #[instrument(skip(self, request, secondary), fields(slide_count = *request.config().slide_count()))]
    pub async fn run_stream(
        &self,
        request: &ValidatedRequest,
        secondary: Option<&SecondaryContent>,
    ) -> SlidePromptResult<FragmentStream> {
        let prompt = self.prompt(request);
        Ok(self.client.generate_stream(&prompt, secondary).await?)
    }

    /// Validate, generate and build the response body, success or not.
    pub async fn respond(
        &self,
        request: &GeneratePromptRequest,
        secondary: Option<&SecondaryContent>,
    ) -> GeneratePromptResponse {
        let outcome = match request.validate() {
            Ok(validated) => self
                .run(&validated, secondary)
                .await
                .map(|result| GeneratePromptResponse::success(result, validated.config())),
            Err(e) => Err(SlidePromptError::from(e)),
        };

        outcome.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Generation request failed");
            GeneratePromptResponse::failure(&e)
        })
    }
}

/// Drain a fragment stream, then parse the concatenated reply.
///
/// # Errors
///
/// Returns the first error the stream yields; fragments received before it
/// are discarded.
#[instrument(skip(fragments))]
pub async fn collect_result<S>(mut fragments: S) -> SlidePromptResult<GenerationResult>
where
    S: Stream<Item = ModelsResult<String>> + Unpin,
{
    let mut raw = String::new();
    let mut fragment_count = 0usize;
    while let Some(fragment) = fragments.next().await {
        raw.push_str(&fragment?);
        fragment_count += 1;
    }

    let slides = parse(&raw);
    GenerationMetrics::get().record_slides(GenerationMode::Stream, slides.len());
    info!(fragment_count, reply_len = raw.len(), slides = slides.len(), "Stream finished");
    Ok(GenerationResult::new(raw, slides))
}
