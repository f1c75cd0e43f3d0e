//! Metrics for the generation pipeline.
//!
//! Instruments come from the OpenTelemetry global meter, so they are no-ops
//! until the embedding application installs a meter provider.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram},
};
use slideprompt_error::{ModelsError, ModelsErrorKind};
use std::sync::OnceLock;

use crate::Usage;

static METRICS: OnceLock<GenerationMetrics> = OnceLock::new();

/// How a reply was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationMode {
    /// One response body holding the whole reply
    Buffered,
    /// Server-sent events, one fragment per delta
    Stream,
}

impl GenerationMode {
    /// Label value used on metric attributes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buffered => "buffered",
            Self::Stream => "stream",
        }
    }
}

/// Instruments covering one trip through the pipeline: the endpoint call,
/// the fragments of a streamed reply, and the slides parsed out of it.
#[derive(Clone)]
pub struct GenerationMetrics {
    /// Endpoint calls that returned a reply (or opened a stream)
    pub requests: Counter<u64>,
    /// Endpoint calls that failed, labelled by `error_type`
    pub errors: Counter<u64>,
    /// Seconds until the reply arrived or the stream opened
    pub latency: Histogram<f64>,
    /// Tokens reported by the endpoint, labelled `kind=prompt|completion`
    pub tokens: Counter<u64>,
    /// Non-empty fragments delivered to stream consumers
    pub fragments: Counter<u64>,
    /// Slide records per parsed reply
    pub slides: Histogram<u64>,
}

impl GenerationMetrics {
    fn init() -> Self {
        let meter = global::meter("slideprompt");

        Self {
            requests: meter
                .u64_counter("slideprompt.generation.requests")
                .with_description("Generation calls answered by the endpoint")
                .build(),
            errors: meter
                .u64_counter("slideprompt.generation.errors")
                .with_description("Generation calls that failed")
                .build(),
            latency: meter
                .f64_histogram("slideprompt.generation.latency")
                .with_unit("s")
                .with_description("Time until the reply or the first stream byte")
                .build(),
            tokens: meter
                .u64_counter("slideprompt.generation.tokens")
                .with_description("Tokens reported by the endpoint")
                .build(),
            fragments: meter
                .u64_counter("slideprompt.stream.fragments")
                .with_description("Reply fragments delivered while streaming")
                .build(),
            slides: meter
                .u64_histogram("slideprompt.reply.slides")
                .with_description("Slide records parsed from one reply")
                .build(),
        }
    }

    /// Get the global metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record an answered call.
    pub fn record_request(
        &self,
        provider: &'static str,
        model: &str,
        mode: GenerationMode,
        latency_secs: f64,
    ) {
        let labels = &[
            KeyValue::new("provider", provider),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("mode", mode.as_str()),
        ];
        self.requests.add(1, labels);
        self.latency.record(latency_secs, labels);
    }

    /// Record a failed call or a stream that broke after opening.
    pub fn record_error(
        &self,
        provider: &'static str,
        model: &str,
        mode: GenerationMode,
        error: &ModelsError,
    ) {
        let labels = &[
            KeyValue::new("provider", provider),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("mode", mode.as_str()),
            KeyValue::new("error_type", classify_error(error)),
        ];
        self.errors.add(1, labels);
    }

    /// Record token usage reported by the endpoint.
    pub fn record_usage(&self, model: &str, usage: &Usage) {
        let model = KeyValue::new("model", model.to_string());
        self.tokens.add(
            usage.prompt_tokens,
            &[model.clone(), KeyValue::new("kind", "prompt")],
        );
        self.tokens.add(
            usage.completion_tokens,
            &[model, KeyValue::new("kind", "completion")],
        );
    }

    /// Record one fragment handed to a stream consumer.
    pub fn record_fragment(&self, model: &str) {
        self.fragments
            .add(1, &[KeyValue::new("model", model.to_string())]);
    }

    /// Record how many slides a reply parsed into.
    pub fn record_slides(&self, mode: GenerationMode, count: usize) {
        self.slides.record(
            u64::try_from(count).unwrap_or(u64::MAX),
            &[KeyValue::new("mode", mode.as_str())],
        );
    }
}

/// Classify a generation failure for metrics labelling.
///
/// Returns one of: "rate_limit", "auth", "network", "server", "invalid_request",
/// "malformed_response", "stream", "unknown".
pub fn classify_error(error: &ModelsError) -> &'static str {
    match &error.kind {
        ModelsErrorKind::Api { status: 429, .. } => "rate_limit",
        ModelsErrorKind::Api {
            status: 401 | 403, ..
        } => "auth",
        ModelsErrorKind::Api { status: 400..=499, .. } => "invalid_request",
        ModelsErrorKind::Api { status: 500..=599, .. } => "server",
        ModelsErrorKind::Api { .. } => "unknown",
        ModelsErrorKind::Http(_) => "network",
        ModelsErrorKind::Deserialization(_) => "malformed_response",
        ModelsErrorKind::Stream(_) => "stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16) -> ModelsError {
        ModelsError::new(ModelsErrorKind::Api {
            status,
            message: "x".into(),
        })
    }

    #[test]
    fn test_classify_error() {
        assert_eq!(classify_error(&api(429)), "rate_limit");
        assert_eq!(classify_error(&api(401)), "auth");
        assert_eq!(classify_error(&api(404)), "invalid_request");
        assert_eq!(classify_error(&api(503)), "server");
        assert_eq!(
            classify_error(&ModelsError::new(ModelsErrorKind::Http("refused".into()))),
            "network"
        );
        assert_eq!(
            classify_error(&ModelsError::new(ModelsErrorKind::Stream("cut".into()))),
            "stream"
        );
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(GenerationMode::Buffered.as_str(), "buffered");
        assert_eq!(GenerationMode::Stream.as_str(), "stream");
    }

    #[test]
    fn test_recording_without_provider_is_noop() {
        let metrics = GenerationMetrics::get();
        metrics.record_request("openai", "gpt-4o", GenerationMode::Stream, 0.5);
        metrics.record_error("openai", "gpt-4o", GenerationMode::Buffered, &api(500));
        metrics.record_usage(
            "gpt-4o",
            &Usage {
                prompt_tokens: 10,
                completion_tokens: 20,
                total_tokens: 30,
            },
        );
        metrics.record_fragment("gpt-4o");
        metrics.record_slides(GenerationMode::Buffered, 12);
    }
}
