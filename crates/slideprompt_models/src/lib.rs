//! Generation client for slideprompt.
//!
//! Sends a [`PromptPair`](slideprompt_core::PromptPair) to an OpenAI-compatible
//! chat completions endpoint, either buffered ([`GenerationClient::generate`])
//! or as an ordered fragment stream ([`GenerationClient::generate_stream`]).
//!
//! Network I/O sits behind the [`ChatTransport`] trait. [`OpenAiTransport`] is
//! the reqwest implementation; tests substitute an in-process fake.
//!
//! # Example
//!
//! ```no_run
//! use slideprompt_core::PromptPair;
//! use slideprompt_models::{GenerationClient, GenerationSettings};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = GenerationSettings::new("sk-...", "gpt-4o");
//! let client = GenerationClient::from_settings(&settings);
//! let reply = client
//!     .generate(&PromptPair::new("system", "user"), None)
//!     .await?;
//! println!("{}", reply);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod metrics;
mod settings;
mod sse;
mod transport;
mod wire;

pub use client::{FragmentStream, GenerationClient};
pub use metrics::{GenerationMetrics, GenerationMode, classify_error};
pub use settings::{DEFAULT_API_BASE, DEFAULT_MODEL, GenerationSettings};
pub use sse::{DONE_MARKER, SseDecoder, data_events};
pub use transport::{ChatTransport, ChunkStream, OpenAiTransport};
pub use wire::{
    ChatCompletionChunk, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice,
    ChoiceMessage, ChunkChoice, ContentPart, Delta, ImageUrl, MessageContent, Usage,
};
