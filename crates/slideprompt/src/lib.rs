//! Slideprompt turns source material into per-slide visual prompts.
//!
//! The pipeline runs in one direction:
//!
//! 1. [`normalize`] collapses a [`ContentInput`] into annotated text
//! 2. [`assemble`] builds the system and user instructions from that text and a
//!    [`PresentationConfig`]
//! 3. [`GenerationClient`] sends them to an OpenAI-compatible endpoint, buffered
//!    or streamed
//! 4. [`parse`] recovers ordered [`SlideRecord`]s from the reply
//!
//! [`GeneratePromptRequest`] validates caller input and [`SlidePipeline`] runs
//! the whole sequence.
//!
//! # Quick Start
//!
//! ```no_run
//! use slideprompt::{ContentInput, GeneratePromptRequest, SlidePipeline};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let request = GeneratePromptRequest::new(
//!     ContentInput::topic("Quantum Computing"),
//!     "technical",
//!     "auto",
//!     "balanced",
//!     "16:9",
//!     3,
//! );
//! let pipeline = SlidePipeline::from_global()?;
//! let result = pipeline.run(&request.validate()?, None).await?;
//! for slide in result.slides() {
//!     println!("{}: {}", slide.slide_number(), slide.title());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `slideprompt_error` - Error types
//! - `slideprompt_core` - Data model
//! - `slideprompt_prompt` - Normalizer and prompt assembler
//! - `slideprompt_models` - Generation client
//! - `slideprompt_parser` - Slide parser
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod observability;
mod pipeline;
mod validation;

pub use observability::{ObservabilityConfig, init_observability, init_observability_with_config};
pub use pipeline::{SlidePipeline, collect_result};
pub use validation::{GeneratePromptRequest, GeneratePromptResponse, RequestSettings, ValidatedRequest};

pub use slideprompt_core::*;
pub use slideprompt_error::*;
pub use slideprompt_models::{
    ChatCompletionRequest, ChatTransport, ChunkStream, FragmentStream, GenerationClient,
    GenerationSettings, OpenAiTransport,
};
pub use slideprompt_parser::{ParsedReply, parse, parse_reply, render_markers};
pub use slideprompt_prompt::{SYSTEM_INSTRUCTION, assemble, normalize, slide_plan};
