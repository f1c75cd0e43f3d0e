//! Core data types for the slideprompt pipeline.
//!
//! This crate holds the values that flow between the normalizer, the prompt
//! assembler, the generation client and the slide parser.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod content;
mod presentation;
mod prompt;
mod result;
mod role;
mod secondary;

pub use content::ContentInput;
pub use presentation::{
    AspectRatio, ColorPalette, LayoutStructure, PresentationConfig, PresentationConfigBuilder,
    SLIDE_COUNT_RANGE, SlideStyle,
};
pub use prompt::PromptPair;
pub use result::{GenerationMetadata, GenerationResult, SlideRecord};
pub use role::Role;
pub use secondary::SecondaryContent;
