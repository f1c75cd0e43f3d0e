//! Parsed model output.

use crate::{AspectRatio, PresentationConfig, SlideStyle};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One slide recovered from the model reply.
///
/// Created by the parser, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct SlideRecord {
    /// Position in the deck, starting at 1
    slide_number: u32,
    /// Title from the marker line, possibly empty
    title: String,
    /// Visual prompt text with fences removed
    prompt_body: String,
}

impl SlideRecord {
    /// Build a record.
    pub fn new(slide_number: u32, title: impl Into<String>, prompt_body: impl Into<String>) -> Self {
        Self {
            slide_number,
            title: title.into(),
            prompt_body: prompt_body.into(),
        }
    }
}

/// Settings echoed back with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMetadata {
    /// Style used
    pub style: SlideStyle,
    /// Slide count requested
    pub slide_count: u32,
    /// Aspect ratio requested
    pub aspect_ratio: AspectRatio,
}

impl From<&PresentationConfig> for GenerationMetadata {
    fn from(config: &PresentationConfig) -> Self {
        Self {
            style: *config.style(),
            slide_count: *config.slide_count(),
            aspect_ratio: *config.aspect_ratio(),
        }
    }
}

/// Raw reply plus the slides derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct GenerationResult {
    /// Reply text exactly as received
    raw: String,
    /// Slides in reply order
    slides: Vec<SlideRecord>,
}

impl GenerationResult {
    /// Pair a reply with its parsed slides.
    pub fn new(raw: impl Into<String>, slides: Vec<SlideRecord>) -> Self {
        Self {
            raw: raw.into(),
            slides,
        }
    }

    /// Split into raw text and slides.
    pub fn into_parts(self) -> (String, Vec<SlideRecord>) {
        (self.raw, self.slides)
    }
}
