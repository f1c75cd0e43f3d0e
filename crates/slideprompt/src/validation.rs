//! Caller-facing request and response shapes.
//!
//! [`GeneratePromptRequest`] is what a client submits. Its tags are plain
//! strings so that unknown values surface as a [`ValidationError`] instead of
//! a deserialization failure. [`GeneratePromptRequest::validate`] resolves
//! them and normalizes the content, producing a [`ValidatedRequest`] the
//! pipeline can run without further checks.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use slideprompt_core::{
    AspectRatio, ColorPalette, ContentInput, GenerationMetadata, GenerationResult,
    LayoutStructure, PresentationConfig, SLIDE_COUNT_RANGE, SlideRecord, SlideStyle,
};
use slideprompt_error::{SlidePromptError, ValidationError, ValidationErrorKind};
use slideprompt_prompt::normalize;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Presentation settings as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSettings {
    /// Aspect ratio tag, e.g. `16:9`
    pub aspect_ratio: String,
    /// Number of slides
    pub slide_count: u32,
    /// Palette tag, e.g. `auto`
    pub color_palette: String,
    /// Layout tag, e.g. `balanced`
    pub layout_structure: String,
}

/// A generation request as submitted by a caller.
///
/// # Examples
///
/// ```
/// use slideprompt::GeneratePromptRequest;
///
/// let request: GeneratePromptRequest = serde_json::from_str(r#"{
///     "content": {"type": "topic", "topic": "Quantum Computing"},
///     "style": "technical",
///     "settings": {
///         "aspectRatio": "16:9",
///         "slideCount": 3,
///         "colorPalette": "auto",
///         "layoutStructure": "balanced"
///     }
/// }"#).unwrap();
/// let validated = request.validate().unwrap();
/// assert_eq!(validated.content_text(), "Topic: Quantum Computing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratePromptRequest {
    /// Source material
    pub content: ContentInput,
    /// Style tag, e.g. `dark-neon`
    pub style: String,
    /// Remaining presentation settings
    pub settings: RequestSettings,
}

impl GeneratePromptRequest {
    /// Request from content and raw tags.
    pub fn new(
        content: ContentInput,
        style: impl Into<String>,
        color_palette: impl Into<String>,
        layout_structure: impl Into<String>,
        aspect_ratio: impl Into<String>,
        slide_count: u32,
    ) -> Self {
        Self {
            content,
            style: style.into(),
            settings: RequestSettings {
                aspect_ratio: aspect_ratio.into(),
                slide_count,
                color_palette: color_palette.into(),
                layout_structure: layout_structure.into(),
            },
        }
    }

    /// Resolve tags, check the slide count and normalize the content.
    ///
    /// # Errors
    ///
    /// - [`ValidationErrorKind::UnknownTag`] for a tag outside its set
    /// - [`ValidationErrorKind::SlideCountOutOfRange`] outside 1..=20
    /// - [`ValidationErrorKind::EmptyContent`] when the normalized text is blank
    #[instrument(skip(self), fields(content_kind = self.content.kind(), slide_count = self.settings.slide_count))]
    pub fn validate(&self) -> Result<ValidatedRequest, ValidationError> {
        let style: SlideStyle = parse_tag("style", &self.style)?;
        let color_palette: ColorPalette = parse_tag("colorPalette", &self.settings.color_palette)?;
        let layout_structure: LayoutStructure =
            parse_tag("layoutStructure", &self.settings.layout_structure)?;
        let aspect_ratio: AspectRatio = parse_tag("aspectRatio", &self.settings.aspect_ratio)?;

        let count = self.settings.slide_count;
        if !SLIDE_COUNT_RANGE.contains(&count) {
            return Err(ValidationError::new(ValidationErrorKind::SlideCountOutOfRange {
                count,
                min: *SLIDE_COUNT_RANGE.start(),
                max: *SLIDE_COUNT_RANGE.end(),
            }));
        }

        let content_text = normalize(&self.content);
        if content_text.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyContent));
        }

        debug!(content_len = content_text.len(), "Request validated");
        Ok(ValidatedRequest {
            content_text,
            config: PresentationConfig::new(
                style,
                color_palette,
                layout_structure,
                aspect_ratio,
                count,
            ),
        })
    }
}

fn parse_tag<T: FromStr>(field: &str, value: &str) -> Result<T, ValidationError> {
    T::from_str(value).map_err(|_| {
        ValidationError::new(ValidationErrorKind::UnknownTag {
            field: field.to_string(),
            value: value.to_string(),
        })
    })
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ValidatedRequest {
    /// Normalized, non-blank content text
    content_text: String,
    /// Resolved presentation settings
    config: PresentationConfig,
}

impl ValidatedRequest {
    /// Pair already-normalized text with a config, bypassing tag resolution.
    ///
    /// # Errors
    ///
    /// Applies the same slide-count and blank-content checks as
    /// [`GeneratePromptRequest::validate`].
    pub fn new(
        content_text: impl Into<String>,
        config: PresentationConfig,
    ) -> Result<Self, ValidationError> {
        let content_text = content_text.into();
        let count = *config.slide_count();
        if !SLIDE_COUNT_RANGE.contains(&count) {
            return Err(ValidationError::new(ValidationErrorKind::SlideCountOutOfRange {
                count,
                min: *SLIDE_COUNT_RANGE.start(),
                max: *SLIDE_COUNT_RANGE.end(),
            }));
        }
        if content_text.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyContent));
        }
        Ok(Self {
            content_text,
            config,
        })
    }
}

/// Response body for a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratePromptResponse {
    /// Whether generation succeeded
    pub success: bool,
    /// Raw model reply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompts: Option<String>,
    /// Parsed slides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slides: Option<Vec<SlideRecord>>,
    /// Error message for the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Settings echoed back
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<GenerationMetadata>,
}

impl GeneratePromptResponse {
    /// Successful response for `result` generated with `config`.
    pub fn success(result: GenerationResult, config: &PresentationConfig) -> Self {
        let (raw, slides) = result.into_parts();
        Self {
            success: true,
            prompts: Some(raw),
            slides: Some(slides),
            error: None,
            metadata: Some(GenerationMetadata::from(config)),
        }
    }

    /// Failed response carrying a single descriptive message.
    pub fn failure(error: &SlidePromptError) -> Self {
        let message = error.user_message();
        Self {
            success: false,
            prompts: None,
            slides: None,
            error: Some(if message.trim().is_empty() {
                "Failed to generate prompts".to_string()
            } else {
                message
            }),
            metadata: None,
        }
    }
}
