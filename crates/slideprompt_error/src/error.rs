//! Top-level error wrapper types.

use crate::{ConfigError, ModelsError, ValidationError};

/// Every failure the pipeline can surface.
///
/// # Examples
///
/// ```
/// use slideprompt_error::{ConfigError, SlidePromptError};
///
/// let err: SlidePromptError = ConfigError::new("bad temperature").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SlidePromptErrorKind {
    /// Generation endpoint failure
    #[from(ModelsError)]
    Models(ModelsError),
    /// Settings could not be loaded
    #[from(ConfigError)]
    Config(ConfigError),
    /// Request rejected before generation
    #[from(ValidationError)]
    Validation(ValidationError),
}

/// Slideprompt error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Slideprompt Error: {}", _0)]
pub struct SlidePromptError(Box<SlidePromptErrorKind>);

impl SlidePromptError {
    /// Create a new error from a kind.
    pub fn new(kind: SlidePromptErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SlidePromptErrorKind {
        &self.0
    }

    /// Short message for end users, without source locations.
    pub fn user_message(&self) -> String {
        match self.kind() {
            SlidePromptErrorKind::Models(e) => e.user_message(),
            SlidePromptErrorKind::Config(e) => e.message.clone(),
            SlidePromptErrorKind::Validation(e) => e.kind().to_string(),
        }
    }
}

impl<T> From<T> for SlidePromptError
where
    T: Into<SlidePromptErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for slideprompt operations.
pub type SlidePromptResult<T> = std::result::Result<T, SlidePromptError>;
