//! Request validation errors.

/// Reasons a generation request is rejected before the pipeline runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// The normalized content text is blank
    #[display("No content provided")]
    EmptyContent,

    /// Slide count outside the supported range
    #[display("Slide count {} is outside the supported range {}..={}", count, min, max)]
    SlideCountOutOfRange {
        /// Requested count
        count: u32,
        /// Smallest accepted count
        min: u32,
        /// Largest accepted count
        max: u32,
    },

    /// An enumerated field carried a value outside its declared set
    #[display("Unknown {} '{}'", field, value)]
    UnknownTag {
        /// Name of the field
        field: String,
        /// Offending value
        value: String,
    },
}

/// Validation error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    line: u32,
    file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
}
