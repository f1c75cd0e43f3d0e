//! Generation endpoint errors.

/// Failure conditions of a call to the text-generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelsErrorKind {
    /// The request never produced a response (DNS, connect, TLS, body read).
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// The endpoint answered with a non-success status.
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Message reported by the endpoint, or the raw body
        message: String,
    },

    /// A response body or stream event was not the expected JSON shape.
    #[display("Failed to deserialize response: {}", _0)]
    Deserialization(String),

    /// The incremental response broke off mid-stream.
    #[display("Stream error: {}", _0)]
    Stream(String),
}

/// Generation endpoint error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Message suitable for showing to an end user, without source location.
    ///
    /// For API errors this is the endpoint's own message.
    ///
    /// # Examples
    ///
    /// ```
    /// use slideprompt_error::{ModelsError, ModelsErrorKind};
    ///
    /// let err = ModelsError::new(ModelsErrorKind::Api {
    ///     status: 401,
    ///     message: "Incorrect API key provided".into(),
    /// });
    /// assert_eq!(err.user_message(), "Incorrect API key provided");
    /// ```
    pub fn user_message(&self) -> String {
        match &self.kind {
            ModelsErrorKind::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type for generation endpoint operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
