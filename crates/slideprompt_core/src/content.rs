//! User-supplied source material.

use serde::{Deserialize, Serialize};

/// One of the four shapes a user may submit as source material.
///
/// Every field is optional: missing data degrades to placeholder text during
/// normalization instead of failing. The serialized form matches the JSON the
/// web client sends (`{"type": "file", "fileContent": "...", "fileName": "..."}`).
///
/// # Examples
///
/// ```
/// use slideprompt_core::ContentInput;
///
/// let input: ContentInput =
///     serde_json::from_str(r#"{"type":"topic","topic":"Quantum Computing"}"#).unwrap();
/// assert_eq!(input, ContentInput::topic("Quantum Computing"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ContentInput {
    /// Raw pasted text.
    Text {
        /// The text itself
        #[serde(default)]
        text: Option<String>,
    },

    /// A short topic phrase for the model to expand.
    Topic {
        /// Topic label
        #[serde(default)]
        topic: Option<String>,
    },

    /// Text already extracted from an uploaded file.
    File {
        /// Extracted plain text
        #[serde(default)]
        file_content: Option<String>,
        /// Original file name, for context
        #[serde(default)]
        file_name: Option<String>,
    },

    /// A web page, optionally with its already-extracted text.
    Url {
        /// Page address
        #[serde(default)]
        url: Option<String>,
        /// Extracted plain text of the page
        #[serde(default)]
        url_content: Option<String>,
    },
}

impl ContentInput {
    /// Raw text input.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: Some(text.into()),
        }
    }

    /// Topic input.
    pub fn topic(topic: impl Into<String>) -> Self {
        Self::Topic {
            topic: Some(topic.into()),
        }
    }

    /// File input with its extracted text.
    pub fn file(file_name: Option<String>, file_content: impl Into<String>) -> Self {
        Self::File {
            file_content: Some(file_content.into()),
            file_name,
        }
    }

    /// URL input, with the page text when it has already been extracted.
    pub fn url(url: impl Into<String>, url_content: Option<String>) -> Self {
        Self::Url {
            url: Some(url.into()),
            url_content,
        }
    }

    /// Wire tag of the active variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Topic { .. } => "topic",
            Self::File { .. } => "file",
            Self::Url { .. } => "url",
        }
    }
}
