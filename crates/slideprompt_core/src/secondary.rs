//! Extra content attached next to the user instruction.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// A non-text part sent alongside the user instruction, such as a rendered
/// document page. Vision-capable endpoints receive it as an image part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecondaryContent {
    /// A `data:` URL (or any URL the endpoint can fetch).
    DataUrl(String),
}

impl SecondaryContent {
    /// Wrap raw bytes into a base64 `data:` URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use slideprompt_core::SecondaryContent;
    ///
    /// let content = SecondaryContent::from_bytes("application/pdf", b"%PDF");
    /// assert_eq!(content.url(), "data:application/pdf;base64,JVBERg==");
    /// ```
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        Self::DataUrl(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
    }

    /// The URL referenced by the content part.
    pub fn url(&self) -> &str {
        match self {
            Self::DataUrl(url) => url,
        }
    }
}
