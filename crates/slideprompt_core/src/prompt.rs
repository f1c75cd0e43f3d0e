//! The instruction pair sent to the model.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// `(systemInstruction, userInstruction)` for one request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct PromptPair {
    /// Fixed output grammar and richness rules
    system: String,
    /// Per-request instruction
    user: String,
}

impl PromptPair {
    /// Pair the two instructions.
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }

    /// Both instructions as one copyable document.
    ///
    /// # Examples
    ///
    /// ```
    /// use slideprompt_core::PromptPair;
    ///
    /// let pair = PromptPair::new("rules", "request");
    /// assert_eq!(pair.to_plain_text(), "rules\n\n---\n\nrequest");
    /// ```
    pub fn to_plain_text(&self) -> String {
        format!("{}\n\n---\n\n{}", self.system, self.user)
    }
}
