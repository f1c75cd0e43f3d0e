//! Instruction building for slideprompt.
//!
//! Two steps turn user input into the text sent to the model:
//!
//! 1. [`normalize`] collapses a [`ContentInput`](slideprompt_core::ContentInput)
//!    into one annotated text blob.
//! 2. [`assemble`] combines that text with a
//!    [`PresentationConfig`](slideprompt_core::PresentationConfig) into a
//!    [`PromptPair`](slideprompt_core::PromptPair): the constant
//!    [`SYSTEM_INSTRUCTION`] plus a user instruction carrying the style persona,
//!    the visual direction and the per-slide plan.
//!
//! Neither step can fail.
//!
//! # Example
//!
//! ```
//! use slideprompt_core::{ContentInput, PresentationConfig};
//! use slideprompt_prompt::{assemble, normalize};
//!
//! let content = normalize(&ContentInput::topic("Tidal energy"));
//! let pair = assemble(&content, &PresentationConfig::with_slide_count(4));
//! assert!(pair.user().contains("Topic: Tidal energy"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assemble;
mod catalog;
mod normalize;
mod plan;

pub use assemble::{SYSTEM_INSTRUCTION, assemble, build_user_instruction};
pub use catalog::{
    aspect_ratio_description, layout_description, palette_description, persona,
    style_description, style_label,
};
pub use normalize::{DEFAULT_TOPIC, normalize};
pub use plan::{
    ARCHETYPE_ROTATION, Archetype, ArchetypeKind, SlideDirective, SlideRole, archetype_for,
    render_plan, slide_plan,
};
