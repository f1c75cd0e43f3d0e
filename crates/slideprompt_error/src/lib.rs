//! Error types for the slideprompt pipeline.
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enums name the specific failure condition
//! - `*Error` structs wrap a kind together with the source location
//! - constructors use `#[track_caller]` so the location is captured automatically
//!
//! Only the generation client, settings loading and request validation can fail.
//! Normalization, assembly and parsing are infallible by construction.
//!
//! # Examples
//!
//! ```
//! use slideprompt_error::{ModelsError, ModelsErrorKind, SlidePromptResult};
//!
//! fn call_endpoint() -> SlidePromptResult<String> {
//!     Err(ModelsError::new(ModelsErrorKind::Http("connection refused".into())))?
//! }
//!
//! assert!(call_endpoint().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod models;
mod validation;

pub use config::ConfigError;
pub use error::{SlidePromptError, SlidePromptErrorKind, SlidePromptResult};
pub use models::{ModelsError, ModelsErrorKind, ModelsResult};
pub use validation::{ValidationError, ValidationErrorKind};
