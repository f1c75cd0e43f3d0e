//! Slide parser for slideprompt.
//!
//! Model replies are expected to look like
//!
//! ````text
//! **Slide 1: Opening**
//! ```
//! A dramatic full-bleed cover...
//! ```
//! ````
//!
//! but replies drift from that shape. Markers pick up heading hashes or lose
//! their titles, and fences go missing. [`parse`] never fails; it keeps text
//! it cannot place rather than dropping it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod marker;
mod parse;

pub use marker::{Marker, find_markers};
pub use parse::{ParsedReply, parse, parse_reply, render_markers};
