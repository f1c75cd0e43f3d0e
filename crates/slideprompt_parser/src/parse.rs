//! Reply segmentation.

use crate::marker::find_markers;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use slideprompt_core::SlideRecord;
use tracing::{debug, instrument};

/// A reply split into slides, plus whatever the model wrote before the first marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ParsedReply {
    /// Text before the first marker, trimmed; empty when there is none
    preamble: String,
    /// Slides in reply order
    slides: Vec<SlideRecord>,
}

impl ParsedReply {
    /// Take the slides, dropping the preamble.
    pub fn into_slides(self) -> Vec<SlideRecord> {
        self.slides
    }
}

/// Parse a reply into slide records.
///
/// # Examples
///
/// ```
/// use slideprompt_parser::parse;
///
/// let slides = parse("**Slide 1: Hello**\n```\nA cover\n```");
/// assert_eq!(slides.len(), 1);
/// assert_eq!(slides[0].title(), "Hello");
/// assert_eq!(slides[0].prompt_body(), "A cover");
/// ```
pub fn parse(reply: &str) -> Vec<SlideRecord> {
    parse_reply(reply).into_slides()
}

/// Parse a reply, keeping the preamble.
///
/// - Each marker opens a slide that runs to the next marker or the end.
///   Text after a titled marker's closing `**` starts the body.
/// - Fence delimiters are dropped, text sharing their line is kept, and the
///   body is trimmed.
/// - A marker without a usable number gets the previous number plus one.
///   Explicit numbers are kept as written, duplicates included.
/// - A non-blank reply without markers becomes one untitled slide 1 holding
///   the whole reply; a blank reply yields no slides.
#[instrument(skip(reply), fields(reply_len = reply.len()))]
pub fn parse_reply(reply: &str) -> ParsedReply {
    if reply.trim().is_empty() {
        debug!("Blank reply, no slides");
        return ParsedReply::default();
    }

    let markers = find_markers(reply);
    let Some(first) = markers.first() else {
        debug!("No slide markers found, falling back to a single slide");
        return ParsedReply {
            preamble: String::new(),
            slides: vec![SlideRecord::new(1, "", reply)],
        };
    };

    let preamble = reply[..first.start].trim().to_string();
    let mut previous = 0u32;
    let mut slides = Vec::with_capacity(markers.len());

    for (i, marker) in markers.iter().enumerate() {
        let body_end = markers.get(i + 1).map_or(reply.len(), |next| next.start);
        let number = match marker.number {
            Some(n) => n,
            None => {
                let assigned = previous.saturating_add(1);
                debug!(assigned, title = marker.title, "Renumbered slide marker");
                assigned
            }
        };
        previous = number;

        let body = format!("{}{}", marker.note, &reply[marker.end..body_end]);
        slides.push(SlideRecord::new(number, marker.title, strip_fences(&body)));
    }

    debug!(slide_count = slides.len(), preamble_len = preamble.len(), "Parsed reply");
    ParsedReply { preamble, slides }
}

const FENCE: &str = "```";

fn strip_fences(segment: &str) -> String {
    segment
        .lines()
        .filter_map(unfence)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Remove fence delimiters from one line. `None` when only a delimiter or a
/// language tag was on it.
fn unfence(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let (opened, rest) = match trimmed.strip_prefix(FENCE) {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let (closed, rest) = match rest.strip_suffix(FENCE) {
        Some(rest) => (true, rest),
        None => (false, rest),
    };
    if !opened && !closed {
        return Some(line);
    }

    let rest = rest.trim();
    // A single word right after an opening fence is its language tag.
    if opened && !closed && !rest.contains(char::is_whitespace) {
        return None;
    }
    (!rest.is_empty()).then_some(rest)
}

/// Render records back into marker form, one fenced block per slide.
///
/// Parsing the output yields the same records.
pub fn render_markers(slides: &[SlideRecord]) -> String {
    slides
        .iter()
        .map(|slide| {
            let marker = if slide.title().is_empty() {
                format!("**Slide {}**", slide.slide_number())
            } else if slide.title().contains("**") {
                format!("**Slide {}:** {}", slide.slide_number(), slide.title())
            } else {
                format!("**Slide {}: {}**", slide.slide_number(), slide.title())
            };
            format!("{}\n```\n{}\n```", marker, slide.prompt_body())
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_fences() {
        assert_eq!(strip_fences("\n```text\nbody line\n  ```\n\n"), "body line");
        assert_eq!(strip_fences("\nno fence\nat all\n"), "no fence\nat all");
    }

    #[test]
    fn test_fence_line_text_is_kept() {
        assert_eq!(strip_fences("\n```A dramatic cover```"), "A dramatic cover");
        assert_eq!(strip_fences("```A dramatic\ncover with particles```"), "A dramatic\ncover with particles");
        assert_eq!(strip_fences("```markdown\nbody\n```"), "body");
        assert_eq!(strip_fences("``` \n  indented\n```"), "indented");
    }

    #[test]
    fn test_unfence() {
        assert_eq!(unfence("  plain  "), Some("  plain  "));
        assert_eq!(unfence("```"), None);
        assert_eq!(unfence("```json"), None);
        assert_eq!(unfence("```x```"), Some("x"));
        assert_eq!(unfence("last line```"), Some("last line"));
        assert_eq!(unfence("``````"), None);
    }
}
