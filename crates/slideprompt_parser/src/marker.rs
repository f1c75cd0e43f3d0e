//! Slide marker detection.

use regex::{Captures, Match, Regex};
use std::sync::LazyLock;

// `**Slide <N>: <Title>**`, `## **Slide <N>**`, `**Slide <N>:** <Title>`,
// optionally behind a list bullet or `<n>.` as in the plan the model is shown.
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?:#{1,6}[ \t]*)?(?:(?:\d+[.)]|[-*+])[ \t]+)?\*\*[ \t]*(?i:slide)\b[ \t]*(?P<number>[#\w \t]*?)[ \t]*(?::[ \t]*(?P<inner>[^\n]*?))?[ \t]*\*\*[ \t]*:?[ \t]*(?P<outer>[^\n]*?)[ \t]*$",
    )
    .expect("Valid slide marker regex")
});

/// A marker line found in a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker<'a> {
    /// Byte offset where the marker line starts
    pub start: usize,
    /// Byte offset just past the marker line
    pub end: usize,
    /// Explicit slide number; `None` when absent, non-numeric or zero
    pub number: Option<u32>,
    /// Title text, empty when the marker has none
    pub title: &'a str,
    /// Text after the closing `**` that is not the title; belongs to the body
    pub note: &'a str,
}

/// Every marker line in `text`, in order.
pub fn find_markers(text: &str) -> Vec<Marker<'_>> {
    MARKER
        .captures_iter(text)
        .filter_map(|caps| marker(text, &caps))
        .collect()
}

fn marker<'a>(text: &'a str, caps: &Captures<'a>) -> Option<Marker<'a>> {
    let whole = caps.get(0)?;
    let (number, label) = caps
        .name("number")
        .map_or((None, None), |m| split_number(text, m));
    let inner = caps.name("inner").filter(|m| !m.as_str().trim().is_empty());
    let outer = caps.name("outer").map_or("", |m| m.as_str().trim());

    // Words next to the number are title text, joined to any `: title` after them.
    let (title, note) = match (label, inner) {
        (Some(label), Some(inner)) => (text[label.start..inner.end()].trim(), outer),
        (Some(label), None) => (&text[label], outer),
        (None, Some(inner)) => (inner.as_str().trim(), outer),
        (None, None) => (outer.trim_start_matches(['-', ' ', '\t']), ""),
    };

    Some(Marker {
        start: whole.start(),
        end: whole.end(),
        number,
        title,
        note,
    })
}

/// Split the text between `Slide` and `:`/`**` into a leading number and the
/// byte range of whatever words follow it.
fn split_number(text: &str, m: Match<'_>) -> (Option<u32>, Option<std::ops::Range<usize>>) {
    let raw = m.as_str();
    let body = raw.trim_start().trim_start_matches('#');
    let digits = body.len() - body.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    let number = body[..digits].parse::<u32>().ok().filter(|n| *n > 0);

    let rest = &body[digits..];
    let label = rest.trim();
    if label.is_empty() {
        return (number, None);
    }
    let start = m.end() - rest.len() + (rest.len() - rest.trim_start().len());
    debug_assert_eq!(&text[start..start + label.len()], label);
    (number, Some(start..start + label.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(line: &str) -> (Option<u32>, String) {
        let markers = find_markers(line);
        assert_eq!(markers.len(), 1, "expected a marker in {:?}", line);
        (markers[0].number, markers[0].title.to_string())
    }

    #[test]
    fn test_marker_shapes() {
        assert_eq!(one("**Slide 1: Opening**"), (Some(1), "Opening".into()));
        assert_eq!(one("  ## **Slide 12: Data Wall**  "), (Some(12), "Data Wall".into()));
        assert_eq!(one("**Slide 3**"), (Some(3), String::new()));
        assert_eq!(one("**Slide 4:** Outside Title"), (Some(4), "Outside Title".into()));
        assert_eq!(one("**slide #5: Lower**"), (Some(5), "Lower".into()));
        assert_eq!(one("**Slide Three: Words**"), (None, "Three: Words".into()));
        assert_eq!(one("**Slide 0: Zero**"), (None, "Zero".into()));
        assert_eq!(one("**Slide: Untitled number**"), (None, "Untitled number".into()));
    }

    #[test]
    fn test_list_prefixes() {
        assert_eq!(one("1. **Slide 1: Cover**"), (Some(1), "Cover".into()));
        assert_eq!(one("12) **Slide 12**"), (Some(12), String::new()));
        assert_eq!(one("- **Slide 2: Data**"), (Some(2), "Data".into()));
        assert_eq!(one("  * **Slide 3: Quote**"), (Some(3), "Quote".into()));
        assert_eq!(one("+ **Slide 4**: Trailing"), (Some(4), "Trailing".into()));
    }

    #[test]
    fn test_words_after_number_are_title() {
        assert_eq!(one("**Slide 1 Intro**"), (Some(1), "Intro".into()));
        assert_eq!(one("**Slide 2 Big Picture: Overview**"), (Some(2), "Big Picture: Overview".into()));
        assert_eq!(one("**Slide Intro**"), (None, "Intro".into()));
    }

    #[test]
    fn test_note_after_titled_marker() {
        let markers = find_markers("**Slide 1: Cover** - dramatic opening shot");
        assert_eq!(markers[0].title, "Cover");
        assert_eq!(markers[0].note, "- dramatic opening shot");

        let markers = find_markers("**Slide 2** - **Concept**: floating diagram");
        assert_eq!(markers[0].title, "**Concept**: floating diagram");
        assert_eq!(markers[0].note, "");
    }

    #[test]
    fn test_non_markers() {
        assert!(find_markers("See **Slide 2: Data** for details").is_empty());
        assert!(find_markers("**Slides overview**").is_empty());
        assert!(find_markers("Slide 1: Plain").is_empty());
        assert!(find_markers("**Slide-specific notes**").is_empty());
        assert!(find_markers("Step 1. See **Slide 2**").is_empty());
    }
}
