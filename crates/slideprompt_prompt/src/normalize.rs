//! Content normalization.

use slideprompt_core::ContentInput;
use tracing::instrument;

/// Label used when a topic submission carries no topic.
pub const DEFAULT_TOPIC: &str = "General presentation";

const DEFAULT_FILE_NAME: &str = "uploaded file";

/// Collapse any content variant into the text embedded in the user instruction.
///
/// Missing fields never fail; they degrade to an empty or generic string.
/// Callers reject a blank result before assembly.
///
/// # Examples
///
/// ```
/// use slideprompt_core::ContentInput;
/// use slideprompt_prompt::normalize;
///
/// assert_eq!(normalize(&ContentInput::topic("Rust")), "Topic: Rust");
/// assert_eq!(
///     normalize(&ContentInput::url("https://example.com", None)),
///     "Create a presentation about the content from: https://example.com"
/// );
/// ```
#[instrument(skip(input), fields(kind = input.kind()))]
pub fn normalize(input: &ContentInput) -> String {
    match input {
        ContentInput::Text { text } => text.clone().unwrap_or_default(),
        ContentInput::Topic { topic } => {
            format!("Topic: {}", present(topic).unwrap_or(DEFAULT_TOPIC))
        }
        ContentInput::File {
            file_content,
            file_name,
        } => match present(file_content) {
            Some(body) => format!(
                "Content from file \"{}\":\n{}",
                present(file_name).unwrap_or(DEFAULT_FILE_NAME),
                body
            ),
            None => String::new(),
        },
        ContentInput::Url { url, url_content } => match (present(url), present(url_content)) {
            (url, Some(body)) => {
                format!("Content from URL \"{}\":\n{}", url.unwrap_or_default(), body)
            }
            (Some(url), None) => {
                format!("Create a presentation about the content from: {}", url)
            }
            (None, None) => String::new(),
        },
    }
}

/// Empty strings count as absent.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_count_as_missing() {
        assert_eq!(present(&Some(String::new())), None);
        assert_eq!(present(&None), None);
        assert_eq!(present(&Some("x".into())), Some("x"));
    }
}
