use slideprompt_core::ContentInput;
use slideprompt_prompt::{DEFAULT_TOPIC, normalize};

#[test]
fn test_text_passes_through() {
    assert_eq!(normalize(&ContentInput::text("Hello deck")), "Hello deck");
    assert_eq!(normalize(&ContentInput::Text { text: None }), "");
}

#[test]
fn test_topic_gets_label() {
    assert_eq!(
        normalize(&ContentInput::topic("Quantum Computing")),
        "Topic: Quantum Computing"
    );
    assert_eq!(
        normalize(&ContentInput::Topic { topic: None }),
        format!("Topic: {}", DEFAULT_TOPIC)
    );
}

#[test]
fn test_file_combines_name_and_text() {
    let named = ContentInput::file(Some("notes.md".to_string()), "line one\nline two");
    assert_eq!(
        normalize(&named),
        "Content from file \"notes.md\":\nline one\nline two"
    );

    let unnamed = ContentInput::file(None, "body");
    assert_eq!(normalize(&unnamed), "Content from file \"uploaded file\":\nbody");

    let missing = ContentInput::File {
        file_content: None,
        file_name: Some("empty.pdf".to_string()),
    };
    assert_eq!(normalize(&missing), "");
}

#[test]
fn test_url_prefers_extracted_text() {
    let extracted = ContentInput::url("https://example.com/a", Some("Article body".to_string()));
    assert_eq!(
        normalize(&extracted),
        "Content from URL \"https://example.com/a\":\nArticle body"
    );

    let bare = ContentInput::url("https://example.com/b", None);
    assert_eq!(
        normalize(&bare),
        "Create a presentation about the content from: https://example.com/b"
    );

    let nothing = ContentInput::Url {
        url: None,
        url_content: None,
    };
    assert_eq!(normalize(&nothing), "");
}
