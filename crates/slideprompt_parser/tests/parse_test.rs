use slideprompt_core::SlideRecord;
use slideprompt_parser::{parse, parse_reply, render_markers};

fn well_formed(count: u32) -> String {
    (1..=count)
        .map(|n| format!("**Slide {n}: Title {n}**\n```\nPrompt body for slide {n}.\nSecond line.\n```"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn numbers(slides: &[SlideRecord]) -> Vec<u32> {
    slides.iter().map(|s| *s.slide_number()).collect()
}

#[test]
fn test_well_formed_reply() {
    for count in [1, 3, 20] {
        let slides = parse(&well_formed(count));
        assert_eq!(numbers(&slides), (1..=count).collect::<Vec<_>>());
        assert_eq!(slides[0].title(), "Title 1");
        assert_eq!(
            slides[0].prompt_body(),
            "Prompt body for slide 1.\nSecond line."
        );
    }
}

#[test]
fn test_three_slide_scenario() {
    let reply = "**Slide 1: Quantum Leap**\n```\nCover with qubits.\n```\n\n**Slide 2: Superposition**\n```\nBloch sphere hero.\n```\n\n**Slide 3: The Road Ahead**\n```\nRecap. Footer: page '3'.\n```";
    let slides = parse(reply);
    assert_eq!(
        slides,
        vec![
            SlideRecord::new(1, "Quantum Leap", "Cover with qubits."),
            SlideRecord::new(2, "Superposition", "Bloch sphere hero."),
            SlideRecord::new(3, "The Road Ahead", "Recap. Footer: page '3'."),
        ]
    );
}

#[test]
fn test_no_markers_falls_back_to_one_slide() {
    let reply = "Here is a single prompt with no structure at all.";
    let slides = parse(reply);
    assert_eq!(slides, vec![SlideRecord::new(1, "", reply)]);
}

#[test]
fn test_fallback_keeps_text_verbatim() {
    let reply = "\n  Indented first line\n```\nfenced\n```\n";
    let slides = parse(reply);
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].prompt_body(), reply);
}

#[test]
fn test_empty_reply() {
    assert!(parse("").is_empty());
    assert!(parse("  \n\t\n").is_empty());
}

#[test]
fn test_missing_fences_and_titles() {
    let reply = "**Slide 1**\nCover body\n**Slide 2: Data**\nChart body\nmore\n";
    let slides = parse(reply);
    assert_eq!(
        slides,
        vec![
            SlideRecord::new(1, "", "Cover body"),
            SlideRecord::new(2, "Data", "Chart body\nmore"),
        ]
    );
}

#[test]
fn test_body_on_fence_line_is_kept() {
    let slides = parse("**Slide 1: Cover**\n```A dramatic cover with particles```");
    assert_eq!(
        slides,
        vec![SlideRecord::new(1, "Cover", "A dramatic cover with particles")]
    );

    let slides = parse("**Slide 1: Cover**\n```text\nGlowing title\n```\n**Slide 2: End**\n```Fade out\non the logo```");
    assert_eq!(slides[0].prompt_body(), "Glowing title");
    assert_eq!(slides[1].prompt_body(), "Fade out\non the logo");
}

#[test]
fn test_numbered_list_markers() {
    let reply = "1. **Slide 1: Cover**\n```\nalpha\n```\n2. **Slide 2: End**\n```\nbeta\n```";
    assert_eq!(
        parse(reply),
        vec![
            SlideRecord::new(1, "Cover", "alpha"),
            SlideRecord::new(2, "End", "beta"),
        ]
    );

    let reply = "- **Slide 1**\nfirst\n* **Slide 2: Data**\nsecond";
    assert_eq!(numbers(&parse(reply)), vec![1, 2]);
}

#[test]
fn test_text_after_titled_marker_opens_body() {
    let slides = parse("**Slide 1: Cover** - dramatic opening shot\n```\nbody\n```");
    assert_eq!(
        slides,
        vec![SlideRecord::new(1, "Cover", "- dramatic opening shot\nbody")]
    );
}

#[test]
fn test_words_after_number_become_title() {
    let slides = parse("**Slide 1 Intro**\nbody\n**Slide 2 Market Size: 2030**\nchart");
    assert_eq!(
        slides,
        vec![
            SlideRecord::new(1, "Intro", "body"),
            SlideRecord::new(2, "Market Size: 2030", "chart"),
        ]
    );
}

#[test]
fn test_non_numeric_markers_are_renumbered() {
    let reply = "**Slide One: A**\nbody a\n**Slide 4: B**\nbody b\n**Slide next: C**\nbody c\n**Slide: D**\nbody d";
    assert_eq!(numbers(&parse(reply)), vec![1, 4, 5, 6]);
}

#[test]
fn test_duplicate_numbers_are_preserved() {
    let reply = "**Slide 1: A**\na\n**Slide 2: B**\nb\n**Slide 2: C**\nc";
    let slides = parse(reply);
    assert_eq!(numbers(&slides), vec![1, 2, 2]);
    assert_eq!(slides[2].title(), "C");
}

#[test]
fn test_heading_and_crlf_markers() {
    let reply = "### **Slide 1: Intro**\r\n```\r\nbody one\r\n```\r\n\r\n## **Slide 2:** Close\r\nbody two\r\n";
    let slides = parse(reply);
    assert_eq!(
        slides,
        vec![
            SlideRecord::new(1, "Intro", "body one"),
            SlideRecord::new(2, "Close", "body two"),
        ]
    );
}

#[test]
fn test_preamble_is_kept_apart() {
    let reply = "Sure! Here are your prompts.\n\n**Slide 1: Cover**\n```\nbody\n```";
    let parsed = parse_reply(reply);
    assert_eq!(parsed.preamble(), "Sure! Here are your prompts.");
    assert_eq!(parsed.slides().len(), 1);
    assert!(!parsed.slides()[0].prompt_body().contains("Sure!"));
}

#[test]
fn test_parse_is_idempotent() {
    let replies = [
        well_formed(5),
        "Intro text\n**Slide 1**\nno fence body\n**Slide x: Renumbered**\n```\ninside\n```\n**Slide 2: Dup**\nd".to_string(),
        "## **Slide 3:** Outer title\n\n```md\nfirst\n\nsecond\n```\n".to_string(),
        "Plain reply without markers".to_string(),
        "1. **Slide 1 Intro** - wide shot\n```Neon skyline```\n2. **Slide 2** - **Concept**: layered diagram\nbody".to_string(),
    ];

    for reply in replies {
        let first = parse(&reply);
        let second = parse(&render_markers(&first));
        assert_eq!(first, second, "reply: {:?}", reply);
    }
}

#[test]
fn test_records_serialize_camel_case() {
    let json = serde_json::to_value(parse("**Slide 1: T**\nbody")).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{"slideNumber": 1, "title": "T", "promptBody": "body"}])
    );
}
