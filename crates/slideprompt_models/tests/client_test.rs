mod test_utils;

use futures::StreamExt;
use slideprompt_core::{PromptPair, Role, SecondaryContent};
use slideprompt_error::ModelsErrorKind;
use slideprompt_models::{
    ChatCompletionChunk, ContentPart, GenerationClient, GenerationSettings, MessageContent, Usage,
};
use test_utils::{FakeReply, FakeTransport};

fn settings() -> GenerationSettings {
    GenerationSettings::new("", "test-model")
        .with_max_tokens(8000)
        .with_temperature(0.7)
}

fn prompt() -> PromptPair {
    PromptPair::new("SYSTEM", "USER")
}

#[tokio::test]
async fn test_buffered_returns_first_choice() -> anyhow::Result<()> {
    let transport = FakeTransport::replying("**Slide 1: Hi**", &[]);
    let client = GenerationClient::new(transport.clone(), &settings());

    let reply = client.generate(&prompt(), None).await?;
    assert_eq!(reply, "**Slide 1: Hi**");

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.model, "test-model");
    assert_eq!(request.max_tokens, Some(8000));
    assert_eq!(request.stream, None);
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, Role::System);
    assert_eq!(request.messages[0].content, MessageContent::Text("SYSTEM".into()));
    assert_eq!(request.messages[1].role, Role::User);
    assert_eq!(request.messages[1].content, MessageContent::Text("USER".into()));
    Ok(())
}

#[tokio::test]
async fn test_buffered_no_content_is_empty() -> anyhow::Result<()> {
    let transport = FakeTransport::new(FakeReply::Text(None, vec![]));
    let client = GenerationClient::new(transport, &settings());
    assert_eq!(client.generate(&prompt(), None).await?, "");
    Ok(())
}

#[tokio::test]
async fn test_secondary_content_makes_multipart_user_message() -> anyhow::Result<()> {
    let transport = FakeTransport::replying("ok", &[]);
    let client = GenerationClient::new(transport.clone(), &settings());
    let attachment = SecondaryContent::from_bytes("image/png", b"png");

    client.generate(&prompt(), Some(&attachment)).await?;

    let request = &transport.requests()[0];
    assert_eq!(
        request.messages[1].content,
        MessageContent::Parts(vec![
            ContentPart::text("USER"),
            ContentPart::image_url(attachment.url()),
        ])
    );
    assert_eq!(request.messages[0].content, MessageContent::Text("SYSTEM".into()));
    Ok(())
}

#[tokio::test]
async fn test_stream_skips_empty_deltas_and_keeps_order() -> anyhow::Result<()> {
    let transport = FakeTransport::new(FakeReply::Text(
        None,
        vec![
            None,
            Some("**Slide 1".into()),
            Some(String::new()),
            Some(": Cover**\n".into()),
            Some("body".into()),
        ],
    ));
    let client = GenerationClient::new(transport.clone(), &settings());

    let fragments: Vec<String> = client
        .generate_stream(&prompt(), None)
        .await?
        .map(|f| f.expect("fragment"))
        .collect()
        .await;

    assert_eq!(fragments, vec!["**Slide 1", ": Cover**\n", "body"]);
    assert_eq!(transport.requests()[0].stream, Some(true));
    Ok(())
}

#[tokio::test]
async fn test_stream_usage_chunk_adds_no_fragment() -> anyhow::Result<()> {
    let usage = Usage {
        prompt_tokens: 900,
        completion_tokens: 120,
        total_tokens: 1020,
    };
    let transport = FakeTransport::new(FakeReply::Chunks(vec![
        ChatCompletionChunk::from_text("**Slide 1: Cover**\n"),
        ChatCompletionChunk {
            usage: Some(usage),
            ..ChatCompletionChunk::from_text("body")
        },
        ChatCompletionChunk {
            usage: Some(usage),
            ..ChatCompletionChunk::default()
        },
    ]));
    let client = GenerationClient::new(transport, &settings());

    let fragments: Vec<String> = client
        .generate_stream(&prompt(), None)
        .await?
        .map(|f| f.expect("fragment"))
        .collect()
        .await;

    assert_eq!(fragments, vec!["**Slide 1: Cover**\n", "body"]);
    Ok(())
}

#[tokio::test]
async fn test_stream_concatenation_equals_buffered() -> anyhow::Result<()> {
    let reply = "**Slide 1: A**\n```\nalpha\n```\n**Slide 2: B**\n```\nbeta\n```";
    let deltas: Vec<&str> = reply.split_inclusive('\n').collect();
    let transport = FakeTransport::replying(reply, &deltas);
    let client = GenerationClient::new(transport, &settings());

    let buffered = client.generate(&prompt(), None).await?;
    let streamed: String = client
        .generate_stream(&prompt(), None)
        .await?
        .map(|f| f.expect("fragment"))
        .collect::<Vec<_>>()
        .await
        .concat();

    assert_eq!(buffered, streamed);
    Ok(())
}

#[tokio::test]
async fn test_api_failure_surfaces_endpoint_message() {
    let transport = FakeTransport::new(FakeReply::Status(401, "Incorrect API key".into()));
    let client = GenerationClient::new(transport.clone(), &settings());

    let err = client.generate(&prompt(), None).await.unwrap_err();
    assert!(matches!(err.kind, ModelsErrorKind::Api { status: 401, .. }));
    assert_eq!(err.user_message(), "Incorrect API key");

    let err = client.generate_stream(&prompt(), None).await.err().unwrap();
    assert_eq!(err.user_message(), "Incorrect API key");
    assert_eq!(transport.requests().len(), 2);
}
