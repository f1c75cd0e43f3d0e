//! Test utilities for slideprompt_models tests.

use async_trait::async_trait;
use futures::stream;
use slideprompt_error::{ModelsError, ModelsErrorKind, ModelsResult};
use slideprompt_models::{
    ChatCompletionChunk, ChatCompletionRequest, ChatCompletionResponse, ChatTransport, ChunkStream,
    Choice, ChoiceMessage,
};
use std::sync::{Arc, Mutex};

/// What the fake endpoint answers with.
#[derive(Debug, Clone)]
pub enum FakeReply {
    /// Buffered content (`None` for a `null` content field) or streamed deltas
    Text(Option<String>, Vec<Option<String>>),
    /// Streamed chunks exactly as given
    Chunks(Vec<ChatCompletionChunk>),
    /// Non-success status
    Status(u16, String),
}

/// In-process transport recording every request it receives.
#[derive(Debug, Clone)]
pub struct FakeTransport {
    reply: FakeReply,
    requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
}

#[allow(dead_code)]
impl FakeTransport {
    /// Reply with `text` buffered and with `deltas` when streaming.
    pub fn replying(text: &str, deltas: &[&str]) -> Self {
        Self::new(FakeReply::Text(
            Some(text.to_string()),
            deltas.iter().map(|d| Some(d.to_string())).collect(),
        ))
    }

    /// Reply with the given shape.
    pub fn new(reply: FakeReply) -> Self {
        Self {
            reply,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Requests seen so far.
    pub fn requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().expect("lock poisoned").clone()
    }

    fn record(&self, request: &ChatCompletionRequest) {
        self.requests
            .lock()
            .expect("lock poisoned")
            .push(request.clone());
    }
}

#[async_trait]
impl ChatTransport for FakeTransport {
    async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> ModelsResult<ChatCompletionResponse> {
        self.record(request);
        match &self.reply {
            FakeReply::Text(text, _) => Ok(ChatCompletionResponse {
                choices: vec![Choice {
                    message: ChoiceMessage {
                        role: Some("assistant".into()),
                        content: text.clone(),
                    },
                    ..Choice::default()
                }],
                ..ChatCompletionResponse::default()
            }),
            FakeReply::Chunks(_) => Ok(ChatCompletionResponse::default()),
            FakeReply::Status(status, message) => Err(ModelsError::new(ModelsErrorKind::Api {
                status: *status,
                message: message.clone(),
            })),
        }
    }

    async fn complete_stream(&self, request: &ChatCompletionRequest) -> ModelsResult<ChunkStream> {
        self.record(request);
        match &self.reply {
            FakeReply::Text(_, deltas) => {
                let chunks: Vec<ModelsResult<ChatCompletionChunk>> = deltas
                    .iter()
                    .map(|delta| {
                        Ok(match delta {
                            Some(text) => ChatCompletionChunk::from_text(text.clone()),
                            None => ChatCompletionChunk::default(),
                        })
                    })
                    .collect();
                Ok(Box::pin(stream::iter(chunks)))
            }
            FakeReply::Chunks(chunks) => {
                let chunks: Vec<ModelsResult<ChatCompletionChunk>> =
                    chunks.iter().cloned().map(Ok).collect();
                Ok(Box::pin(stream::iter(chunks)))
            }
            FakeReply::Status(status, message) => Err(ModelsError::new(ModelsErrorKind::Api {
                status: *status,
                message: message.clone(),
            })),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}
