//! Server-Sent Events decoding for streamed completions.
//!
//! Only `data` fields matter here. An event ends at a blank line and may arrive
//! split across network chunks or packed together with others. CRLF line
//! endings are accepted. Comment lines (leading `:`) and other fields are skipped.

use async_stream::stream;
use futures::{Stream, StreamExt, pin_mut};
use slideprompt_error::{ModelsError, ModelsErrorKind, ModelsResult};
use std::fmt::Display;

/// Data payload that ends an OpenAI-style stream.
pub const DONE_MARKER: &str = "[DONE]";

/// Incremental decoder turning raw bytes into event data payloads.
#[derive(Debug, Default)]
pub struct SseDecoder {
    pending: Vec<u8>,
    data: Vec<String>,
}

impl SseDecoder {
    /// Create an empty decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one network chunk; returns every event completed by it.
    pub fn feed(&mut self, chunk: &[u8]) -> ModelsResult<Vec<String>> {
        self.pending.extend_from_slice(chunk);
        let mut events = Vec::new();

        while let Some(pos) = self.pending.iter().position(|b| *b == b'\n') {
            let raw: Vec<u8> = self.pending.drain(..=pos).collect();
            let line = decode_line(&raw[..raw.len() - 1])?;
            if let Some(event) = self.process_line(line) {
                events.push(event);
            }
        }

        Ok(events)
    }

    /// Flush a trailing line and event left open when the body ends.
    pub fn finish(mut self) -> ModelsResult<Vec<String>> {
        let mut events = Vec::new();
        if !self.pending.is_empty() {
            let raw = std::mem::take(&mut self.pending);
            let line = decode_line(&raw)?;
            if let Some(event) = self.process_line(line) {
                events.push(event);
            }
        }
        if let Some(event) = self.dispatch() {
            events.push(event);
        }
        Ok(events)
    }

    fn process_line(&mut self, line: &str) -> Option<String> {
        if line.is_empty() {
            return self.dispatch();
        }
        if line.starts_with(':') {
            return None;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };
        if field == "data" {
            self.data.push(value.to_string());
        }
        None
    }

    fn dispatch(&mut self) -> Option<String> {
        if self.data.is_empty() {
            return None;
        }
        let event = self.data.join("\n");
        self.data.clear();
        Some(event)
    }
}

fn decode_line(raw: &[u8]) -> ModelsResult<&str> {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    std::str::from_utf8(raw).map_err(|e| {
        ModelsError::new(ModelsErrorKind::Stream(format!(
            "Invalid UTF-8 in event stream: {}",
            e
        )))
    })
}

/// Decode a byte stream into event data payloads.
///
/// The sequence ends at the [`DONE_MARKER`] event, at the end of the body, or
/// right after the first error.
pub fn data_events<S, B, E>(body: S) -> impl Stream<Item = ModelsResult<String>>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: Display,
{
    stream! {
        let mut decoder = SseDecoder::new();
        pin_mut!(body);

        while let Some(chunk) = body.next().await {
            let events = match chunk {
                Ok(bytes) => decoder.feed(bytes.as_ref()),
                Err(e) => Err(ModelsError::new(ModelsErrorKind::Stream(e.to_string()))),
            };
            match events {
                Ok(events) => {
                    for event in events {
                        if event == DONE_MARKER {
                            return;
                        }
                        yield Ok(event);
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Event stream broke off");
                    yield Err(e);
                    return;
                }
            }
        }

        match decoder.finish() {
            Ok(events) => {
                for event in events {
                    if event == DONE_MARKER {
                        return;
                    }
                    yield Ok(event);
                }
            }
            Err(e) => yield Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::stream;

    fn collect(chunks: Vec<&'static str>) -> Vec<ModelsResult<String>> {
        let body = stream::iter(
            chunks
                .into_iter()
                .map(|c| Ok::<_, std::convert::Infallible>(c.as_bytes())),
        );
        block_on(data_events(body).collect())
    }

    fn payloads(chunks: Vec<&'static str>) -> Vec<String> {
        collect(chunks)
            .into_iter()
            .map(|r| r.expect("no stream error"))
            .collect()
    }

    #[test]
    fn test_packed_events() {
        let events = payloads(vec!["data: a\n\ndata: b\n\ndata: [DONE]\n\n"]);
        assert_eq!(events, vec!["a", "b"]);
    }

    #[test]
    fn test_split_events() {
        let events = payloads(vec!["da", "ta: {\"x\"", ":1}\n", "\ndata: two\n\n"]);
        assert_eq!(events, vec!["{\"x\":1}", "two"]);
    }

    #[test]
    fn test_crlf_and_comments() {
        let events = payloads(vec![": keep-alive\r\n\r\nevent: message\r\ndata: hi\r\n\r\n"]);
        assert_eq!(events, vec!["hi"]);
    }

    #[test]
    fn test_done_stops_reading() {
        let events = payloads(vec!["data: a\n\ndata: [DONE]\n\ndata: late\n\n"]);
        assert_eq!(events, vec!["a"]);
    }

    #[test]
    fn test_unterminated_final_event() {
        let events = payloads(vec!["data: a\n\ndata: tail"]);
        assert_eq!(events, vec!["a", "tail"]);
    }

    #[test]
    fn test_multibyte_split_across_chunks() {
        let mut decoder = SseDecoder::new();
        let bytes = "data: café\n\n".as_bytes();
        let split = bytes.len() - 3;
        assert!(decoder.feed(&bytes[..split]).unwrap().is_empty());
        assert_eq!(decoder.feed(&bytes[split..]).unwrap(), vec!["café"]);
    }

    #[test]
    fn test_transport_error_ends_stream() {
        let body = stream::iter(vec![
            Ok(b"data: a\n\n".as_slice()),
            Err("connection reset"),
            Ok(b"data: b\n\n".as_slice()),
        ]);
        let items: Vec<_> = block_on(data_events(body).collect());
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_ref().unwrap(), "a");
        assert!(matches!(
            items[1].as_ref().unwrap_err().kind,
            ModelsErrorKind::Stream(_)
        ));
    }
}
