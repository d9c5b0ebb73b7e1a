//! Server-sent event decoding for streamed completions.
//!
//! The API streams `data: {json}` lines separated by blank lines and ends
//! with `data: [DONE]`. Network chunks do not respect line boundaries, so
//! bytes are buffered until a full line is available.

use std::fmt::Display;

use bytes::{Bytes, BytesMut};
use futures_util::stream::BoxStream;
use futures_util::{Stream, StreamExt};
use tracing::warn;

use formate_core::{ChatProviderError, FragmentStream};

use crate::wire::{ErrorBody, StreamChunk};

/// State threaded through the `unfold` stream.
struct SseState<E> {
    stream: BoxStream<'static, Result<Bytes, E>>,
    buf: BytesMut,
    eof: bool,
    done: bool,
}

/// Outcome of one complete SSE line.
enum SseLine {
    Skip,
    Fragment(String),
    Done,
    Failed(ChatProviderError),
}

/// Turn an SSE byte stream into a stream of non-empty content fragments.
///
/// The stream ends after `[DONE]`, at end of input, or after yielding the
/// first error. Dropping it drops `byte_stream` and with it the connection.
pub(crate) fn fragment_stream<S, E>(byte_stream: S) -> FragmentStream
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: Display + Send + 'static,
{
    let state = SseState {
        stream: byte_stream.boxed(),
        buf: BytesMut::new(),
        eof: false,
        done: false,
    };

    futures_util::stream::unfold(state, |mut st| async move {
        if st.done {
            return None;
        }

        loop {
            if let Some(line_end) = find_newline(&st.buf) {
                let line = st.buf.split_to(line_end);
                match parse_line(&line) {
                    SseLine::Skip => continue,
                    SseLine::Fragment(text) => return Some((Ok(text), st)),
                    SseLine::Done => return None,
                    SseLine::Failed(err) => {
                        st.done = true;
                        return Some((Err(err), st));
                    }
                }
            }

            if st.eof {
                return None;
            }

            match st.stream.next().await {
                Some(Ok(chunk)) => st.buf.extend_from_slice(&chunk),
                Some(Err(e)) => {
                    warn!("Upstream stream error: {e}");
                    st.done = true;
                    return Some((Err(ChatProviderError::Network(e.to_string())), st));
                }
                None => {
                    // Flush a final line that lacks its newline
                    st.eof = true;
                    if !st.buf.is_empty() {
                        st.buf.extend_from_slice(b"\n");
                    }
                }
            }
        }
    })
    .boxed()
}

fn parse_line(line: &[u8]) -> SseLine {
    let line = String::from_utf8_lossy(line);
    let trimmed = line.trim();

    if trimmed.is_empty() || trimmed.starts_with(':') {
        return SseLine::Skip;
    }

    // event:, id: and retry: fields carry nothing we relay
    let Some(data) = trimmed.strip_prefix("data:") else {
        return SseLine::Skip;
    };
    let data = data.trim_start();

    if data == "[DONE]" {
        return SseLine::Done;
    }

    // Every StreamChunk field is optional, so an error body would also
    // decode as an empty chunk. Check for it first.
    if let Ok(body) = serde_json::from_str::<ErrorBody>(data) {
        warn!(message = %body.error.message, "Provider reported an error mid-stream");
        return SseLine::Failed(ChatProviderError::InvalidResponse(body.error.message));
    }

    match serde_json::from_str::<StreamChunk>(data) {
        Ok(chunk) => match chunk.into_content() {
            Some(text) if !text.is_empty() => SseLine::Fragment(text),
            _ => SseLine::Skip,
        },
        Err(e) => SseLine::Failed(ChatProviderError::InvalidResponse(format!(
            "malformed stream chunk: {e}"
        ))),
    }
}

/// Find the next newline in the buffer, returning the position after it.
fn find_newline(buf: &BytesMut) -> Option<usize> {
    buf.iter().position(|&b| b == b'\n').map(|pos| pos + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn chunks(parts: &[&str]) -> impl Stream<Item = Result<Bytes, io::Error>> + Send + 'static {
        let owned: Vec<Result<Bytes, io::Error>> = parts
            .iter()
            .map(|p| Ok(Bytes::from(p.to_string())))
            .collect();
        futures_util::stream::iter(owned)
    }

    fn delta(text: &str) -> String {
        format!(
            "data: {}\n\n",
            serde_json::json!({"choices": [{"index": 0, "delta": {"content": text}}]})
        )
    }

    async fn collect(stream: FragmentStream) -> Vec<Result<String, ChatProviderError>> {
        stream.collect().await
    }

    #[tokio::test]
    async fn test_yields_fragments_until_done() {
        let body = format!("{}{}data: [DONE]\n\n{}", delta("Hel"), delta("lo"), delta("late"));

        let items = collect(fragment_stream(chunks(&[&body]))).await;

        assert_eq!(items, vec![Ok("Hel".to_string()), Ok("lo".to_string())]);
    }

    #[tokio::test]
    async fn test_lines_split_across_chunks() {
        let body = format!("{}{}data: [DONE]\n\n", delta("über"), delta(" alles"));
        let bytes = body.as_bytes();
        // split inside the multi-byte character and inside the prefix
        let parts: Vec<Bytes> = vec![
            Bytes::copy_from_slice(&bytes[..3]),
            Bytes::copy_from_slice(&bytes[3..40]),
            Bytes::copy_from_slice(&bytes[40..]),
        ];
        let stream = futures_util::stream::iter(parts.into_iter().map(Ok::<_, io::Error>));

        let items = collect(fragment_stream(stream)).await;

        assert_eq!(items, vec![Ok("über".to_string()), Ok(" alles".to_string())]);
    }

    #[tokio::test]
    async fn test_skips_comments_roles_and_empty_deltas() {
        let role_only = "data: {\"choices\":[{\"delta\":{\"role\":\"assistant\"}}]}\n\n";
        let body = format!(
            ": keep-alive\n\nevent: message\n{role_only}{}{}data: [DONE]\n",
            delta(""),
            delta("x")
        );

        let items = collect(fragment_stream(chunks(&[&body]))).await;

        assert_eq!(items, vec![Ok("x".to_string())]);
    }

    #[tokio::test]
    async fn test_end_of_input_without_done() {
        let body = format!("{}data: {}", delta("a"), r#"{"choices":[{"delta":{"content":"b"}}]}"#);

        let items = collect(fragment_stream(chunks(&[&body]))).await;

        assert_eq!(items, vec![Ok("a".to_string()), Ok("b".to_string())]);
    }

    #[tokio::test]
    async fn test_transport_error_ends_stream() {
        let parts: Vec<Result<Bytes, io::Error>> = vec![
            Ok(Bytes::from(delta("partial"))),
            Err(io::Error::other("connection reset")),
            Ok(Bytes::from(delta("never"))),
        ];

        let items = collect(fragment_stream(futures_util::stream::iter(parts))).await;

        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Ok("partial".to_string()));
        assert!(matches!(&items[1], Err(ChatProviderError::Network(m)) if m.contains("reset")));
    }

    #[tokio::test]
    async fn test_error_payload_mid_stream() {
        let body = format!(
            "{}data: {}\n\n",
            delta("ok"),
            r#"{"error":{"message":"The server had an error"}}"#
        );

        let items = collect(fragment_stream(chunks(&[&body]))).await;

        assert_eq!(items[0], Ok("ok".to_string()));
        assert_eq!(
            items[1],
            Err(ChatProviderError::InvalidResponse("The server had an error".into()))
        );
        assert_eq!(items.len(), 2);
    }
}
