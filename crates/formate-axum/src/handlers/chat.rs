//! OpenAI chat relay handlers.
//!
//! - `POST /chat`: single-shot completion, always 200 with a `ChatEnvelope`
//! - `POST /chat/stream`: chunked plain-text relay of streamed fragments
//! - `GET /models`: the fixed list of supported models

use std::convert::Infallible;

use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::Response;
use futures_util::future::ready;
use futures_util::{Stream, StreamExt};
use serde::{Deserialize, Serialize};

use formate_core::{ChatEnvelope, ChatMessage, DEFAULT_CHAT_MODEL, FragmentStream, SUPPORTED_MODELS};

use crate::error::HttpError;
use crate::state::AppState;

/// Request body shared by both chat endpoints.
///
/// A `stream` flag is accepted for compatibility and ignored: the route
/// decides whether the response streams.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub model: Option<String>,
}

impl ChatRequest {
    fn into_parts(self) -> (Vec<ChatMessage>, String) {
        let model = self
            .model
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string());
        (self.messages, model)
    }
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<&'static str>,
}

/// Single-shot completion. Provider failures are reported inside the envelope.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatEnvelope>, HttpError> {
    let Json(request) = payload?;
    let (messages, model) = request.into_parts();

    Ok(Json(state.chat.create_chat_completion(messages, model).await))
}

/// Streamed completion relayed as chunked plain text.
///
/// The first fragment is awaited before the status line is committed, so a
/// provider that fails up front still gets a 500 with a JSON error body.
pub async fn chat_stream(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Response, HttpError> {
    let Json(request) = payload?;
    let (messages, model) = request.into_parts();

    let mut fragments = state
        .chat
        .create_streaming_chat_completion(messages, model)
        .await?;

    let first = match fragments.next().await {
        Some(Ok(text)) => Some(text),
        Some(Err(e)) => return Err(e.into()),
        None => None,
    };

    let body = relay_body(first, fragments);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .header(header::TRANSFER_ENCODING, "chunked")
        .header(header::CACHE_CONTROL, "no-cache")
        .header("x-accel-buffering", "no")
        .body(Body::from_stream(body))
        .map_err(|e| HttpError::Internal(e.to_string()))
}

/// Supported chat models.
pub async fn models() -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: SUPPORTED_MODELS.to_vec(),
    })
}

/// Body chunks: the already-received first fragment, then the rest.
///
/// A mid-stream failure cannot change the status any more; it is written as
/// a trailing `\n[error] <message>` chunk and the body ends.
fn relay_body(
    first: Option<String>,
    rest: FragmentStream,
) -> impl Stream<Item = Result<String, Infallible>> + Send {
    futures_util::stream::iter(first.map(Ok))
        .chain(rest)
        .scan(false, |failed, item| {
            if *failed {
                return ready(None);
            }
            ready(Some(match item {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(error = %e, "Chat stream failed mid-response");
                    *failed = true;
                    format!("\n[error] {e}")
                }
            }))
        })
        .filter(|chunk| ready(!chunk.is_empty()))
        .map(Ok)
}
