//! Shared fixtures for router integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode, header};
use futures_util::StreamExt;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use formate_axum::{AppContext, ServerConfig, create_router};
use formate_core::{
    ChatCompletion, ChatCompletionPort, ChatCompletionRequest, ChatMessage, ChatProviderError,
    FragmentStream, TokenUsage,
};
use formate_db::{CoreFactory, setup_test_database};

/// What `MockProvider::stream` does.
pub enum StreamPlan {
    Fragments(Vec<Result<String, ChatProviderError>>),
    FailUpfront(ChatProviderError),
}

/// Chat provider double that records requests and replays canned results.
pub struct MockProvider {
    completion: Result<ChatCompletion, ChatProviderError>,
    stream: StreamPlan,
    pub requests: Mutex<Vec<ChatCompletionRequest>>,
}

impl MockProvider {
    /// A deterministic provider: `complete` returns the concatenation of
    /// the fragments `stream` yields.
    pub fn replying(fragments: &[&str]) -> Self {
        Self {
            completion: Ok(ChatCompletion {
                message: Some(ChatMessage::assistant(fragments.concat())),
                usage: Some(TokenUsage {
                    prompt_tokens: 12,
                    completion_tokens: 3,
                    total_tokens: 15,
                }),
            }),
            stream: StreamPlan::Fragments(
                fragments.iter().map(|f| Ok((*f).to_string())).collect(),
            ),
            requests: Mutex::new(vec![]),
        }
    }

    pub fn failing(err: ChatProviderError) -> Self {
        Self {
            completion: Err(err.clone()),
            stream: StreamPlan::FailUpfront(err),
            requests: Mutex::new(vec![]),
        }
    }

    pub fn with_stream(mut self, plan: StreamPlan) -> Self {
        self.stream = plan;
        self
    }

    pub fn models_requested(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.model.clone())
            .collect()
    }
}

#[async_trait]
impl ChatCompletionPort for MockProvider {
    async fn complete(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletion, ChatProviderError> {
        self.requests.lock().unwrap().push(request);
        self.completion.clone()
    }

    async fn stream(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<FragmentStream, ChatProviderError> {
        self.requests.lock().unwrap().push(request);
        match &self.stream {
            StreamPlan::Fragments(items) => Ok(futures_util::stream::iter(items.clone()).boxed()),
            StreamPlan::FailUpfront(err) => Err(err.clone()),
        }
    }
}

/// Router over a fresh in-memory database and the given provider.
pub async fn test_app_with(config: &ServerConfig, provider: Arc<MockProvider>) -> Router {
    let pool = setup_test_database().await.unwrap();
    let ctx = AppContext::new(
        Arc::new(CoreFactory::build_pdf_format_service(pool)),
        provider,
    );
    create_router(ctx, config)
}

pub async fn test_app(provider: Arc<MockProvider>) -> Router {
    test_app_with(&ServerConfig::with_defaults(), provider).await
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, HeaderMap, Bytes) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, HeaderMap, Bytes) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, HeaderMap, Bytes) {
    post_raw(app, uri, &body.to_string()).await
}

/// Run a GraphQL operation and return the whole response document.
pub async fn graphql(app: &Router, query: &str, variables: Value) -> Value {
    let (status, _, body) = post_json(
        app,
        "/graphql",
        &json!({"query": query, "variables": variables}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}
