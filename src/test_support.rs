//! Test doubles shared by unit tests across contexts: a mocked record
//! store and a scripted Gemini HTTP server.

use crate::config::ModelSettings;
use crate::record::{
    domain::{OwnerEmail, Record, RecordId, RecordUpdate},
    ports::{RecordRepository, RecordRepositoryResult},
};
use async_trait::async_trait;
use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

mockall::mock! {
    pub RecordStore {}

    #[async_trait]
    impl RecordRepository for RecordStore {
        async fn store(&self, record: &Record) -> RecordRepositoryResult<()>;
        async fn find_by_id(&self, id: RecordId) -> RecordRepositoryResult<Option<Record>>;
        async fn find_by_owner(&self, owner: &OwnerEmail) -> RecordRepositoryResult<Vec<Record>>;
        async fn update(&self, update: &RecordUpdate) -> RecordRepositoryResult<Record>;
    }
}

/// One scripted response from [`StubGemini`].
#[derive(Debug, Clone)]
pub struct StubReply {
    status: StatusCode,
    body: String,
    delay: Duration,
}

impl StubReply {
    /// A successful `generateContent` response carrying `text`.
    pub fn text(text: &str) -> Self {
        let body = serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        });
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    /// An error response in the Gemini error envelope.
    pub fn error(status: u16, message: &str) -> Self {
        let body = serde_json::json!({ "error": { "code": status, "message": message } });
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    /// Holds the response back for `delay`.
    pub const fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Debug, Default)]
struct StubState {
    replies: Mutex<VecDeque<StubReply>>,
    seen: Mutex<Vec<(String, Option<String>)>>,
}

/// Local HTTP server answering every request from a reply script.
///
/// Requests beyond the script get a 500.
#[derive(Debug)]
pub struct StubGemini {
    base_url: String,
    state: Arc<StubState>,
    server: JoinHandle<()>,
}

impl StubGemini {
    /// Binds an ephemeral localhost port and starts serving `replies`.
    pub async fn start(replies: impl IntoIterator<Item = StubReply>) -> std::io::Result<Self> {
        let state = Arc::new(StubState {
            replies: Mutex::new(replies.into_iter().collect()),
            seen: Mutex::default(),
        });
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);
        let app = Router::new()
            .fallback(serve_reply)
            .with_state(Arc::clone(&state));
        let server = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, app).await {
                tracing::warn!(error = %err, "stub server stopped");
            }
        });
        Ok(Self {
            base_url,
            state,
            server,
        })
    }

    /// Model settings pointed at this server.
    pub fn settings(&self, request_timeout: Duration, max_retries: u32) -> ModelSettings {
        let mut settings = ModelSettings::new("stub-key");
        settings.base_url.clone_from(&self.base_url);
        settings.request_timeout = request_timeout;
        settings.max_retries = max_retries;
        settings
    }

    /// Request paths and `x-goog-api-key` values, in arrival order.
    pub fn requests(&self) -> Vec<(String, Option<String>)> {
        lock(&self.state.seen).clone()
    }
}

impl Drop for StubGemini {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn serve_reply(
    State(state): State<Arc<StubState>>,
    uri: Uri,
    headers: HeaderMap,
) -> (StatusCode, String) {
    let api_key = headers
        .get("x-goog-api-key")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    lock(&state.seen).push((uri.path().to_owned(), api_key));
    let next = lock(&state.replies).pop_front();
    let Some(reply) = next else {
        return (StatusCode::INTERNAL_SERVER_ERROR, "reply script exhausted".to_owned());
    };
    tokio::time::sleep(reply.delay).await;
    (reply.status, reply.body)
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
