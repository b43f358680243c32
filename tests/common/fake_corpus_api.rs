//! Fake corpus API server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves:
//! - `GET /search?q=` — canned envelope per query, empty success otherwise
//! - `GET /regions/{region}/terms` — canned envelope per region, `404`
//!   failure envelope otherwise
//!
//! Each canned response can carry a delay, so harnesses can make an early
//! query answer after a later one. Every request path and query is recorded
//! in arrival order.
//!
//! # Example
//!
//! ```rust,no_run
//! let api = FakeCorpusApi::start().await.unwrap();
//! api.on_search("gandrung", search_records()).await;
//!
//! let client = CorpusClient::new(api.base_url(), Duration::from_secs(1));
//! ```

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use super::fixtures::{envelope, failure_envelope};

/// A response the server will give for one query or region.
#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: String,
    delay: Duration,
}

impl Canned {
    fn json(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }
}

/// State shared between the router and test code.
#[derive(Default)]
struct CorpusState {
    searches: HashMap<String, Canned>,
    regions: HashMap<String, Canned>,
    requests: Vec<String>,
}

/// Handle to the running fake corpus API server.
pub struct FakeCorpusApi {
    addr: SocketAddr,
    state: Arc<Mutex<CorpusState>>,
}

impl FakeCorpusApi {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(CorpusState::default()));

        let app = Router::new()
            .route("/search", get(search))
            .route("/regions/{region}/terms", get(region_terms))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// Base URL for the API (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Answer `/search?q={query}` with a successful envelope around `data`.
    pub async fn on_search(&self, query: &str, data: Value) {
        self.on_search_delayed(query, data, Duration::ZERO).await;
    }

    /// Like [`on_search`](Self::on_search), answered only after `delay`.
    pub async fn on_search_delayed(&self, query: &str, data: Value, delay: Duration) {
        let mut canned = Canned::json(StatusCode::OK, envelope(data));
        canned.delay = delay;
        self.state.lock().await.searches.insert(query.to_string(), canned);
    }

    /// Answer `/search?q={query}` with `status` and an unsuccessful envelope.
    pub async fn fail_search(&self, query: &str, status: StatusCode, message: &str) {
        let canned = Canned::json(status, failure_envelope(message));
        self.state.lock().await.searches.insert(query.to_string(), canned);
    }

    /// Answer `/search?q={query}` with `200` and a raw, possibly invalid, body.
    pub async fn on_search_raw(&self, query: &str, body: &str) {
        let canned = Canned {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: Duration::ZERO,
        };
        self.state.lock().await.searches.insert(query.to_string(), canned);
    }

    /// Answer `/regions/{region}/terms` with a successful envelope around `data`.
    pub async fn on_region(&self, region: &str, data: Value) {
        let canned = Canned::json(StatusCode::OK, envelope(data));
        self.state.lock().await.regions.insert(region.to_string(), canned);
    }

    /// Every request received so far, as `path?query`.
    pub async fn requests(&self) -> Vec<String> {
        self.state.lock().await.requests.clone()
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn respond(canned: Canned) -> axum::response::Response {
    if !canned.delay.is_zero() {
        tokio::time::sleep(canned.delay).await;
    }
    (
        canned.status,
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
        .into_response()
}

async fn search(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<Mutex<CorpusState>>>,
) -> impl IntoResponse {
    let query = params.get("q").cloned().unwrap_or_default();
    let canned = {
        let mut state = state.lock().await;
        state.requests.push(format!("/search?q={query}"));
        state
            .searches
            .get(&query)
            .cloned()
            .unwrap_or_else(|| Canned::json(StatusCode::OK, envelope(serde_json::json!([]))))
    };
    respond(canned).await
}

async fn region_terms(
    Path(region): Path<String>,
    State(state): State<Arc<Mutex<CorpusState>>>,
) -> impl IntoResponse {
    let canned = {
        let mut state = state.lock().await;
        state.requests.push(format!("/regions/{region}/terms"));
        state.regions.get(&region).cloned().unwrap_or_else(|| {
            Canned::json(
                StatusCode::NOT_FOUND,
                failure_envelope(&format!("region not found: {region}")),
            )
        })
    };
    respond(canned).await
}
