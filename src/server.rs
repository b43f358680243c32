//! JSON HTTP API over the lexicon.
//!
//! Every response, success or failure, uses the corpus envelope
//! `{ "success": bool, "data": [...], "message"?: string }`, so
//! `leksikon-feeds` can point at a running `leksikon serve` as its corpus.
//!
//! | Route | Data |
//! |-------|------|
//! | `GET /api/lexicon?q=&region=&page=&pageSize=` | one browse page, plus `pagination` |
//! | `GET /api/search?q=` | every ranked hit |
//! | `GET /api/regions` | region keys, names, areas and entry counts |
//! | `GET /api/regions/{region}/terms?filter=` | quick-filtered region terms |
//! | `GET /api/entries/{region}/{slug}` | the entry, as a one-element array |
//!
//! Unknown regions and slugs answer `404` and malformed query strings `400`,
//! both with `success: false`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use leksikon_core::data::REGIONS;
use leksikon_core::search::{filter_region_terms, search};
use leksikon_core::slug::slugify;
use leksikon_core::view::{LexiconView, Pagination, ViewRow};
use leksikon_core::{LexiconSource, LexiconStore, RegionTerm};

// ============================================================================
// Envelope
// ============================================================================

#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T: Serialize> Envelope<T> {
    fn ok(data: Vec<T>) -> Self {
        Self {
            success: true,
            data,
            message: None,
            pagination: None,
        }
    }
}

/// A failed request, rendered as an unsuccessful envelope.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status, message = %self.message, "api: request failed");
        let body = Envelope::<()> {
            success: false,
            data: Vec::new(),
            message: Some(self.message),
            pagination: None,
        };
        (self.status, Json(body)).into_response()
    }
}

// ============================================================================
// State + router
// ============================================================================

#[derive(Debug)]
pub struct ApiState {
    pub store: LexiconStore,
    /// Page size when a request does not name one.
    pub page_size: usize,
}

pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/api/lexicon", get(lexicon_page))
        .route("/api/search", get(search_entries))
        .route("/api/regions", get(list_regions))
        .route("/api/regions/{region}/terms", get(region_terms))
        .route("/api/entries/{region}/{slug}", get(entry_by_slug))
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(addr: SocketAddr, state: Arc<ApiState>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        entries = state.store.len(),
        "api: listening"
    );
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("api: shutting down");
        })
        .await?;
    Ok(())
}

// ============================================================================
// Handlers
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LexiconQuery {
    #[serde(default)]
    q: String,
    region: Option<String>,
    page: Option<usize>,
    page_size: Option<usize>,
}

/// GET /api/lexicon
async fn lexicon_page(
    State(state): State<Arc<ApiState>>,
    params: Result<Query<LexiconQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let region = params.region.filter(|r| !r.trim().is_empty());
    if let Some(key) = &region {
        if state.store.region(key).is_none() {
            return Err(ApiError::not_found(format!("unknown region: {key}")));
        }
    }

    let page_size = params.page_size.unwrap_or(state.page_size);
    let mut view = LexiconView::new(state.store.entries().to_vec(), page_size);
    view.set_region(region);
    view.set_query(params.q);

    let page = view.page_at(params.page.unwrap_or(1));
    let body = Envelope {
        success: true,
        data: page.rows,
        message: None,
        pagination: Some(page.pagination),
    };
    Ok(Json(body).into_response())
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

/// GET /api/search
///
/// Unpaginated. A blank query has no hits.
async fn search_entries(
    State(state): State<Arc<ApiState>>,
    params: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let results = search(state.store.entries(), &params.q);
    let rows: Vec<ViewRow<'_>> = results
        .iter()
        .map(|result| ViewRow {
            item: result.entry,
            slug: slugify(&result.entry.entry.term),
            matches: &result.matches,
            relevance: Some(result.relevance),
        })
        .collect();
    tracing::debug!(q = %params.q, hits = rows.len(), "api: search");
    Ok(Json(Envelope::ok(rows)).into_response())
}

#[derive(Debug, Serialize)]
struct RegionSummary<'a> {
    key: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    area: Option<&'a str>,
    count: usize,
}

/// GET /api/regions
async fn list_regions(State(state): State<Arc<ApiState>>) -> Response {
    let regions: Vec<RegionSummary<'_>> = state
        .store
        .regions()
        .into_iter()
        .map(|key| {
            let info = REGIONS.get(key);
            RegionSummary {
                key,
                name: info.map_or(key, |i| i.name),
                area: info.map(|i| i.area),
                count: state.store.region(key).map_or(0, <[_]>::len),
            }
        })
        .collect();
    Json(Envelope::ok(regions)).into_response()
}

#[derive(Debug, Deserialize)]
struct TermsQuery {
    #[serde(default)]
    filter: String,
}

/// GET /api/regions/{region}/terms
async fn region_terms(
    State(state): State<Arc<ApiState>>,
    Path(region): Path<String>,
    params: Result<Query<TermsQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let entries = state
        .store
        .region(&region)
        .ok_or_else(|| ApiError::not_found(format!("unknown region: {region}")))?;
    let terms: Vec<RegionTerm> = entries.iter().map(|item| RegionTerm::from(&item.entry)).collect();
    let kept = filter_region_terms(&terms, &params.filter);
    Ok(Json(Envelope::ok(kept)).into_response())
}

/// GET /api/entries/{region}/{slug}
async fn entry_by_slug(
    State(state): State<Arc<ApiState>>,
    Path((region, slug)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    if state.store.region(&region).is_none() {
        return Err(ApiError::not_found(format!("unknown region: {region}")));
    }
    let item = state
        .store
        .find_by_slug(Some(&region), &slug)
        .ok_or_else(|| ApiError::not_found(format!("no entry {slug} in {region}")))?;
    Ok(Json(Envelope::ok(vec![item])).into_response())
}

// ============================================================================
// Tests
// ============================================================================
