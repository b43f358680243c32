#![allow(unused)]
//! JSON API integration harness.
//!
//! # What this covers
//!
//! - **Envelope**: every route answers `{ success, data, message? }`, with
//!   `404` plus `success: false` for unknown regions and slugs, and `400`
//!   plus `success: false` for query strings that do not parse.
//! - **Browse pages**: `page`, `pageSize`, `region` and `q` compose, and out
//!   of range pages are empty rather than clamped.
//! - **Search, regions, region terms and entry lookup** over the builtin
//!   lexicon.
//!
//! Requests go through the router with `tower::ServiceExt::oneshot`; no
//! socket is opened.
//!
//! # What this does NOT cover
//!
//! - Graceful shutdown on Ctrl+C
//!
//! # Running
//!
//! ```sh
//! cargo test --test server_harness
//! ```

mod common;
use common::*;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use leksikon::server::{router, ApiState};
use leksikon_core::LexiconStore;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, Value) {
    let app = router(Arc::new(ApiState {
        store: LexiconStore::builtin().clone(),
        page_size: 12,
    }));
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn terms(data: &[Value]) -> Vec<&str> {
    data.iter().map(|row| row["term"].as_str().unwrap()).collect()
}

// ---------------------------------------------------------------------------
// /api/lexicon
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lexicon_default_page() {
    let (status, body) = get("/api/lexicon").await;
    assert_eq!(status, StatusCode::OK);
    let data = assert_envelope_ok!(body);
    assert_eq!(data.len(), 12);
    assert_eq!(data[0]["term"], "Ludruk");
    assert_eq!(data[0]["slug"], "ludruk");
    assert_eq!(data[0]["region"], "arek");
    assert!(data[0].get("relevance").is_none());
    assert_eq!(
        body["pagination"],
        json!({
            "page": 1, "pageSize": 12, "totalPages": 3, "totalItems": 30,
            "start": 0, "end": 12, "pages": [1, 2, 3]
        })
    );
}

#[tokio::test]
async fn lexicon_last_page_and_beyond() {
    let (_, body) = get("/api/lexicon?page=3").await;
    let data = assert_envelope_ok!(body);
    assert_eq!(data.len(), 6);
    assert_eq!(body["pagination"]["start"], 24);
    assert_eq!(body["pagination"]["end"], 30);

    let (status, body) = get("/api/lexicon?page=7").await;
    assert_eq!(status, StatusCode::OK);
    assert!(assert_envelope_ok!(body).is_empty());
    assert_eq!(body["pagination"]["page"], 7);
}

#[tokio::test]
async fn lexicon_query_within_region() {
    let (_, body) = get("/api/lexicon?q=kasada&region=tengger&pageSize=1").await;
    let data = assert_envelope_ok!(body);
    assert_eq!(terms(&data), ["Yadnya Kasada"]);
    assert_eq!(data[0]["relevance"], 250);
    assert_eq!(data[0]["matches"], json!(["term", "definition", "etymology"]));
    assert_eq!(body["pagination"]["totalPages"], 2);
}

#[tokio::test]
async fn lexicon_unknown_region_is_404() {
    let (status, body) = get("/api/lexicon?region=atlantis").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope_err!(body, "atlantis");
}

#[tokio::test]
async fn lexicon_malformed_page_is_400_envelope() {
    let (status, body) = get("/api/lexicon?page=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope_err!(body, "page");
}

#[tokio::test]
async fn lexicon_negative_page_size_is_400_envelope() {
    let (status, body) = get("/api/lexicon?pageSize=-3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope_err!(body, "pageSize");
}

// ---------------------------------------------------------------------------
// /api/search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_ranks_all_hits() {
    let (_, body) = get("/api/search?q=ritual").await;
    let data = assert_envelope_ok!(body);
    assert_eq!(terms(&data), ["Seblang", "Jaranan"]);
    assert_eq!(data[1]["matches"], json!(["culturalMeaning"]));
}

#[tokio::test]
async fn blank_search_is_empty_success() {
    let (status, body) = get("/api/search?q=%20%20").await;
    assert_eq!(status, StatusCode::OK);
    assert!(assert_envelope_ok!(body).is_empty());
}

// ---------------------------------------------------------------------------
// Regions and entries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn regions_in_display_order() {
    let (_, body) = get("/api/regions").await;
    let data = assert_envelope_ok!(body);
    let keys: Vec<&str> = data.iter().map(|r| r["key"].as_str().unwrap()).collect();
    assert_eq!(
        keys,
        ["arek", "mataraman", "panaragan", "madura", "pandalungan", "osing", "tengger"]
    );
    assert_eq!(data[5]["name"], "Osing");
    assert_eq!(data[5]["area"], "Banyuwangi");
    assert_eq!(data[5]["count"], 5);
}

#[tokio::test]
async fn region_terms_quick_filter() {
    let (_, body) = get("/api/regions/osing/terms").await;
    assert_eq!(assert_envelope_ok!(body).len(), 5);

    let (_, body) = get("/api/regions/osing/terms?filter=ritual").await;
    let data = assert_envelope_ok!(body);
    assert_eq!(terms(&data), ["Seblang"]);
    assert!(data[0]["termCode"].as_str().unwrap().starts_with("OSI"));
}

#[tokio::test]
async fn entry_lookup_by_slug() {
    let (status, body) = get("/api/entries/tengger/yadnya-kasada").await;
    assert_eq!(status, StatusCode::OK);
    let data = assert_envelope_ok!(body);
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["term"], "Yadnya Kasada");
    assert_eq!(data[0]["imageId"], "tengger-kasada");

    let (status, body) = get("/api/entries/osing/yadnya-kasada").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope_err!(body, "yadnya-kasada");

    let (status, body) = get("/api/entries/atlantis/pujan").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope_err!(body, "unknown region");
}
