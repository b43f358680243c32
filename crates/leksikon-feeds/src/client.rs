//! HTTP client for the remote corpus API.
//!
//! Two endpoints, both answering with the `{ success, data, message }`
//! envelope:
//!
//! - `GET {base}/search?q=<query>` → entry records
//! - `GET {base}/regions/{region}/terms` → region terms
//!
//! Plain HTTP/1 over `hyper-util`'s pooled client. The whole exchange,
//! headers and body, is bounded by the configured timeout.

use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper::header::{HeaderValue, ACCEPT};
use hyper::{Request, Uri};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use leksikon_core::config::RemoteConfig;
use leksikon_core::ingest;
use leksikon_core::{RegionTerm, RegionalEntry};

use crate::error::FetchError;

#[derive(Debug, Clone)]
pub struct CorpusClient {
    http: Client<HttpConnector, Empty<Bytes>>,
    base_url: String,
    timeout: Duration,
}

impl CorpusClient {
    /// `base_url` is everything before `/search`, e.g.
    /// `http://127.0.0.1:3000/api`. A trailing slash is ignored.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = Client::builder(TokioExecutor::new()).build_http();
        Self {
            http,
            base_url,
            timeout,
        }
    }

    pub fn from_config(remote: &RemoteConfig) -> Self {
        Self::new(remote.base_url.clone(), remote.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ranked search on the corpus. Records without a `region` field are
    /// attributed to the empty region key.
    pub async fn search(&self, query: &str) -> Result<Vec<RegionalEntry>, FetchError> {
        let url = format!("{}/search?q={}", self.base_url, urlencoding::encode(query));
        let body = self.get(url).await?;
        let entries = ingest::entries_from_envelope(&body, "")?;
        tracing::debug!(query, entries = entries.len(), "corpus: search answered");
        Ok(entries)
    }

    /// Every term of one region, in corpus order.
    pub async fn region_terms(&self, region: &str) -> Result<Vec<RegionTerm>, FetchError> {
        let url = format!(
            "{}/regions/{}/terms",
            self.base_url,
            urlencoding::encode(region)
        );
        let body = self.get(url).await?;
        let terms = ingest::region_terms_from_envelope(&body, region)?;
        tracing::debug!(region, terms = terms.len(), "corpus: region terms answered");
        Ok(terms)
    }

    async fn get(&self, url: String) -> Result<Bytes, FetchError> {
        let uri = url.parse::<Uri>().map_err(|err| FetchError::InvalidUri {
            url: url.clone(),
            reason: err.to_string(),
        })?;

        let mut request = Request::new(Empty::<Bytes>::new());
        *request.uri_mut() = uri;
        request
            .headers_mut()
            .insert(ACCEPT, HeaderValue::from_static("application/json"));

        let exchange = async {
            let response = self.http.request(request).await?;
            let status = response.status();
            let body = response.into_body().collect().await?.to_bytes();
            Ok::<_, FetchError>((status, body))
        };

        let (status, body) = tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| FetchError::Timeout(self.timeout))??;

        if !status.is_success() {
            tracing::warn!(%url, %status, "corpus: non-success status");
            return Err(FetchError::Status {
                status,
                message: envelope_message(&body),
            });
        }
        Ok(body)
    }
}

/// The `message` of an error envelope, if the body is one.
fn envelope_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value.get("message")?.as_str().map(str::to_string)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
