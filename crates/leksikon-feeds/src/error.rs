//! Error types for leksikon-feeds.

use std::time::Duration;

use hyper::StatusCode;
use leksikon_core::IngestError;
use thiserror::Error;

/// A corpus API request that produced no usable data.
///
/// Every variant is retryable from the caller's point of view: the terminal
/// browser shows it in the status line and tries again on the next query.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid corpus URL {url}: {reason}")]
    InvalidUri { url: String, reason: String },

    #[error("corpus request failed: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),

    #[error("corpus did not answer within {0:?}")]
    Timeout(Duration),

    #[error("corpus answered {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("reading corpus response: {0}")]
    Body(#[from] hyper::Error),

    #[error(transparent)]
    Ingest(#[from] IngestError),
}
