//! Error types for leksikon-core.

use thiserror::Error;

/// Top-level failure while turning a corpus envelope or seed file into
/// lexicon records.
///
/// Individual malformed records are never reported here; they are dropped
/// during ingestion. Only a response or file that cannot be trusted as a whole
/// becomes an `IngestError`.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The envelope said `success: false` (or omitted it).
    #[error("corpus reported failure: {}", .message.as_deref().unwrap_or("no message"))]
    Unsuccessful { message: Option<String> },

    /// `data` was missing or not an array.
    #[error("corpus envelope has no data array")]
    MissingData,

    /// The body was not JSON of the expected shape.
    #[error("malformed corpus JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A seed file could not be read.
    #[error("cannot read seed file {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}
