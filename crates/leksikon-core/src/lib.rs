//! leksikon-core — East Java cultural lexicon core library.
//!
//! This crate owns the lexicon data model and every piece of logic the
//! presentation layers share: the immutable store, the ranked search engine,
//! the region quick filter, the highlighter, pagination, slugs, debounce and
//! the browse view controller that ties them together.
//!
//! # Architecture
//!
//! ```text
//! seed data / corpus envelope ──► Store ──► View ──► Search ──► Paginate ──► UI / API
//!                 │                                   │
//!                 └──► Ingest                         └──► Highlight
//! ```
//!
//! Everything here is synchronous and pure apart from configuration loading
//! and seed-file reading; async I/O lives in `leksikon-feeds`.

pub mod config;
pub mod data;
pub mod debounce;
pub mod error;
pub mod highlight;
pub mod ingest;
pub mod paginate;
pub mod search;
pub mod slug;
pub mod store;
pub mod types;
pub mod view;

pub use error::IngestError;
pub use store::{LexiconSource, LexiconStore};
pub use types::{LexiconEntry, MatchField, RegionTerm, RegionalEntry, SearchResult};
