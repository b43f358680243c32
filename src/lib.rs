//! leksikon — East Java cultural lexicon.
//!
//! The binary's own layers, exposed as modules so the integration harnesses
//! can drive them directly: the JSON HTTP API and the headless report
//! renderer. Everything else lives in the workspace crates.
//!
//! # Architecture
//!
//! ```text
//! leksikon-core (store, search, view) ──► server ──► JSON envelope
//!          │                           └─► report ──► stdout
//!          └──► leksikon-tui (browser)
//! leksikon-feeds (corpus client, sessions) ──► tui / search --remote
//! ```

pub mod report;
pub mod server;
