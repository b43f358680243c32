//! leksikon-feeds — remote corpus access for leksikon.
//!
//! [`CorpusClient`] talks to a corpus API that serves lexicon entries in the
//! `{ success, data, message }` envelope and hands the payload to
//! `leksikon_core::ingest`. [`SearchSession`] wraps it for interactive use:
//! trailing debounce on input, latest-wins on responses.

pub mod client;
pub mod error;
pub mod sequence;
pub mod session;

pub use client::CorpusClient;
pub use error::FetchError;
pub use sequence::{Applied, LatestWins, Ticket};
pub use session::{SearchSession, SearchUpdate};
