//! Helpers shared by the `*_harness.rs` files: entry builders, JSON
//! fixtures, ranking and envelope assertions, and an axum stand-in for the
//! corpus API (`fake_corpus_api`).
//!
//! Pull them in with `mod common; use common::*;`. The assertion macros are
//! `#[macro_export]`ed and need no import.

pub mod assertions;
pub mod builders;
pub mod fake_corpus_api;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
