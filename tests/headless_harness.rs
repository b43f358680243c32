#![allow(unused)]
//! Headless commands, process-level integration harness.
//!
//! # What this covers
//!
//! This harness runs `leksikon` as a compiled binary via
//! [`std::process::Command`] and checks what a user or another CLI tool
//! would observe.
//!
//! - **`search`**: ranked rows with scores and links, pager and summary;
//!   page 0 and pages past the last fail.
//! - **`region`**: quick-filtered terms; unknown regions fail and name the
//!   known ones.
//! - **Piped output** marks matches with brackets instead of ANSI codes.
//! - **`--config`**: a seed file named in the config replaces the builtin
//!   lexicon; a missing config file fails.
//! - **`--remote`** against the fake corpus server.
//!
//! # What this does NOT cover
//!
//! - The terminal browser (requires a real terminal)
//! - `serve` (see server_harness)
//!
//! # Running
//!
//! ```sh
//! cargo test --test headless_harness
//! ```

mod common;
use common::fake_corpus_api::FakeCorpusApi;
use common::*;

use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use rstest::rstest;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A config file in a temp dir; `extra` is appended verbatim.
fn config_file(extra: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    temp_file("config.toml", &format!("[lexicon]\npage_size = 12\n{extra}"))
}

fn leksikon(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_leksikon"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("spawn leksikon")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// search
// ---------------------------------------------------------------------------

#[test]
fn search_prints_ranked_rows() {
    let (_dir, config) = config_file("");
    let output = leksikon(&config, &["search", "kasada"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("  1. Yadnya [Kasada] (Tengger, TEN"), "{text}");
    assert!(lines[0].ends_with("score 250: term, definition, etymology"), "{text}");
    assert_eq!(lines[2], "     /tengger/yadnya-kasada");
    assert!(lines[3].starts_with("  2. Dukun Pandita"));
    assert_eq!(&lines[lines.len() - 2..], ["[1]", "Showing 1–2 of 2"]);
    assert!(!text.contains('\x1b'), "piped output must not carry ANSI codes");
}

#[test]
fn search_without_hits_prints_summary_only() {
    let (_dir, config) = config_file("");
    let output = leksikon(&config, &["search", "zzzz"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "No entries\n");
}

#[rstest]
#[case("0")]
#[case("5")]
fn search_page_out_of_range_fails(#[case] page: &str) {
    let (_dir, config) = config_file("");
    let output = leksikon(&config, &["search", "upacara", "--page", page]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let expected = format!("page {page} out of range (1–1)");
    assert!(stderr(&output).contains(&expected), "{}", stderr(&output));
}

// ---------------------------------------------------------------------------
// region
// ---------------------------------------------------------------------------

#[test]
fn region_filter_marks_matches() {
    let (_dir, config) = config_file("");
    let output = leksikon(&config, &["region", "osing", "--filter", "ritual"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.starts_with("Osing (1 terms)\n"), "{text}");
    assert!(text.contains("Seblang"));
    assert!(text.contains("[Ritual] bersih desa"));
}

#[test]
fn unknown_region_fails_listing_known_ones() {
    let (_dir, config) = config_file("");
    let output = leksikon(&config, &["region", "atlantis"]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("unknown region \"atlantis\""), "{err}");
    assert!(err.contains("tengger"));
}

// ---------------------------------------------------------------------------
// --config
// ---------------------------------------------------------------------------

#[test]
fn seed_file_from_config_replaces_builtin() {
    let (_seed_dir, seed) = temp_file("seed.json", SEED_JSON);
    let (_dir, config) = config_file(&format!("data_path = {:?}\n", seed.display().to_string()));

    let output = leksikon(&config, &["search", "pujan"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("[Pujan] (Tengger, "));
    assert!(text.trim_end().ends_with("Showing 1–1 of 1"));

    let output = leksikon(&config, &["search", "kasada"]);
    assert_eq!(stdout(&output), "No entries\n");
}

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = leksikon(&dir.path().join("absent.toml"), &["search", "x"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("loading config"));
}

// ---------------------------------------------------------------------------
// --remote
// ---------------------------------------------------------------------------

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn remote_search_pages_corpus_order() {
    let api = FakeCorpusApi::start().await.unwrap();
    api.on_search("gandrung", search_records()).await;
    let (_dir, config) = config_file(&format!(
        "[remote]\nbase_url = {:?}\ntimeout_ms = 2000\n",
        api.base_url()
    ));

    let output = tokio::task::spawn_blocking(move || {
        leksikon(&config, &["search", "gandrung", "--remote"])
    })
    .await
    .unwrap();
    assert!(output.status.success(), "{}", stderr(&output));

    let text = stdout(&output);
    let rows: Vec<&str> = text.lines().filter(|l| l.contains(". ")).collect();
    assert!(rows[0].contains("Yadnya Kasada (Tengger, TEN0001)"), "{text}");
    assert!(rows[1].contains("[Gandrung] (Osing, "), "{text}");
    assert!(text.trim_end().ends_with("Showing 1–3 of 3"));
    assert_eq!(api.requests().await, ["/search?q=gandrung"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn remote_region_failure_is_reported() {
    let api = FakeCorpusApi::start().await.unwrap();
    let (_dir, config) = config_file(&format!("[remote]\nbase_url = {:?}\n", api.base_url()));

    let output = tokio::task::spawn_blocking(move || {
        leksikon(&config, &["region", "atlantis", "--remote"])
    })
    .await
    .unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("region not found: atlantis"), "{}", stderr(&output));
}
