#![allow(unused)]
//! Search layer integration harness.
//!
//! # What this covers
//!
//! - **Field weights**: a hit's relevance is the sum of the weights of every
//!   field containing the query; a headword match outranks a definition
//!   match, which outranks a note or term-code match.
//! - **Stable ordering**: entries with equal relevance keep their input
//!   order, so the builtin lexicon's region order survives ties.
//! - **Blank queries**: empty or whitespace-only queries rank nothing.
//! - **Quick filter**: the region-page filter is unranked, includes
//!   `category`, keeps input order and keeps everything for a blank query.
//! - **Property: results ⊆ pool**, sorted by descending relevance, with
//!   relevance equal to the summed weights.
//!
//! # What this does NOT cover
//!
//! - Highlighting of matched spans (see highlight_harness)
//! - Paging through results (see view_harness)
//!
//! # Running
//!
//! ```sh
//! cargo test --test search_harness
//! cargo test --test search_harness -- --nocapture
//! ```

mod common;
use common::*;

use leksikon_core::search::{filter_region_terms, search};
use leksikon_core::{LexiconSource, LexiconStore, MatchField};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Term (100) beats definition (80) beats note (40).
#[test]
fn headword_outranks_definition_outranks_note() {
    let pool = vec![
        EntryBuilder::new("Tari A").definition("x").note("sodoran").build(),
        EntryBuilder::new("Tari B").definition("tari sodoran").build(),
        EntryBuilder::new("Sodoran").definition("x").build(),
    ];
    let results = search(&pool, "sodoran");
    assert_ranked!(results, ["Sodoran", "Tari B", "Tari A"]);
    assert_hit!(results[0], [MatchField::Term], 100);
    assert_hit!(results[1], [MatchField::Definition], 80);
    assert_hit!(results[2], [MatchField::Note], 40);
}

/// Every matching field contributes, in fixed check order.
#[test]
fn weights_accumulate_in_field_order() {
    let entry = EntryBuilder::new("Kasada")
        .definition("bulan kasada")
        .etymology("kasada, bulan kedua belas")
        .variant("Kasada Agung")
        .build();
    let results = search(std::slice::from_ref(&entry), "KASADA");
    assert_hit!(
        results[0],
        [
            MatchField::Term,
            MatchField::Definition,
            MatchField::Etymology,
            MatchField::Variants
        ],
        100 + 80 + 70 + 50
    );
}

#[test]
fn equal_relevance_keeps_input_order() {
    let pool = vec![
        EntryBuilder::new("Satu").definition("upacara").build(),
        EntryBuilder::new("Dua").definition("upacara").build(),
        EntryBuilder::new("Tiga").definition("upacara").build(),
    ];
    assert_ranked!(search(&pool, "upacara"), ["Satu", "Dua", "Tiga"]);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn blank_query_ranks_nothing(#[case] query: &str) {
    assert!(search(LexiconStore::builtin().entries(), query).is_empty());
}

#[test]
fn no_match_is_empty_not_error() {
    assert!(search(LexiconStore::builtin().entries(), "zzzz-nothing").is_empty());
}

// ---------------------------------------------------------------------------
// Builtin lexicon
// ---------------------------------------------------------------------------

#[test]
fn builtin_kasada_ranks_the_ceremony_first() {
    let results = search(LexiconStore::builtin().entries(), "kasada");
    assert_ranked!(results, ["Yadnya Kasada", "Dukun Pandita"]);
    assert_eq!(results[0].entry.region, "tengger");
    assert_hit!(
        results[0],
        [MatchField::Term, MatchField::Definition, MatchField::Etymology],
        250
    );
}

#[test]
fn builtin_ritual_ranks_definition_over_cultural_meaning() {
    let results = search(LexiconStore::builtin().entries(), "  Ritual ");
    assert_ranked!(results, ["Seblang", "Jaranan"]);
    assert_hit!(results[1], [MatchField::CulturalMeaning], 70);
}

/// Searching one region's slice only ever returns that region.
#[test]
fn region_slice_search_stays_in_region() {
    let store = LexiconStore::builtin();
    let tengger = store.region("tengger").unwrap();
    let results = search(tengger, "upacara");
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.entry.region == "tengger"));
}

// ---------------------------------------------------------------------------
// Region quick filter
// ---------------------------------------------------------------------------

#[test]
fn quick_filter_matches_category_and_keeps_order() {
    let terms = vec![
        region_term("Gandrung", "Tari pergaulan", Some("tari")),
        region_term("Seblang", "Ritual bersih desa", Some("ritual")),
        region_term("Kebo-keboan", "Ritual kesuburan", None),
        region_term("Janger", "Drama tari", Some("teater")),
    ];
    let kept: Vec<&str> = filter_region_terms(&terms, "TARI")
        .into_iter()
        .map(|t| t.term.as_str())
        .collect();
    assert_eq!(kept, ["Gandrung", "Janger"]);

    let kept: Vec<&str> = filter_region_terms(&terms, "ritual")
        .into_iter()
        .map(|t| t.term.as_str())
        .collect();
    assert_eq!(kept, ["Seblang", "Kebo-keboan"]);
}

#[test]
fn quick_filter_blank_keeps_everything() {
    let terms = vec![
        region_term("Gandrung", "Tari pergaulan", None),
        region_term("Seblang", "Ritual", None),
    ];
    assert_eq!(filter_region_terms(&terms, "").len(), 2);
    assert_eq!(filter_region_terms(&terms, "  ").len(), 2);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn arb_pool() -> impl Strategy<Value = Vec<leksikon_core::RegionalEntry>> {
    prop::collection::vec(("[a-e ]{1,8}", "[a-e ]{0,16}", prop::option::of("[a-e]{0,6}")), 0..24)
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (term, definition, note))| {
                    let mut builder = EntryBuilder::new(&format!("{term}{i}")).definition(&definition);
                    if let Some(note) = note {
                        builder = builder.note(&note);
                    }
                    builder.build()
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn results_are_sorted_subset_with_summed_weights(pool in arb_pool(), query in "[a-e]{1,3}") {
        let results = search(&pool, &query);

        for result in &results {
            prop_assert!(pool.iter().any(|e| std::ptr::eq(e, result.entry)));
            let summed: u32 = result.matches.iter().map(|f| f.weight()).sum();
            prop_assert_eq!(summed, result.relevance);
        }
        for pair in results.windows(2) {
            prop_assert!(pair[0].relevance >= pair[1].relevance);
        }
    }

    #[test]
    fn every_pool_entry_containing_the_query_is_found(pool in arb_pool(), query in "[a-e]{1,2}") {
        let results = search(&pool, &query);
        let expected = pool
            .iter()
            .filter(|e| e.entry.term.contains(&query) || e.entry.definition.contains(&query))
            .count();
        prop_assert!(results.len() >= expected);
    }
}
