#![allow(unused)]
//! Pagination integration harness.
//!
//! # What this covers
//!
//! - **Slicing**: 1-based pages, zero-based `start_index`, exclusive
//!   `end_index`, and the display end clamped to the list length.
//! - **Out of range**: page 0, pages past the end and a zero page size
//!   produce empty slices, never panics.
//! - **Compact page numbers**: the four shapes of the pager (all pages,
//!   near start, near end, middle), snapshotted as rendered lines.
//! - **Pager discipline**: edges are no-ops and `go_to` rejects pages
//!   outside `1..=total`.
//! - **Property: pages partition the list** in order.
//!
//! # What this does NOT cover
//!
//! - Resetting the page on filter changes (see view_harness)
//!
//! # Running
//!
//! ```sh
//! cargo test --test pagination_harness
//! ```

mod common;
use common::*;

use leksikon_core::paginate::{page_numbers, paginate, render_pager, PageToken, Pager};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Slicing
// ---------------------------------------------------------------------------

#[test]
fn twenty_five_entries_twelve_per_page() {
    let pool = numbered_pool(25);

    let first = paginate(&pool, 1, 12);
    assert_eq!(first.total_pages, 3);
    assert_eq!((first.start_index, first.end_index), (0, 12));
    assert_eq!(first.slice.len(), 12);

    let last = paginate(&pool, 3, 12);
    assert_eq!((last.start_index, last.end_index), (24, 36));
    assert_eq!(last.display_end(), 25);
    assert_eq!(terms_of(last.slice), ["Term 24"]);
}

#[test]
fn out_of_range_requests_are_empty() {
    let pool = numbered_pool(5);
    assert!(paginate(&pool, 0, 12).slice.is_empty());
    assert!(paginate(&pool, 2, 12).slice.is_empty());
    assert!(paginate(&pool, usize::MAX, 12).slice.is_empty());

    let zero = paginate(&pool, 1, 0);
    assert!(zero.slice.is_empty());
    assert_eq!(zero.total_pages, 0);
}

// ---------------------------------------------------------------------------
// Compact page numbers
// ---------------------------------------------------------------------------

#[test]
fn pager_shapes() {
    insta::assert_snapshot!(render_pager(&page_numbers(4, 2), 2), @"1 [2] 3 4");
    insta::assert_snapshot!(render_pager(&page_numbers(10, 1), 1), @"[1] 2 3 4 … 10");
    insta::assert_snapshot!(render_pager(&page_numbers(10, 3), 3), @"1 2 [3] 4 … 10");
    insta::assert_snapshot!(render_pager(&page_numbers(10, 5), 5), @"1 … 4 [5] 6 … 10");
    insta::assert_snapshot!(render_pager(&page_numbers(10, 8), 8), @"1 … 7 [8] 9 10");
    insta::assert_snapshot!(render_pager(&page_numbers(10, 10), 10), @"1 … 7 8 9 [10]");
}

#[test]
fn no_pages_render_empty() {
    assert!(page_numbers(0, 1).is_empty());
    assert_eq!(render_pager(&[], 1), "");
}

#[test]
fn tokens_serialize_for_the_api() {
    let json = serde_json::to_string(&page_numbers(7, 4)).unwrap();
    assert_eq!(json, r#"[1,"...",3,4,5,"...",7]"#);
}

// ---------------------------------------------------------------------------
// Pager
// ---------------------------------------------------------------------------

#[test]
fn pager_walks_and_stops_at_edges() {
    let pool = numbered_pool(30);
    let mut pager = Pager::new(12);
    let total = pager.slice(&pool).total_pages;

    assert!(!pager.prev_page());
    assert!(pager.next_page(total));
    assert!(pager.next_page(total));
    assert!(!pager.next_page(total));
    assert_eq!(pager.page(), 3);
    assert_eq!(pager.slice(&pool).slice.len(), 6);

    assert!(!pager.go_to(4, total));
    assert!(!pager.go_to(0, total));
    assert!(pager.go_to(2, total));
    pager.reset();
    assert_eq!(pager.page(), 1);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn pages_partition_the_list(len in 0usize..80, page_size in 1usize..15) {
        let items: Vec<usize> = (0..len).collect();
        let total = paginate(&items, 1, page_size).total_pages;
        let joined: Vec<usize> = (1..=total)
            .flat_map(|page| paginate(&items, page, page_size).slice.to_vec())
            .collect();
        prop_assert_eq!(joined, items);
        prop_assert!(paginate(&(0..len).collect::<Vec<_>>(), total + 1, page_size).slice.is_empty());
    }

    #[test]
    fn page_numbers_are_bounded_and_anchored(total in 1usize..200, seed in 0usize..200) {
        let page = seed % total + 1;
        let tokens = page_numbers(total, page);
        prop_assert!(tokens.len() <= 7);
        prop_assert_eq!(tokens.first(), Some(&PageToken::Page(1)));
        prop_assert_eq!(tokens.last(), Some(&PageToken::Page(total)));
        prop_assert!(tokens.contains(&PageToken::Page(page)));
    }
}
