//! Browse view — query, region filter and pager over a pool of entries.
//!
//! [`LexiconView`] is what the terminal browser, the `search` command and the
//! `/api/lexicon` endpoint all page through. Hits are recomputed eagerly on
//! every filter change, and every filter change resets the pager in the same
//! call, so a narrowed list is never shown at a stale page.

use serde::Serialize;

use crate::paginate::{page_numbers, paginate, PageToken, Pager};
use crate::search::search;
use crate::slug::slugify;
use crate::types::{LexiconEntry, MatchField, RegionalEntry};

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// A pool entry paired with its position, so search results can be mapped
/// back to the pool.
struct Candidate<'a> {
    index: usize,
    item: &'a RegionalEntry,
}

impl AsRef<LexiconEntry> for Candidate<'_> {
    fn as_ref(&self) -> &LexiconEntry {
        &self.item.entry
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Hit {
    index: usize,
    matches: Vec<MatchField>,
    relevance: Option<u32>,
}

/// One visible row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRow<'a> {
    #[serde(flatten)]
    pub item: &'a RegionalEntry,
    pub slug: String,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub matches: &'a [MatchField],
    /// `None` when browsing without a query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<u32>,
}

/// Pager state for one rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// Zero-based index of the first row.
    pub start: usize,
    /// Exclusive end, clamped to `total_items`.
    pub end: usize,
    pub pages: Vec<PageToken>,
}

impl Pagination {
    /// `"Showing 13–24 of 25"`, or `"No entries"` for an empty list.
    pub fn summary(&self) -> String {
        if self.total_items == 0 || self.start >= self.end {
            return "No entries".to_string();
        }
        format!("Showing {}–{} of {}", self.start + 1, self.end, self.total_items)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewPage<'a> {
    pub rows: Vec<ViewRow<'a>>,
    pub pagination: Pagination,
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct LexiconView {
    pool: Vec<RegionalEntry>,
    query: String,
    region: Option<String>,
    pager: Pager,
    hits: Vec<Hit>,
}

impl LexiconView {
    pub fn new(pool: Vec<RegionalEntry>, page_size: usize) -> Self {
        let mut view = Self {
            pool,
            query: String::new(),
            region: None,
            pager: Pager::new(page_size),
            hits: Vec::new(),
        };
        view.recompute();
        view
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn pool(&self) -> &[RegionalEntry] {
        &self.pool
    }

    pub fn current_page(&self) -> usize {
        self.pager.page()
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.slice(&self.hits).total_pages
    }

    /// Set the query text. Returns `false` (and keeps the page) when the
    /// query is unchanged.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.query {
            return false;
        }
        self.query = query;
        self.refilter();
        true
    }

    /// Narrow to one region, or `None` for all regions.
    pub fn set_region(&mut self, region: Option<String>) -> bool {
        if region == self.region {
            return false;
        }
        self.region = region;
        self.refilter();
        true
    }

    /// Swap the candidate pool, e.g. for a fresh batch of remote results.
    pub fn replace_pool(&mut self, pool: Vec<RegionalEntry>) {
        self.pool = pool;
        self.refilter();
    }

    pub fn next_page(&mut self) -> bool {
        let total = self.total_pages();
        self.pager.next_page(total)
    }

    pub fn prev_page(&mut self) -> bool {
        self.pager.prev_page()
    }

    pub fn go_to(&mut self, page: usize) -> bool {
        let total = self.total_pages();
        self.pager.go_to(page, total)
    }

    pub fn first_page(&mut self) -> bool {
        self.go_to(1)
    }

    pub fn last_page(&mut self) -> bool {
        let total = self.total_pages();
        self.pager.go_to(total, total)
    }

    /// Rows and pager state at the current page.
    pub fn page(&self) -> ViewPage<'_> {
        self.page_at(self.pager.page())
    }

    /// Rows and pager state at an arbitrary 1-based page, without moving the
    /// pager. Out-of-range pages have no rows.
    pub fn page_at(&self, number: usize) -> ViewPage<'_> {
        let page = paginate(&self.hits, number, self.pager.page_size());
        let rows = page
            .slice
            .iter()
            .map(|hit| {
                let item = &self.pool[hit.index];
                ViewRow {
                    item,
                    slug: slugify(&item.entry.term),
                    matches: &hit.matches,
                    relevance: hit.relevance,
                }
            })
            .collect();

        ViewPage {
            rows,
            pagination: Pagination {
                page: number,
                page_size: self.pager.page_size(),
                total_pages: page.total_pages,
                total_items: page.total_items,
                start: page.start_index.min(page.total_items),
                end: page.display_end(),
                pages: page_numbers(page.total_pages, number),
            },
        }
    }

    fn refilter(&mut self) {
        self.recompute();
        self.pager.reset();
    }

    fn recompute(&mut self) {
        let candidates: Vec<Candidate<'_>> = self
            .pool
            .iter()
            .enumerate()
            .filter(|(_, item)| self.region.as_deref().is_none_or(|r| item.region == r))
            .map(|(index, item)| Candidate { index, item })
            .collect();

        self.hits = if self.query.trim().is_empty() {
            candidates
                .iter()
                .map(|c| Hit {
                    index: c.index,
                    matches: Vec::new(),
                    relevance: None,
                })
                .collect()
        } else {
            search(&candidates, &self.query)
                .into_iter()
                .map(|result| Hit {
                    index: result.entry.index,
                    matches: result.matches,
                    relevance: Some(result.relevance),
                })
                .collect()
        };

        tracing::debug!(
            query = %self.query,
            region = ?self.region,
            hits = self.hits.len(),
            "view: filter applied"
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
