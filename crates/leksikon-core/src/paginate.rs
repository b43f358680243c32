//! Pagination — page slicing, the compact page-number sequence, and the
//! [`Pager`] that enforces caller discipline around them.
//!
//! [`paginate`] never clamps. Asking for a page outside `1..=total_pages`
//! returns an empty slice; keeping the page in range is [`Pager`]'s job.

use serde::{Serialize, Serializer};

/// One page of an ordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub slice: &'a [T],
    /// `ceil(len / page_size)`; zero for an empty list or a zero page size.
    pub total_pages: usize,
    /// `(page - 1) * page_size`.
    pub start_index: usize,
    /// `start_index + page_size`, exclusive and possibly past the end.
    pub end_index: usize,
    /// Length of the whole list.
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    /// Exclusive end for display, i.e. `min(end_index, total_items)`.
    pub fn display_end(&self) -> usize {
        self.end_index.min(self.total_items)
    }
}

/// Slice `items` to the 1-based `page` of size `page_size`.
///
/// Page 0, pages past the last one and a zero page size all produce an empty
/// slice rather than an error.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let total_items = items.len();
    let total_pages = if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    };

    if page == 0 {
        return Page {
            slice: &[],
            total_pages,
            start_index: 0,
            end_index: 0,
            total_items,
        };
    }

    let start_index = (page - 1).saturating_mul(page_size);
    let end_index = start_index.saturating_add(page_size);
    let slice = if start_index < total_items {
        &items[start_index..end_index.min(total_items)]
    } else {
        &[]
    };

    Page {
        slice,
        total_pages,
        start_index,
        end_index,
        total_items,
    }
}

/// An entry in a compact pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageToken::Page(n) => serializer.serialize_u64(*n as u64),
            PageToken::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

impl std::fmt::Display for PageToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageToken::Page(n) => write!(f, "{n}"),
            PageToken::Ellipsis => write!(f, "…"),
        }
    }
}

/// Page numbers to show for `page` out of `total_pages`.
///
/// - up to 5 pages: all of them
/// - near the start (`page <= 3`): `1 2 3 4 … last`
/// - near the end (`page >= last - 2`): `1 … last-3 last-2 last-1 last`
/// - otherwise: `1 … page-1 page page+1 … last`
pub fn page_numbers(total_pages: usize, page: usize) -> Vec<PageToken> {
    use PageToken::{Ellipsis, Page};

    if total_pages <= 5 {
        return (1..=total_pages).map(Page).collect();
    }
    if page <= 3 {
        return vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total_pages)];
    }
    if page >= total_pages - 2 {
        return vec![
            Page(1),
            Ellipsis,
            Page(total_pages - 3),
            Page(total_pages - 2),
            Page(total_pages - 1),
            Page(total_pages),
        ];
    }
    vec![
        Page(1),
        Ellipsis,
        Page(page - 1),
        Page(page),
        Page(page + 1),
        Ellipsis,
        Page(total_pages),
    ]
}

/// Render a token sequence as a single line, e.g. `1 … 4 [5] 6 … 10`.
pub fn render_pager(tokens: &[PageToken], current: usize) -> String {
    tokens
        .iter()
        .map(|token| match token {
            PageToken::Page(n) if *n == current => format!("[{n}]"),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The active page of a paginated view.
///
/// Holds the 1-based page and the page size. Navigation is a no-op at the
/// edges, and [`Pager::reset`] must be called together with any filter change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self { page: 1, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Advance one page unless already on the last one. Returns whether the
    /// page changed.
    pub fn next_page(&mut self, total_pages: usize) -> bool {
        if self.page < total_pages {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page unless already on page 1.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `page` if it is within `1..=total_pages`.
    pub fn go_to(&mut self, page: usize, total_pages: usize) -> bool {
        if (1..=total_pages).contains(&page) {
            self.page = page;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Slice `items` at the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> Page<'a, T> {
        paginate(items, self.page, self.page_size)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
