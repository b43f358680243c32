//! Headless rendering for the `search` and `region` commands.
//!
//! Matches of the query are wrapped with [`Emphasis`] markers: ANSI bold when
//! stdout is a terminal, `[` `]` otherwise so piped output stays readable.

use std::io::{self, IsTerminal, Write};

use leksikon_core::data::region_name;
use leksikon_core::highlight::{render_marked, Highlighter};
use leksikon_core::paginate::render_pager;
use leksikon_core::types::NO_VALUE;
use leksikon_core::view::ViewPage;
use leksikon_core::RegionTerm;

/// How query matches are marked in plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Ansi,
    Brackets,
}

impl Emphasis {
    /// ANSI when stdout is a terminal.
    pub fn detect() -> Self {
        if io::stdout().is_terminal() {
            Emphasis::Ansi
        } else {
            Emphasis::Brackets
        }
    }

    fn markers(self) -> (&'static str, &'static str) {
        match self {
            Emphasis::Ansi => ("\x1b[1;33m", "\x1b[0m"),
            Emphasis::Brackets => ("[", "]"),
        }
    }
}

struct Marker {
    highlighter: Highlighter,
    open: &'static str,
    close: &'static str,
}

impl Marker {
    fn new(query: &str, emphasis: Emphasis) -> Self {
        let (open, close) = emphasis.markers();
        Self {
            highlighter: Highlighter::new(query),
            open,
            close,
        }
    }

    fn mark(&self, text: &str) -> String {
        render_marked(&self.highlighter.segments(text), self.open, self.close)
    }
}

/// Write one page of browse or search rows, followed by the pager and the
/// "Showing a–b of n" summary.
pub fn write_page(
    out: &mut impl Write,
    page: &ViewPage<'_>,
    query: &str,
    emphasis: Emphasis,
) -> io::Result<()> {
    let marker = Marker::new(query, emphasis);
    let pagination = &page.pagination;

    for (offset, row) in page.rows.iter().enumerate() {
        let entry = &row.item.entry;
        let mut heading = format!(
            "{:>3}. {} ({}, {})",
            pagination.start + offset + 1,
            marker.mark(&entry.term),
            region_name(&row.item.region),
            entry.term_code
        );
        if let Some(relevance) = row.relevance {
            let fields: Vec<&str> = row.matches.iter().map(|f| f.as_str()).collect();
            heading.push_str(&format!("  score {relevance}: {}", fields.join(", ")));
        }
        writeln!(out, "{heading}")?;
        let definition = if entry.definition.trim().is_empty() {
            NO_VALUE.to_string()
        } else {
            marker.mark(&entry.definition)
        };
        writeln!(out, "     {definition}")?;
        writeln!(out, "     /{}/{}", row.item.region, row.slug)?;
    }

    if !pagination.pages.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", render_pager(&pagination.pages, pagination.page))?;
    }
    writeln!(out, "{}", pagination.summary())
}

/// Write the quick-filtered terms of one region.
pub fn write_region_terms(
    out: &mut impl Write,
    region: &str,
    terms: &[&RegionTerm],
    filter: &str,
    emphasis: Emphasis,
) -> io::Result<()> {
    let marker = Marker::new(filter, emphasis);
    writeln!(out, "{} ({} terms)", region_name(region), terms.len())?;
    for term in terms {
        let mut line = format!("  {:<8} {}", term.term_code, marker.mark(&term.term));
        if let Some(transliteration) = &term.transliteration {
            line.push_str(&format!(" ({})", marker.mark(transliteration)));
        }
        if let Some(category) = &term.category {
            line.push_str(&format!(" [{}]", marker.mark(category)));
        }
        writeln!(out, "{line}")?;
        writeln!(out, "           {}", marker.mark(&term.definition))?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
