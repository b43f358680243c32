//! Highlighter — splits text around case-insensitive occurrences of a query.
//!
//! The query is always a literal: it is escaped before the matcher is built,
//! so `"a(b"`, `"."` or `"*"` match those characters and nothing else.
//! Segments borrow from the input text and keep its original casing.
//!
//! Case-insensitivity means "equal after `to_lowercase`", the same rule
//! [`search`](crate::search::search) ranks by, so a field is emphasized only
//! when it also counts as a hit. Matching runs on the lowercased text and the
//! byte ranges are mapped back onto the original.

use std::ops::Range;

use regex::{Regex, RegexBuilder};

/// A run of text, either plain or matching the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'t> {
    Plain(&'t str),
    Emphasized(&'t str),
}

impl<'t> Segment<'t> {
    pub fn text(&self) -> &'t str {
        match self {
            Segment::Plain(s) | Segment::Emphasized(s) => s,
        }
    }

    pub fn is_emphasized(&self) -> bool {
        matches!(self, Segment::Emphasized(_))
    }
}

/// A compiled query, reusable across many texts (one per rendered row).
#[derive(Debug, Clone)]
pub struct Highlighter {
    matcher: Option<Regex>,
}

impl Highlighter {
    /// Compile `query`. A blank query highlights nothing.
    pub fn new(query: &str) -> Self {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Self { matcher: None };
        }
        let matcher = RegexBuilder::new(&regex::escape(&trimmed.to_lowercase())).build();
        match matcher {
            Ok(re) => Self { matcher: Some(re) },
            Err(err) => {
                // Only reachable for queries beyond the regex size limit.
                tracing::debug!(error = %err, "highlight: query not compilable, rendering plain");
                Self { matcher: None }
            }
        }
    }

    /// Split `text` into plain and emphasized segments.
    ///
    /// Never yields an empty segment; empty `text` yields no segments.
    pub fn segments<'t>(&self, text: &'t str) -> Vec<Segment<'t>> {
        if text.is_empty() {
            return Vec::new();
        }
        let Some(re) = &self.matcher else {
            return vec![Segment::Plain(text)];
        };

        let folded = Folded::new(text);
        let mut out = Vec::new();
        let mut last = 0;
        for m in re.find_iter(&folded.lower) {
            if m.start() == m.end() {
                continue;
            }
            let span = folded.original(m.range());
            if span.start < last {
                continue;
            }
            if span.start > last {
                out.push(Segment::Plain(&text[last..span.start]));
            }
            out.push(Segment::Emphasized(&text[span.clone()]));
            last = span.end;
        }
        if last < text.len() {
            out.push(Segment::Plain(&text[last..]));
        }
        out
    }

    /// Whether the query occurs anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.matcher
            .as_ref()
            .is_some_and(|re| re.is_match(&text.to_lowercase()))
    }
}

/// Lowercased copy of a text, remembering which original character every
/// lowercased byte came from. Lowercasing may change byte lengths (`İ` turns
/// into two characters), so offsets cannot be reused directly.
struct Folded {
    lower: String,
    /// Original byte range of the character behind each byte of `lower`.
    origin: Vec<Range<usize>>,
}

impl Folded {
    fn new(text: &str) -> Self {
        let mut lower = String::with_capacity(text.len());
        let mut origin = Vec::with_capacity(text.len());
        for (start, c) in text.char_indices() {
            let span = start..start + c.len_utf8();
            for l in c.to_lowercase() {
                lower.push(l);
                origin.extend(std::iter::repeat_n(span.clone(), l.len_utf8()));
            }
        }
        Self { lower, origin }
    }

    /// Widen a non-empty range of `lower` to whole original characters.
    fn original(&self, range: Range<usize>) -> Range<usize> {
        self.origin[range.start].start..self.origin[range.end - 1].end
    }
}

/// One-shot form of [`Highlighter::segments`].
pub fn highlight<'t>(text: &'t str, query: &str) -> Vec<Segment<'t>> {
    Highlighter::new(query).segments(text)
}

/// Join segments back into a string, wrapping emphasized runs in `open` and
/// `close`.
pub fn render_marked(segments: &[Segment<'_>], open: &str, close: &str) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Plain(s) => out.push_str(s),
            Segment::Emphasized(s) => {
                out.push_str(open);
                out.push_str(s);
                out.push_str(close);
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
