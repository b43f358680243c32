//! Search layer — ranked multi-field lexicon search and the unranked region
//! quick filter.
//!
//! The two contracts are deliberately separate:
//!
//! - [`search`] scores every entry by the fixed field weights of
//!   [`MatchField`] and returns hits in descending relevance. An empty query
//!   returns nothing.
//! - [`filter_region_terms`] is a plain any-field containment check over
//!   [`RegionTerm`]s, including `category`, in input order. An empty query
//!   returns everything.
//!
//! Matching in both is case-insensitive substring containment: no tokenizing,
//! stemming or fuzziness.

use crate::types::{LexiconEntry, MatchField, RegionTerm, SearchResult};

/// Lowercased, trimmed query. `None` when nothing is left to match.
fn normalise(query: &str) -> Option<String> {
    let trimmed = query.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

fn contains(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn contains_opt(haystack: Option<&str>, needle_lower: &str) -> bool {
    haystack.is_some_and(|h| contains(h, needle_lower))
}

/// Does `field` of `entry` contain the (already lowercased) query?
fn field_matches(entry: &LexiconEntry, field: MatchField, needle: &str) -> bool {
    match field {
        MatchField::Term => contains(&entry.term, needle),
        MatchField::Transliteration => contains_opt(entry.transliteration.as_deref(), needle),
        MatchField::Definition => contains(&entry.definition, needle),
        MatchField::Etymology => contains_opt(entry.etymology.as_deref(), needle),
        MatchField::CulturalMeaning => contains_opt(entry.cultural_meaning.as_deref(), needle),
        MatchField::CommonMeaning => contains_opt(entry.common_meaning.as_deref(), needle),
        MatchField::Variants => entry.variants.iter().any(|v| contains(v, needle)),
        MatchField::Note => contains_opt(entry.note.as_deref(), needle),
        MatchField::TermCode => contains(&entry.term_code, needle),
    }
}

/// Score one entry. `None` when no field matches.
fn score<'a, E: AsRef<LexiconEntry>>(item: &'a E, needle: &str) -> Option<SearchResult<'a, E>> {
    let entry = item.as_ref();
    let matches: Vec<MatchField> = MatchField::ALL
        .into_iter()
        .filter(|field| field_matches(entry, *field, needle))
        .collect();
    if matches.is_empty() {
        return None;
    }
    let relevance = matches.iter().map(|f| f.weight()).sum();
    Some(SearchResult {
        entry: item,
        matches,
        relevance,
    })
}

/// Ranked search over `entries`.
///
/// The relevance of an entry is the sum of the weights of every field that
/// contains the trimmed query, case-insensitively. Entries with no matching
/// field are left out. Results are sorted by descending relevance; the sort
/// is stable, so entries with equal relevance keep their input order.
///
/// A query that is empty after trimming yields no results. Callers that want
/// "no query shows everything" must handle that before calling.
pub fn search<'a, E: AsRef<LexiconEntry>>(entries: &'a [E], query: &str) -> Vec<SearchResult<'a, E>> {
    let Some(needle) = normalise(query) else {
        return Vec::new();
    };

    let mut results: Vec<SearchResult<'a, E>> =
        entries.iter().filter_map(|item| score(item, &needle)).collect();
    results.sort_by(|a, b| b.relevance.cmp(&a.relevance));

    tracing::debug!(query = %needle, hits = results.len(), "search: ranked");
    results
}

/// Does any quick-filter field of `term` contain the query?
pub fn region_term_matches(term: &RegionTerm, query: &str) -> bool {
    let Some(needle) = normalise(query) else {
        return true;
    };
    contains(&term.term, &needle)
        || contains(&term.definition, &needle)
        || contains_opt(term.transliteration.as_deref(), &needle)
        || contains(&term.term_code, &needle)
        || contains_opt(term.category.as_deref(), &needle)
}

/// Unranked quick filter for a region page.
///
/// Returns, in input order, the terms where `term`, `definition`,
/// `transliteration`, `term_code` or `category` contains the query. An empty
/// (or whitespace-only) query keeps every term.
pub fn filter_region_terms<'a>(terms: &'a [RegionTerm], query: &str) -> Vec<&'a RegionTerm> {
    terms.iter().filter(|t| region_term_matches(t, query)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
