//! Slug and term-code derivation.
//!
//! Every call site that builds or resolves a detail link goes through
//! [`slugify`], so list views and detail lookups can never drift apart.
//! Slugs are not deduplicated: when two terms share a slug, lookups resolve to
//! whichever comes first in store order.

use unicode_normalization::UnicodeNormalization;

/// Normalise a term into a URL slug.
///
/// NFD-decompose, drop combining diacritics (U+0300–U+036F), lowercase, drop
/// everything outside `[a-z0-9\s-]`, trim, then turn each whitespace run into
/// a single `-`. Hyphens already present are kept as they are, including at
/// the ends; see [`slugify_strict`].
pub fn slugify(term: &str) -> String {
    let folded = term
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect::<String>()
        .to_lowercase();

    let kept: String = folded
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    let mut slug = String::with_capacity(kept.len());
    let mut in_space = false;
    for c in kept.trim().chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.push(c);
            in_space = false;
        }
    }
    slug
}

/// [`slugify`] with leading and trailing hyphens removed.
pub fn slugify_strict(term: &str) -> String {
    slugify(term).trim_matches('-').to_string()
}

/// Derive the short tag stored in [`LexiconEntry::term_code`](crate::LexiconEntry::term_code).
///
/// Up to three ASCII alphanumerics of the region key, uppercased, followed by
/// four hex digits of a hash of the term's slug.
pub fn term_code(region: &str, term: &str) -> String {
    let prefix: String = region
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(3)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let hash = stable_hash(&slugify(term)) % 0x1_0000;
    format!("{prefix}{hash:04X}")
}

/// djb2-style hash, stable across Rust versions and process restarts.
fn stable_hash(s: &str) -> usize {
    s.bytes().fold(5381usize, |acc, b| {
        acc.wrapping_mul(31).wrapping_add(b as usize)
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
