//! Test builders — ergonomic constructors for lexicon entries and pools.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use leksikon_core::{LexiconEntry, LexiconStore, RegionTerm, RegionalEntry};

// ---------------------------------------------------------------------------
// EntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RegionalEntry`] fixtures.
///
/// # Example
///
/// ```rust
/// let entry = EntryBuilder::new("Pujan")
///     .region("tengger")
///     .definition("Upacara adat")
///     .variant("Pujan Kapat")
///     .build();
/// ```
pub struct EntryBuilder {
    region: String,
    entry: LexiconEntry,
}

impl EntryBuilder {
    pub fn new(term: &str) -> Self {
        Self {
            region: "test".to_string(),
            entry: LexiconEntry::new("test", term, format!("definition of {term}")),
        }
    }

    /// Also re-derives the term code for the new region.
    pub fn region(mut self, region: &str) -> Self {
        self.region = region.to_string();
        self.entry.term_code = leksikon_core::slug::term_code(region, &self.entry.term);
        self
    }

    pub fn definition(mut self, definition: &str) -> Self {
        self.entry.definition = definition.to_string();
        self
    }

    pub fn term_code(mut self, code: &str) -> Self {
        self.entry.term_code = code.to_string();
        self
    }

    pub fn transliteration(mut self, value: &str) -> Self {
        self.entry.transliteration = Some(value.to_string());
        self
    }

    pub fn etymology(mut self, value: &str) -> Self {
        self.entry.etymology = Some(value.to_string());
        self
    }

    pub fn cultural_meaning(mut self, value: &str) -> Self {
        self.entry.cultural_meaning = Some(value.to_string());
        self
    }

    pub fn common_meaning(mut self, value: &str) -> Self {
        self.entry.common_meaning = Some(value.to_string());
        self
    }

    pub fn variant(mut self, value: &str) -> Self {
        self.entry.variants.push(value.to_string());
        self
    }

    pub fn note(mut self, value: &str) -> Self {
        self.entry.note = Some(value.to_string());
        self
    }

    pub fn build(self) -> RegionalEntry {
        RegionalEntry::new(self.region, self.entry)
    }

    pub fn entry(self) -> LexiconEntry {
        self.entry
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// `n` entries named `Term 00`, `Term 01`, … alternating between the
/// `osing` and `madura` regions.
pub fn numbered_pool(n: usize) -> Vec<RegionalEntry> {
    (0..n)
        .map(|i| {
            let region = if i % 2 == 0 { "osing" } else { "madura" };
            EntryBuilder::new(&format!("Term {i:02}"))
                .region(region)
                .definition("kata")
                .build()
        })
        .collect()
}

/// A store built from `(region, term)` pairs, each term with a generated
/// definition. Repeated regions merge the way seed groups do.
pub fn store_of(pairs: &[(&str, &str)]) -> LexiconStore {
    LexiconStore::from_regions(pairs.iter().map(|(region, term)| {
        let entry = EntryBuilder::new(term).region(region).entry();
        (region.to_string(), vec![entry])
    }))
}

pub fn region_term(term: &str, definition: &str, category: Option<&str>) -> RegionTerm {
    RegionTerm {
        term: term.to_string(),
        definition: definition.to_string(),
        transliteration: None,
        term_code: leksikon_core::slug::term_code("test", term),
        category: category.map(str::to_string),
    }
}

/// Terms of a result list, for compact assertions.
pub fn terms_of<'a, E: AsRef<LexiconEntry> + 'a>(
    items: impl IntoIterator<Item = &'a E>,
) -> Vec<String> {
    items
        .into_iter()
        .map(|e| e.as_ref().term.clone())
        .collect()
}
