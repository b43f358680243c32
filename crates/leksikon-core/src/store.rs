//! Store — the immutable, region-grouped collection of lexicon entries.
//!
//! The store is the single source of truth for browsing; views read from it
//! and never mutate it. Entries are kept in one contiguous vector grouped by
//! region, so every region's entries are a plain slice, and both region order
//! and within-region order are the seed's insertion order.
//!
//! Consumers should depend on [`LexiconSource`] rather than on
//! [`LexiconStore`] directly so the builtin data can be swapped for a
//! database-backed source.

use std::ops::Range;
use std::path::Path;
use std::sync::LazyLock;

use crate::data::SEED;
use crate::error::IngestError;
use crate::slug::slugify;
use crate::types::{LexiconEntry, RegionalEntry};

/// Read-only access to a lexicon.
pub trait LexiconSource {
    /// Region keys in display order.
    fn regions(&self) -> Vec<&str>;

    /// Every entry, grouped by region, in display order.
    fn entries(&self) -> &[RegionalEntry];

    /// Entries of one region, or `None` for an unknown key.
    fn region(&self, key: &str) -> Option<&[RegionalEntry]>;

    /// Resolve a slug back to an entry, optionally within one region.
    ///
    /// Slugs are not unique; the first entry in display order whose term
    /// slugifies to `slug` wins.
    fn find_by_slug(&self, region: Option<&str>, slug: &str) -> Option<&RegionalEntry> {
        let scope = match region {
            Some(key) => self.region(key)?,
            None => self.entries(),
        };
        scope.iter().find(|item| slugify(&item.entry.term) == slug)
    }
}

static BUILTIN: LazyLock<LexiconStore> = LazyLock::new(|| {
    let store = LexiconStore::from_regions(SEED.iter().map(|(region, seeds)| {
        let entries = seeds.iter().map(|seed| seed.to_entry(region)).collect();
        (region.to_string(), entries)
    }));
    tracing::debug!(
        regions = store.index.len(),
        entries = store.entries.len(),
        "store: builtin lexicon loaded"
    );
    store
});

/// In-memory lexicon. Built once, never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct LexiconStore {
    entries: Vec<RegionalEntry>,
    /// `(region key, range into entries)`, in display order.
    index: Vec<(String, Range<usize>)>,
}

impl LexiconStore {
    /// The builtin lexicon, initialised on first access.
    pub fn builtin() -> &'static LexiconStore {
        &BUILTIN
    }

    /// Build a store from `(region, entries)` groups.
    ///
    /// A region key that appears more than once has its later entries
    /// appended to the first group, keeping the first group's position.
    pub fn from_regions(groups: impl IntoIterator<Item = (String, Vec<LexiconEntry>)>) -> Self {
        let mut merged: Vec<(String, Vec<LexiconEntry>)> = Vec::new();
        for (region, entries) in groups {
            match merged.iter_mut().find(|(key, _)| *key == region) {
                Some((_, existing)) => existing.extend(entries),
                None => merged.push((region, entries)),
            }
        }

        let mut store = LexiconStore::default();
        for (region, entries) in merged {
            let start = store.entries.len();
            store.entries.extend(
                entries
                    .into_iter()
                    .map(|entry| RegionalEntry::new(region.clone(), entry)),
            );
            let end = store.entries.len();
            store.index.push((region, start..end));
        }
        store
    }

    /// Load a store from a JSON seed file (see [`crate::ingest::seed_from_json`]).
    pub fn from_seed_file(path: &Path) -> Result<Self, IngestError> {
        let body = std::fs::read(path).map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_regions(crate::ingest::seed_from_json(&body)?);
        tracing::info!(
            path = %path.display(),
            regions = store.index.len(),
            entries = store.entries.len(),
            "store: seed file loaded"
        );
        Ok(store)
    }

    /// The seed file at `data_path` if one is given, otherwise a copy of the
    /// builtin lexicon.
    pub fn open(data_path: Option<&Path>) -> Result<Self, IngestError> {
        match data_path {
            Some(path) => Self::from_seed_file(path),
            None => Ok(Self::builtin().clone()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LexiconSource for LexiconStore {
    fn regions(&self) -> Vec<&str> {
        self.index.iter().map(|(key, _)| key.as_str()).collect()
    }

    fn entries(&self) -> &[RegionalEntry] {
        &self.entries
    }

    fn region(&self, key: &str) -> Option<&[RegionalEntry]> {
        self.index
            .iter()
            .find(|(region, _)| region == key)
            .map(|(_, range)| &self.entries[range.clone()])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
