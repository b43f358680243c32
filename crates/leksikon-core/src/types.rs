//! Core types for leksikon-core.
//!
//! This module defines the data structures shared across every layer: the
//! glossary [`LexiconEntry`], its region-tagged form [`RegionalEntry`], the
//! region-page [`RegionTerm`] shape, and the ephemeral [`SearchResult`] with
//! its [`MatchField`] annotations.

use serde::Serialize;

/// Placeholder rendered for an absent optional field.
pub const NO_VALUE: &str = "—";

/// A cultural glossary record.
///
/// `term` and `definition` are always present. Every other descriptive field
/// is optional and an absent value means "no value", never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LexiconEntry {
    /// Headword. Never empty.
    pub term: String,
    /// Short alphanumeric tag derived from region key + term, see
    /// [`crate::slug::term_code`]. Stable per entry, not globally unique.
    pub term_code: String,
    pub definition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etymology: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural_meaning: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_meaning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
}

impl LexiconEntry {
    /// An entry with only the required fields set. The term code is derived
    /// from `region` and `term`.
    pub fn new(region: &str, term: impl Into<String>, definition: impl Into<String>) -> Self {
        let term = term.into();
        Self {
            term_code: crate::slug::term_code(region, &term),
            term,
            definition: definition.into(),
            etymology: None,
            cultural_meaning: None,
            variants: Vec::new(),
            common_meaning: None,
            note: None,
            availability: None,
            transliteration: None,
            image_id: None,
        }
    }

    /// URL slug of the headword.
    pub fn slug(&self) -> String {
        crate::slug::slugify(&self.term)
    }

    /// Text of an optional field, or [`NO_VALUE`] when absent or blank.
    pub fn display(value: Option<&str>) -> &str {
        match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => NO_VALUE,
        }
    }
}

impl AsRef<LexiconEntry> for LexiconEntry {
    fn as_ref(&self) -> &LexiconEntry {
        self
    }
}

/// A [`LexiconEntry`] tagged with the region key it is grouped under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionalEntry {
    pub region: String,
    #[serde(flatten)]
    pub entry: LexiconEntry,
}

impl RegionalEntry {
    pub fn new(region: impl Into<String>, entry: LexiconEntry) -> Self {
        Self {
            region: region.into(),
            entry,
        }
    }
}

impl AsRef<LexiconEntry> for RegionalEntry {
    fn as_ref(&self) -> &LexiconEntry {
        &self.entry
    }
}

/// The region-page result shape.
///
/// Unlike [`LexiconEntry`] it carries a `category` and none of the long-form
/// descriptive fields; it is what the corpus API returns for a region listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionTerm {
    pub term: String,
    pub definition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<String>,
    pub term_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<&LexiconEntry> for RegionTerm {
    fn from(entry: &LexiconEntry) -> Self {
        Self {
            term: entry.term.clone(),
            definition: entry.definition.clone(),
            transliteration: entry.transliteration.clone(),
            term_code: entry.term_code.clone(),
            category: None,
        }
    }
}

/// A searchable field of [`LexiconEntry`], in fixed check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchField {
    Term,
    Transliteration,
    Definition,
    Etymology,
    CulturalMeaning,
    CommonMeaning,
    Variants,
    Note,
    TermCode,
}

impl MatchField {
    /// Every field, in the order the ranker checks them.
    pub const ALL: [MatchField; 9] = [
        MatchField::Term,
        MatchField::Transliteration,
        MatchField::Definition,
        MatchField::Etymology,
        MatchField::CulturalMeaning,
        MatchField::CommonMeaning,
        MatchField::Variants,
        MatchField::Note,
        MatchField::TermCode,
    ];

    /// Relevance contributed when this field contains the query.
    pub fn weight(self) -> u32 {
        match self {
            MatchField::Term => 100,
            MatchField::Transliteration => 90,
            MatchField::Definition => 80,
            MatchField::Etymology => 70,
            MatchField::CulturalMeaning => 70,
            MatchField::CommonMeaning => 60,
            MatchField::Variants => 50,
            MatchField::Note => 40,
            MatchField::TermCode => 30,
        }
    }

    /// Wire name of the field (camelCase).
    pub fn as_str(self) -> &'static str {
        match self {
            MatchField::Term => "term",
            MatchField::Transliteration => "transliteration",
            MatchField::Definition => "definition",
            MatchField::Etymology => "etymology",
            MatchField::CulturalMeaning => "culturalMeaning",
            MatchField::CommonMeaning => "commonMeaning",
            MatchField::Variants => "variants",
            MatchField::Note => "note",
            MatchField::TermCode => "termCode",
        }
    }
}

impl std::fmt::Display for MatchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ranked search hit. Borrowed from the searched slice; recomputed on
/// every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<'a, E = LexiconEntry> {
    pub entry: &'a E,
    /// Matched fields, in [`MatchField::ALL`] order.
    pub matches: Vec<MatchField>,
    /// Sum of [`MatchField::weight`] over `matches`.
    pub relevance: u32,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
