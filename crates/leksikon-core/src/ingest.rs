//! Ingestion — the trust boundary between untyped corpus JSON and the typed
//! lexicon model.
//!
//! The corpus API wraps every response in an envelope:
//!
//! ```json
//! { "success": true, "data": [ { "term": "Pujan", "definition": "…" } ], "message": null }
//! ```
//!
//! A response is accepted only when `success` is literally `true` and `data`
//! is an array. Inside `data`, each record is coerced into a typed entry;
//! records that do not deserialize or have a missing/blank `term` are dropped
//! without failing the batch.

use serde::Deserialize;
use serde_json::Value;

use crate::error::IngestError;
use crate::types::{LexiconEntry, RegionTerm, RegionalEntry};

/// Loosely-typed record as it appears on the wire. Every field is optional
/// here; [`RawRecord::into_regional`] decides what is acceptable.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawRecord {
    term: Option<String>,
    term_code: Option<String>,
    definition: Option<String>,
    etymology: Option<String>,
    cultural_meaning: Option<String>,
    variants: Option<Vec<String>>,
    common_meaning: Option<String>,
    note: Option<String>,
    availability: Option<String>,
    transliteration: Option<String>,
    image_id: Option<String>,
    region: Option<String>,
    category: Option<String>,
}

/// Blank strings count as absent.
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl RawRecord {
    fn into_regional(self, fallback_region: &str) -> Option<RegionalEntry> {
        let term = present(self.term)?;
        let region = present(self.region).unwrap_or_else(|| fallback_region.to_string());
        let term_code =
            present(self.term_code).unwrap_or_else(|| crate::slug::term_code(&region, &term));

        let entry = LexiconEntry {
            term,
            term_code,
            definition: self.definition.unwrap_or_default(),
            etymology: present(self.etymology),
            cultural_meaning: present(self.cultural_meaning),
            variants: self
                .variants
                .unwrap_or_default()
                .into_iter()
                .filter_map(|v| present(Some(v)))
                .collect(),
            common_meaning: present(self.common_meaning),
            note: present(self.note),
            availability: present(self.availability),
            transliteration: present(self.transliteration),
            image_id: present(self.image_id),
        };
        Some(RegionalEntry::new(region, entry))
    }

    fn into_region_term(self, region: &str) -> Option<RegionTerm> {
        let term = present(self.term)?;
        let term_code =
            present(self.term_code).unwrap_or_else(|| crate::slug::term_code(region, &term));
        Some(RegionTerm {
            term,
            definition: self.definition.unwrap_or_default(),
            transliteration: present(self.transliteration),
            term_code,
            category: present(self.category),
        })
    }
}

/// Validate an envelope and return its raw `data` records.
pub fn unwrap_envelope(body: &[u8]) -> Result<Vec<Value>, IngestError> {
    let mut envelope: Value = serde_json::from_slice(body)?;

    if envelope.get("success").and_then(Value::as_bool) != Some(true) {
        let message = envelope
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned);
        return Err(IngestError::Unsuccessful { message });
    }

    match envelope.get_mut("data").map(Value::take) {
        Some(Value::Array(records)) => Ok(records),
        _ => Err(IngestError::MissingData),
    }
}

/// Coerce raw records into region-tagged entries, dropping invalid ones.
///
/// Records without a `region` field are assigned `fallback_region`.
pub fn entries_from_records(records: Vec<Value>, fallback_region: &str) -> Vec<RegionalEntry> {
    let total = records.len();
    let entries: Vec<RegionalEntry> = records
        .into_iter()
        .filter_map(|record| decode(record)?.into_regional(fallback_region))
        .collect();
    if entries.len() < total {
        tracing::debug!(
            dropped = total - entries.len(),
            kept = entries.len(),
            "ingest: dropped invalid lexicon records"
        );
    }
    entries
}

/// Parse a search/listing envelope into entries.
pub fn entries_from_envelope(
    body: &[u8],
    fallback_region: &str,
) -> Result<Vec<RegionalEntry>, IngestError> {
    Ok(entries_from_records(unwrap_envelope(body)?, fallback_region))
}

/// Parse a region listing envelope into [`RegionTerm`]s.
pub fn region_terms_from_envelope(body: &[u8], region: &str) -> Result<Vec<RegionTerm>, IngestError> {
    let records = unwrap_envelope(body)?;
    let total = records.len();
    let terms: Vec<RegionTerm> = records
        .into_iter()
        .filter_map(|record| decode(record)?.into_region_term(region))
        .collect();
    if terms.len() < total {
        tracing::debug!(
            region,
            dropped = total - terms.len(),
            "ingest: dropped invalid region terms"
        );
    }
    Ok(terms)
}

fn decode(record: Value) -> Option<RawRecord> {
    match serde_json::from_value::<RawRecord>(record) {
        Ok(raw) => Some(raw),
        Err(err) => {
            tracing::debug!(error = %err, "ingest: record does not match entry shape");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Seed files
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SeedRegion {
    region: String,
    #[serde(default)]
    entries: Vec<Value>,
}

/// Parse a seed document: an array of `{ "region": key, "entries": [records] }`
/// objects, in display order.
pub fn seed_from_json(body: &[u8]) -> Result<Vec<(String, Vec<LexiconEntry>)>, IngestError> {
    let regions: Vec<SeedRegion> = serde_json::from_slice(body)?;
    Ok(regions
        .into_iter()
        .map(|seed| {
            let entries = entries_from_records(seed.entries, &seed.region)
                .into_iter()
                .map(|regional| regional.entry)
                .collect();
            (seed.region, entries)
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
