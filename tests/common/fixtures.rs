//! Static corpus bodies and seed documents used across harnesses.

use serde_json::{json, Value};

/// Wrap `data` in a successful corpus envelope.
pub fn envelope(data: Value) -> Value {
    json!({ "success": true, "data": data, "message": null })
}

/// An unsuccessful envelope carrying `message`.
pub fn failure_envelope(message: &str) -> Value {
    json!({ "success": false, "data": [], "message": message })
}

/// Search records as the corpus API returns them: camelCase, some fields
/// missing, one record without a term.
pub fn search_records() -> Value {
    json!([
        {
            "region": "tengger",
            "term": "Yadnya Kasada",
            "termCode": "TEN0001",
            "definition": "Upacara persembahan ke kawah Bromo",
            "culturalMeaning": "Syukur kepada Sang Hyang Widhi",
            "variants": ["Kasodo", "Kasada"]
        },
        {
            "region": "osing",
            "term": "Gandrung",
            "definition": "Tari pergaulan Banyuwangi"
        },
        { "region": "madura", "definition": "no term, dropped" },
        { "region": "madura", "term": "   ", "definition": "blank term, dropped" },
        { "term": "Tanpa Wilayah" }
    ])
}

/// Region terms as the corpus API returns them for `/regions/osing/terms`.
pub fn osing_terms() -> Value {
    json!([
        { "term": "Gandrung", "definition": "Tari pergaulan", "category": "tari", "termCode": "OSI0001" },
        { "term": "Seblang", "definition": "Ritual bersih desa", "category": "ritual" },
        { "term": "Kebo-keboan", "definition": "Ritual kesuburan", "transliteration": "kebo" },
    ])
}

/// A seed document with a repeated region key.
pub const SEED_JSON: &str = r#"[
  { "region": "osing", "entries": [
      { "term": "Gandrung", "definition": "Tari pergaulan" },
      { "term": "", "definition": "dropped" }
  ]},
  { "region": "tengger", "entries": [
      { "term": "Pujan", "definition": "Upacara adat", "variants": ["Pujan Kapat"] }
  ]},
  { "region": "osing", "entries": [
      { "term": "Seblang" }
  ]}
]"#;

/// Write `contents` to `name` inside a fresh temp dir. Keep the returned
/// `TempDir` alive for as long as the file is needed.
pub fn temp_file(name: &str, contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    (dir, path)
}
