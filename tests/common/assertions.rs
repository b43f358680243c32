//! Domain-specific assertion macros for leksikon harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which lexicon contract was violated.

// ---------------------------------------------------------------------------
// Search result assertions
// ---------------------------------------------------------------------------

/// Assert the terms of a ranked result list, in order.
///
/// ```rust
/// assert_ranked!(results, ["Gandrung", "Seblang"]);
/// ```
#[macro_export]
macro_rules! assert_ranked {
    ($results:expr, [$($term:expr),* $(,)?]) => {{
        let actual: Vec<String> = $results
            .iter()
            .map(|r| r.entry.as_ref().term.clone())
            .collect();
        let expected: Vec<String> = vec![$($term.to_string()),*];
        pretty_assertions::assert_eq!(actual, expected, "ranked order differs");
    }};
}

/// Assert the matched fields and relevance of one search result.
///
/// ```rust
/// assert_hit!(results[0], [MatchField::Term], 100);
/// ```
#[macro_export]
macro_rules! assert_hit {
    ($result:expr, [$($field:expr),* $(,)?], $relevance:expr) => {{
        let result = &$result;
        let expected: Vec<leksikon_core::MatchField> = vec![$($field),*];
        if result.matches != expected || result.relevance != $relevance {
            panic!(
                "assert_hit! failed for {:?}:\n  expected: {:?} / {}\n  actual:   {:?} / {}",
                result.entry.as_ref().term,
                expected,
                $relevance,
                result.matches,
                result.relevance
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Envelope assertions
// ---------------------------------------------------------------------------

/// Assert that a JSON value is a successful envelope and return its `data`
/// array.
#[macro_export]
macro_rules! assert_envelope_ok {
    ($body:expr) => {{
        let body: &serde_json::Value = &$body;
        if body["success"] != serde_json::Value::Bool(true) {
            panic!("assert_envelope_ok! failed: not a successful envelope:\n  {body:#}");
        }
        body["data"]
            .as_array()
            .unwrap_or_else(|| panic!("assert_envelope_ok! failed: data is not an array:\n  {body:#}"))
            .clone()
    }};
}

/// Assert that a JSON value is an unsuccessful envelope with an empty
/// `data` array and a message containing `$needle`.
#[macro_export]
macro_rules! assert_envelope_err {
    ($body:expr, $needle:expr) => {{
        let body: &serde_json::Value = &$body;
        let message = body["message"].as_str().unwrap_or_default();
        if body["success"] != serde_json::Value::Bool(false)
            || body["data"] != serde_json::json!([])
            || !message.contains($needle)
        {
            panic!(
                "assert_envelope_err! failed: expected failure mentioning {:?}:\n  {body:#}",
                $needle
            );
        }
    }};
}
