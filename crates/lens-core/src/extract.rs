//! Pull a JSON object out of free-form model output.
//!
//! Extraction runs in two steps so each failure mode is visible on its own:
//! [`locate_candidate`] finds the span between the first `{` and the last
//! `}`, then [`parse_candidate`] parses it and insists on an object.
//!
//! The outermost-brace span tolerates prose, markdown fences and stray braces
//! around a single object. Two independent objects in the same text end up
//! in one span and fail to parse.

use serde_json::Value;
use tracing::warn;

use crate::error::ExtractionError;
use crate::report::model::MarketReport;

/// Longest slice of raw text echoed into logs on failure.
const LOG_SNIPPET_CHARS: usize = 200;

/// Extract the report object embedded in `raw`.
pub fn extract(raw: &str) -> Result<MarketReport, ExtractionError> {
    let result = locate_candidate(raw)
        .ok_or(ExtractionError::NoJson)
        .and_then(parse_candidate);

    if let Err(e) = &result {
        warn!(
            error = %e,
            raw_len = raw.len(),
            snippet = %snippet(raw),
            "Could not extract JSON from model output"
        );
    }

    result
}

/// Span from the first `{` to the last `}` inclusive.
pub fn locate_candidate(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

/// Parse a candidate span, rejecting anything but an object.
pub fn parse_candidate(span: &str) -> Result<MarketReport, ExtractionError> {
    match serde_json::from_str::<Value>(span)? {
        Value::Object(map) => Ok(MarketReport::from_map(map)),
        other => Err(ExtractionError::NotAnObject(json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn snippet(raw: &str) -> String {
    raw.chars().take(LOG_SNIPPET_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_with_surrounding_prose() {
        let raw = "Sure! Here is the analysis:\n{\"avgPrice\": 250, \"competitors\": [\"A\"]}\nLet me know if you need more.";
        let report = extract(raw).unwrap();
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({"avgPrice": 250, "competitors": ["A"]})
        );
    }

    #[test]
    fn test_extract_markdown_fenced() {
        let raw = "```json\n{\"opportunityScore\": 72, \"trendData\": {\"labels\": [], \"values\": []}}\n```";
        let report = extract(raw).unwrap();
        assert_eq!(report.opportunity_score(), Some(72.0));
        assert!(report.contains_key("trendData"));
    }

    #[test]
    fn test_extract_bare_object() {
        let report = extract("{}").unwrap();
        assert!(report.as_map().is_empty());
    }

    #[test]
    fn test_no_braces_is_no_json() {
        let err = extract("I cannot help with that request.").unwrap_err();
        assert!(matches!(err, ExtractionError::NoJson));
        assert!(!err.is_parse_failure());
    }

    #[test]
    fn test_reversed_braces_is_no_json() {
        assert_eq!(locate_candidate("} nothing here {"), None);
        assert!(matches!(
            extract("} nothing here {").unwrap_err(),
            ExtractionError::NoJson
        ));
    }

    #[test]
    fn test_only_opening_brace_is_no_json() {
        assert!(matches!(
            extract("{\"a\": 1, \"b\":").unwrap_err(),
            ExtractionError::NoJson
        ));
    }

    #[test]
    fn test_truncated_object_is_parse_failure() {
        let err = extract("Result: {\"a\": 1, \"b\": {\"c\": 2}").unwrap_err();
        assert!(matches!(err, ExtractionError::Parse(_)));
        assert!(err.to_string().starts_with("parse failure"));
    }

    #[test]
    fn test_trailing_commentary_inside_span_is_parse_failure() {
        let raw = "{\"a\": 1} and also {note: this is not json}";
        assert_eq!(locate_candidate(raw), Some("{\"a\": 1} and also {note: this is not json}"));
        assert!(matches!(extract(raw).unwrap_err(), ExtractionError::Parse(_)));
    }

    #[test]
    fn test_two_objects_merge_into_one_span() {
        let raw = "First {\"a\": 1} then {\"b\": 2} done";
        assert_eq!(locate_candidate(raw), Some("{\"a\": 1} then {\"b\": 2}"));
        assert!(extract(raw).unwrap_err().is_parse_failure());
    }

    #[test]
    fn test_nested_braces_in_strings() {
        let raw = "x {\"recommendation\": \"Use {braces} freely\"} y";
        let report = extract(raw).unwrap();
        assert_eq!(report.recommendation(), Some("Use {braces} freely"));
    }

    #[test]
    fn test_non_object_top_level_rejected() {
        assert!(matches!(
            parse_candidate("[1, 2]").unwrap_err(),
            ExtractionError::NotAnObject("array")
        ));
        assert!(matches!(
            parse_candidate("\"text\"").unwrap_err(),
            ExtractionError::NotAnObject("string")
        ));
    }

    #[test]
    fn test_multibyte_text_around_object() {
        let raw = "Voilà — café ☕ {\"competitors\": [\"Café Royal\"]} ✓";
        let report = extract(raw).unwrap();
        assert_eq!(report.competitors(), vec!["Café Royal"]);
    }
}
