#![forbid(unsafe_code)]

//! Option documents received from JavaScript.
//!
//! JavaScript callers pass a plain object. Callback-valued keys are peeled
//! off first (see [`CALLBACK_KEYS`]); what remains is serialized with
//! `JSON.stringify` and parsed here.

use typeahead_core::record::Record;
use typeahead_widgets::{ConfigError, Options};

/// Keys that may carry functions or plugin objects rather than data.
pub const CALLBACK_KEYS: [&str; 3] = ["query", "toHtml", "plugins"];

/// Parse a stringified options object.
///
/// `None`, `"null"` and `"undefined"` (what `JSON.stringify` yields for a
/// missing argument) mean "all defaults".
pub fn options_from_json(json: Option<&str>) -> Result<Options, ConfigError> {
    match json.map(str::trim) {
        None | Some("" | "null" | "undefined") => Ok(Options::new()),
        Some(text) => Options::from_json(text),
    }
}

/// Parse a stringified dataset array.
pub fn dataset_from_json(json: &str) -> Result<Vec<Record>, ConfigError> {
    serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_options_are_defaults() {
        for raw in [None, Some("null"), Some("undefined"), Some("  ")] {
            let o = options_from_json(raw).unwrap();
            assert!(o.data.is_none());
            assert!(o.min_char.is_none());
        }
    }

    #[test]
    fn camel_case_object() {
        let o = options_from_json(Some(r#"{"minChar": 2, "closeOnClickAway": true}"#)).unwrap();
        assert_eq!(o.min_char, Some(2));
        assert_eq!(o.close_on_click_away, Some(true));
    }

    #[test]
    fn named_query_survives_stringify() {
        let o = options_from_json(Some(r#"{"query": "fuzzy"}"#)).unwrap();
        assert_eq!(o.query.map(|q| q.name()), Some("fuzzy"));
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = options_from_json(Some(r#"{"toHtml": "grid"}"#)).unwrap_err();
        assert_eq!(err, ConfigError::UnknownFormatter("grid".into()));
    }

    #[test]
    fn dataset_accepts_mixed_records() {
        let data = dataset_from_json(r#"["Volvo", 1998, {"make": "Saab"}]"#).unwrap();
        assert_eq!(data.len(), 3);
        assert!(!data[2].is_primitive());
    }

    #[test]
    fn dataset_must_be_an_array() {
        assert!(matches!(
            dataset_from_json(r#"{"a": 1}"#),
            Err(ConfigError::Parse(_))
        ));
    }
}
