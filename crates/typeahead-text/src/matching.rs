#![forbid(unsafe_code)]

//! Built-in predicates and the filter pass.
//!
//! # Invariants
//!
//! 1. **Order preserving**: [`filter`] returns records in dataset order.
//! 2. **Case-insensitive**: both predicates compare Unicode lowercase forms.
//! 3. **Empty query matches everything**: for `strict` the empty string is a
//!    substring of every string; for `fuzzy` the scan starts already at the
//!    end of an empty needle.
//! 4. **Fuzzy ignores spaces in the query only**: spaces in the record still
//!    take part in the scan as ordinary characters.

use typeahead_core::record::Record;

use crate::query::Query;

/// Case-insensitive substring containment on the record's string form.
#[must_use]
pub fn strict(record: &Record, text: &str) -> bool {
    record
        .text()
        .to_lowercase()
        .contains(&text.to_lowercase())
}

/// Case-insensitive subsequence match.
///
/// Spaces are stripped from `text`; what remains must occur in order (not
/// necessarily contiguously) in the record's string form. On success the
/// record's characters, rebuilt through the scan, are returned.
///
/// ```
/// use typeahead_core::record::Record;
/// use typeahead_text::fuzzy;
///
/// let vw = Record::from("Volkswagen");
/// assert_eq!(fuzzy(&vw, "vw").as_deref(), Some("Volkswagen"));
/// assert_eq!(fuzzy(&vw, "wv"), None);
/// ```
#[must_use]
pub fn fuzzy(record: &Record, text: &str) -> Option<String> {
    let needle: Vec<char> = text
        .chars()
        .filter(|c| *c != ' ')
        .flat_map(char::to_lowercase)
        .collect();

    let haystack = record.text();
    let mut rebuilt = String::with_capacity(haystack.len());
    let mut pos = 0;
    for ch in haystack.chars() {
        for folded in ch.to_lowercase() {
            if pos < needle.len() && folded == needle[pos] {
                pos += 1;
            }
        }
        rebuilt.push(ch);
    }

    (pos == needle.len()).then_some(rebuilt)
}

/// [`fuzzy`] reduced to a yes/no answer.
#[must_use]
pub fn fuzzy_matches(record: &Record, text: &str) -> bool {
    fuzzy(record, text).is_some()
}

/// Keep the records `query` accepts for `text`, in dataset order.
#[must_use]
pub fn filter<'a>(dataset: &'a [Record], text: &str, query: &Query) -> Vec<&'a Record> {
    let _span = tracing::trace_span!(
        "filter",
        query = query.name(),
        records = dataset.len(),
        text_len = text.len()
    )
    .entered();

    let hits: Vec<&Record> = dataset
        .iter()
        .filter(|record| query.matches(record, text))
        .collect();
    tracing::trace!(hits = hits.len(), "filter pass complete");
    hits
}
