#![forbid(unsafe_code)]

//! Match engine for Typeahead.
//!
//! Decides which dataset records match the current input text. Filtering is a
//! single ordered pass: every record is tested with the configured [`Query`]
//! and kept in its original position. No ranking, no de-duplication.
//!
//! # Example
//!
//! ```
//! use typeahead_core::record::dataset;
//! use typeahead_text::{Query, filter};
//!
//! let data = dataset(["Volkswagen", "Mercedes", "Daimler"]);
//! let hits = filter(&data, "vo", &Query::Strict);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].as_str(), Some("Volkswagen"));
//!
//! let hits = filter(&data, "ml", &Query::Fuzzy);
//! assert_eq!(hits[0].as_str(), Some("Daimler"));
//! ```

pub mod matching;
pub mod query;

pub use matching::{filter, fuzzy, fuzzy_matches, strict};
pub use query::{Predicate, Query};
