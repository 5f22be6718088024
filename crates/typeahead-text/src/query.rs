#![forbid(unsafe_code)]

//! Pluggable match predicates.
//!
//! A [`Query`] is a capability rather than a type hierarchy: one of the two
//! built-in predicates, or any closure with the [`Predicate`] signature.
//! Custom closures are accepted as-is; the widget layer raises an advisory
//! for them but never rejects them.

use std::fmt;
use std::rc::Rc;

use typeahead_core::record::Record;

use crate::matching::{fuzzy_matches, strict};

/// Signature of a match predicate: `(record, input text) -> matches`.
pub type Predicate = dyn Fn(&Record, &str) -> bool;

/// The predicate used to filter the dataset.
#[derive(Clone, Default)]
pub enum Query {
    /// Case-insensitive substring containment.
    #[default]
    Strict,
    /// Case-insensitive ordered subsequence, spaces in the query ignored.
    Fuzzy,
    /// Caller-supplied predicate.
    Custom(Rc<Predicate>),
}

impl Query {
    /// Wrap a closure as a custom predicate.
    pub fn custom(predicate: impl Fn(&Record, &str) -> bool + 'static) -> Self {
        Self::Custom(Rc::new(predicate))
    }

    /// Resolve a built-in predicate by name (`"strict"` or `"fuzzy"`).
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "strict" => Some(Self::Strict),
            "fuzzy" => Some(Self::Fuzzy),
            _ => None,
        }
    }

    /// Short name, `"custom"` for caller predicates.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Fuzzy => "fuzzy",
            Self::Custom(_) => "custom",
        }
    }

    /// Whether this is one of the documented built-in predicates.
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Test a single record against the input text.
    ///
    /// Panics raised by a custom predicate propagate to the caller.
    #[must_use]
    pub fn matches(&self, record: &Record, text: &str) -> bool {
        match self {
            Self::Strict => strict(record, text),
            Self::Fuzzy => fuzzy_matches(record, text),
            Self::Custom(predicate) => predicate(record, text),
        }
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<F> From<F> for Query
where
    F: Fn(&Record, &str) -> bool + 'static,
{
    fn from(predicate: F) -> Self {
        Self::custom(predicate)
    }
}
