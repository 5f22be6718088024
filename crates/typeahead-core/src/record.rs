#![forbid(unsafe_code)]

//! Opaque dataset records.
//!
//! A [`Record`] is whatever the caller put in the dataset: usually a string,
//! sometimes a structured object. The widget never mutates records; it only
//! asks for their *string form* when the built-in predicates and formatter
//! need something to compare or print.
//!
//! # String form
//!
//! | Value | String form |
//! |-------|-------------|
//! | `"Volkswagen"` | `Volkswagen` |
//! | `42`, `true`, `null` | `42`, `true`, `null` |
//! | `[1, 2]`, `{"a": 1}` | compact JSON |

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One element of the caller-supplied dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Value);

impl Record {
    /// Wrap an arbitrary JSON value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// The underlying value.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// The string payload, if this record is a plain string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    /// Whether the record is a string, number, boolean, or null.
    ///
    /// Arrays and objects are not primitive; the built-in predicates and
    /// formatter only see their JSON text.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        !matches!(self.0, Value::Array(_) | Value::Object(_))
    }

    /// The string form used by the built-in predicates and formatter.
    ///
    /// Borrowed for string records; allocated otherwise.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        match &self.0 {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Consume the record and return the underlying value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl From<&str> for Record {
    fn from(value: &str) -> Self {
        Self(Value::String(value.to_owned()))
    }
}

impl From<String> for Record {
    fn from(value: String) -> Self {
        Self(Value::String(value))
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Build a dataset from anything that converts into records.
///
/// ```
/// use typeahead_core::record::{Record, dataset};
///
/// let data = dataset(["Volkswagen", "Mercedes"]);
/// assert_eq!(data, vec![Record::from("Volkswagen"), Record::from("Mercedes")]);
/// ```
pub fn dataset<T: Into<Record>>(items: impl IntoIterator<Item = T>) -> Vec<Record> {
    items.into_iter().map(Into::into).collect()
}
