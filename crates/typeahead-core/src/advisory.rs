#![forbid(unsafe_code)]

//! Non-fatal advisories about questionable configuration.
//!
//! Advisories never change computed results and never block. The widget hands
//! each `(advisory, condition)` pair to an [`AdvisorySink`], which decides
//! whether to surface it. The default sink, [`TracingAdvisor`], logs a warning
//! when the condition holds.
//!
//! # Failure Modes
//!
//! | Advisory | Condition | Effect |
//! |----------|-----------|--------|
//! | [`Advisory::NonPrimitiveRecords`] | objects/arrays with a built-in predicate or formatter | none; JSON text is matched/printed |
//! | [`Advisory::CustomPredicate`] | predicate is not `strict` or `fuzzy` | none |
//! | [`Advisory::MinCharOutOfRange`] | `min_char` outside [`RECOMMENDED_MIN_CHAR`] | none |

use std::cell::RefCell;
use std::fmt;
use std::ops::RangeInclusive;

/// Recommended range for the minimum-character gate.
pub const RECOMMENDED_MIN_CHAR: RangeInclusive<usize> = 1..=5;

/// An advisory message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// Some records are objects or arrays but the predicate or formatter is a
    /// built-in that only understands their string form.
    NonPrimitiveRecords { count: usize },
    /// A caller-supplied predicate is in use.
    CustomPredicate,
    /// `min_char` is outside the recommended range.
    MinCharOutOfRange { min_char: usize },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPrimitiveRecords { count } => write!(
                f,
                "{count} non-primitive record(s) with the default predicate or formatter; \
                 supply a custom query and to_html for structured data"
            ),
            Self::CustomPredicate => f.write_str(
                "custom query predicate in use; the documented predicates are `strict` and `fuzzy`",
            ),
            Self::MinCharOutOfRange { min_char } => write!(
                f,
                "min_char = {min_char} is outside the recommended range {}..={}",
                RECOMMENDED_MIN_CHAR.start(),
                RECOMMENDED_MIN_CHAR.end()
            ),
        }
    }
}

/// Receives advisories and decides whether to surface them.
///
/// Implementations must not panic or block.
pub trait AdvisorySink {
    /// `condition` is `true` when the advisory applies.
    fn advise(&self, advisory: &Advisory, condition: bool);
}

/// Default sink: logs applicable advisories as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAdvisor;

impl AdvisorySink for TracingAdvisor {
    fn advise(&self, advisory: &Advisory, condition: bool) {
        if condition {
            tracing::warn!("{advisory}");
        }
    }
}

/// Sink that records every applicable advisory in memory.
#[derive(Debug, Default)]
pub struct RecordingAdvisor {
    seen: RefCell<Vec<Advisory>>,
}

impl RecordingAdvisor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advisories received so far with a `true` condition.
    #[must_use]
    pub fn advisories(&self) -> Vec<Advisory> {
        self.seen.borrow().clone()
    }

    /// Forget everything recorded.
    pub fn clear(&self) {
        self.seen.borrow_mut().clear();
    }
}

impl AdvisorySink for RecordingAdvisor {
    fn advise(&self, advisory: &Advisory, condition: bool) {
        if condition {
            self.seen.borrow_mut().push(advisory.clone());
        }
    }
}
