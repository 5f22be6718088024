#![forbid(unsafe_code)]

//! Test harness for Typeahead.
//!
//! - [`dom`]: in-memory input, display, and document handles
//! - [`snapshot`]: the [`assert_snapshot!`] macro and its file layout

pub mod dom;
pub mod snapshot;

pub use dom::{MemoryDisplay, MemoryDocument, MemoryInput, NodeId};
pub use snapshot::Snapshot;
