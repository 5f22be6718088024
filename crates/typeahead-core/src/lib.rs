#![forbid(unsafe_code)]

//! Core contracts for Typeahead.
//!
//! This crate holds everything the widget layer and the host adapters share:
//!
//! - [`record`]: the opaque dataset [`Record`](record::Record)
//! - [`event`]: the event vocabulary hosts translate native events into
//! - [`dom`]: element handle traits implemented by hosts
//! - [`document`]: the document click channel with RAII subscriptions
//! - [`advisory`]: non-fatal configuration advisories
//! - [`plugin`]: fire-and-forget plugin registration
//! - [`id`]: per-instance widget identifiers

pub mod advisory;
pub mod document;
pub mod dom;
pub mod event;
pub mod id;
#[cfg(feature = "tracing-json")]
pub mod logging;
pub mod plugin;
pub mod record;

pub use advisory::{Advisory, AdvisorySink, RecordingAdvisor, TracingAdvisor};
pub use document::{ClickChannel, Subscription};
pub use dom::{DisplaySurface, Element, InputElement, SELECTED_CLASS, VALUE_ATTRIBUTE};
pub use event::{Event, Handled, KeyEvent, NavKey};
pub use id::WidgetId;
pub use plugin::{Plugin, PluginRegistry};
pub use record::Record;
