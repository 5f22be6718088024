#![forbid(unsafe_code)]

//! Autocomplete widget for Typeahead.
//!
//! - [`render`]: formatters and the markup pipeline
//! - [`selection`]: the keyboard highlight state machine
//! - [`config`]: defaults, options, and option documents
//! - [`autocomplete`]: the [`Autocomplete`] widget that binds an input and a
//!   display surface together

pub mod autocomplete;
pub mod config;
pub mod render;
pub mod selection;

pub use autocomplete::{Autocomplete, passes_min_char};
pub use config::{ConfigError, Configuration, Options};
pub use render::{Formatter, apply_highlight, classic, render, render_into};
pub use selection::{Selection, SelectionController, Transition};
