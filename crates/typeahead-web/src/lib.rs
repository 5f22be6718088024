#![forbid(unsafe_code)]

//! WebAssembly adapter for Typeahead.
//!
//! Implements the element traits over `web-sys` and exposes a `Typeahead`
//! class to JavaScript. The browser-only modules compile for `wasm32`
//! targets; [`options`] and [`callback`] are plain Rust and build everywhere.
//!
//! - `dom`: `WebInput` and `WebDisplay` element handles
//! - `document`: the shared page-wide click listener
//! - `widget`: the `#[wasm_bindgen]` constructor surface
//! - [`options`]: parsing option documents handed over from JavaScript
//! - [`callback`]: returning caller exceptions once the widget is released

pub mod callback;
pub mod options;

#[cfg(target_arch = "wasm32")]
pub mod document;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod widget;

#[cfg(target_arch = "wasm32")]
pub use dom::{WebDisplay, WebInput};
#[cfg(target_arch = "wasm32")]
pub use widget::Typeahead;

pub use options::{dataset_from_json, options_from_json};
