#![forbid(unsafe_code)]

//! Typeahead public facade.
//!
//! Re-exports the pieces most hosts need. Hosts implement the element traits
//! in [`dom`] (or use the `typeahead-web` adapter), build an [`Autocomplete`],
//! and forward [`Event`]s to it.
//!
//! ```
//! use typeahead::prelude::*;
//! use typeahead_harness::dom::{MemoryDisplay, MemoryInput};
//!
//! let input = MemoryInput::new();
//! let display = MemoryDisplay::new();
//! let mut widget = Autocomplete::new(input.clone(), display.clone(), Options::new());
//!
//! input.set_value("vo");
//! widget.handle(Event::Input);
//! widget.handle(NavKey::Down.into());
//! widget.handle(NavKey::Enter.into());
//! assert_eq!(input.value(), "Volkswagen");
//! assert_eq!(display.item_count(), 0);
//! ```

pub use typeahead_core::{advisory, document, dom, event, id, plugin, record};
pub use typeahead_text as text;
pub use typeahead_widgets::{autocomplete, config, render, selection};

pub use typeahead_core::{
    Advisory, AdvisorySink, ClickChannel, DisplaySurface, Element, Event, Handled, InputElement,
    KeyEvent, NavKey, Plugin, Record, Subscription, TracingAdvisor, WidgetId,
};
pub use typeahead_text::{Query, filter};
pub use typeahead_widgets::{
    Autocomplete, ConfigError, Configuration, Formatter, Options, Selection,
};

#[cfg(feature = "tracing-json")]
pub use typeahead_core::logging;

/// Everything needed to bind and drive a widget.
pub mod prelude {
    pub use crate::{
        Autocomplete, DisplaySurface, Element, Event, Formatter, Handled, InputElement, NavKey,
        Options, Query, Record,
    };
}
