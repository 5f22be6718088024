#![forbid(unsafe_code)]

//! DOM-like element contracts.
//!
//! The widget never touches a real document. Hosts hand it element *handles*
//! implementing these traits: cheap to clone, with interior mutability, the
//! way browser element references behave. The web adapter implements them
//! over `web-sys`; the test harness implements them in memory.
//!
//! # Rendered item contract
//!
//! Every item a formatter emits must carry a [`VALUE_ATTRIBUTE`] holding the
//! value to commit, and must accept the [`SELECTED_CLASS`] marker. Surfaces
//! read the attribute back in [`DisplaySurface::item_value`].

/// Attribute carrying an item's committed value.
pub const VALUE_ATTRIBUTE: &str = "data-value";

/// Class toggled on the highlighted item.
pub const SELECTED_CLASS: &str = "selected";

/// Common behavior of every bound element.
pub trait Element {
    /// The host's node type, used to resolve click targets.
    type Node;

    /// Whether `node` is this element or one of its descendants.
    fn contains_node(&self, node: &Self::Node) -> bool;
}

/// A single-line text input.
pub trait InputElement: Element {
    /// Current text content.
    fn value(&self) -> String;

    /// Replace the text content.
    fn set_value(&self, value: &str);
}

/// The element that shows rendered matches.
pub trait DisplaySurface: Element {
    /// Replace the surface's content wholesale with `markup`.
    ///
    /// Implementations re-enumerate the rendered items and re-attach their
    /// click handlers; no state from the previous content survives.
    fn replace_markup(&self, markup: &str);

    /// Number of rendered items currently shown.
    fn item_count(&self) -> usize;

    /// The [`VALUE_ATTRIBUTE`] of the item at `index`.
    fn item_value(&self, index: usize) -> Option<String>;

    /// Add or remove the [`SELECTED_CLASS`] marker on the item at `index`.
    fn set_item_selected(&self, index: usize, selected: bool);

    /// Show or hide the surface.
    fn set_visible(&self, visible: bool);

    /// Remove all rendered items.
    fn clear(&self) {
        self.replace_markup("");
    }
}
