#![forbid(unsafe_code)]

//! In-memory element handles.
//!
//! These stand in for browser elements in tests. Every handle is a cheap
//! clone sharing its state, so a test can keep one copy while the widget owns
//! another, exactly as with real element references.
//!
//! [`MemoryDisplay`] understands just enough markup to honor the rendered
//! item contract: every non-empty line of replaced markup is one item, and
//! its `data-value` attribute is read back (entity-decoded) as the item's
//! value.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use typeahead_core::document::ClickChannel;
use typeahead_core::dom::{DisplaySurface, Element, InputElement, VALUE_ATTRIBUTE};

static NEXT_NODE: AtomicU64 = AtomicU64::new(1);

/// Identity of an in-memory node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// A node no other handle owns.
    #[must_use]
    pub fn fresh() -> Self {
        Self(NEXT_NODE.fetch_add(1, Ordering::Relaxed))
    }
}

// ============================================================================
// Input
// ============================================================================

/// A text input.
#[derive(Debug, Clone)]
pub struct MemoryInput {
    node: NodeId,
    value: Rc<RefCell<String>>,
}

impl Default for MemoryInput {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryInput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            node: NodeId::fresh(),
            value: Rc::new(RefCell::new(String::new())),
        }
    }

    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }
}

impl Element for MemoryInput {
    type Node = NodeId;

    fn contains_node(&self, node: &NodeId) -> bool {
        *node == self.node
    }
}

impl InputElement for MemoryInput {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        value.clone_into(&mut self.value.borrow_mut());
    }
}

// ============================================================================
// Display
// ============================================================================

#[derive(Debug, Clone)]
struct Item {
    node: NodeId,
    value: Option<String>,
    selected: bool,
}

#[derive(Debug)]
struct DisplayState {
    markup: String,
    items: Vec<Item>,
    visible: bool,
}

/// A display surface holding rendered items.
#[derive(Debug, Clone)]
pub struct MemoryDisplay {
    node: NodeId,
    state: Rc<RefCell<DisplayState>>,
}

impl Default for MemoryDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDisplay {
    /// An empty, visible surface.
    #[must_use]
    pub fn new() -> Self {
        Self {
            node: NodeId::fresh(),
            state: Rc::new(RefCell::new(DisplayState {
                markup: String::new(),
                items: Vec::new(),
                visible: true,
            })),
        }
    }

    /// The surface's own node.
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Node of the item at `index`.
    #[must_use]
    pub fn item_node(&self, index: usize) -> Option<NodeId> {
        self.state.borrow().items.get(index).map(|item| item.node)
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.state.borrow().visible
    }

    /// Markup from the last replacement.
    #[must_use]
    pub fn markup(&self) -> String {
        self.state.borrow().markup.clone()
    }

    /// Indices of items carrying the selected marker.
    #[must_use]
    pub fn selected_indices(&self) -> Vec<usize> {
        self.state
            .borrow()
            .items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| item.selected.then_some(i))
            .collect()
    }

    /// Plain-text rendering for snapshot comparison.
    ///
    /// ```text
    /// visible: true
    /// > 0 Volkswagen
    ///   1 Mercedes
    /// ```
    #[must_use]
    pub fn snapshot(&self) -> String {
        let state = self.state.borrow();
        let mut out = format!("visible: {}\n", state.visible);
        if state.items.is_empty() {
            out.push_str("(empty)\n");
        }
        for (i, item) in state.items.iter().enumerate() {
            let marker = if item.selected { '>' } else { ' ' };
            let value = item.value.as_deref().unwrap_or("<no value>");
            let _ = writeln!(out, "{marker} {i} {value}");
        }
        out
    }
}

impl Element for MemoryDisplay {
    type Node = NodeId;

    fn contains_node(&self, node: &NodeId) -> bool {
        *node == self.node || self.state.borrow().items.iter().any(|i| i.node == *node)
    }
}

impl DisplaySurface for MemoryDisplay {
    fn replace_markup(&self, markup: &str) {
        let items: Vec<Item> = markup
            .split('\n')
            .filter(|fragment| !fragment.trim().is_empty())
            .map(|fragment| Item {
                node: NodeId::fresh(),
                value: attribute(fragment, VALUE_ATTRIBUTE),
                selected: false,
            })
            .collect();
        tracing::trace!(items = items.len(), "memory display replaced");

        let mut state = self.state.borrow_mut();
        markup.clone_into(&mut state.markup);
        state.items = items;
    }

    fn item_count(&self) -> usize {
        self.state.borrow().items.len()
    }

    fn item_value(&self, index: usize) -> Option<String> {
        self.state.borrow().items.get(index)?.value.clone()
    }

    fn set_item_selected(&self, index: usize, selected: bool) {
        if let Some(item) = self.state.borrow_mut().items.get_mut(index) {
            item.selected = selected;
        }
    }

    fn set_visible(&self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }
}

/// Value of the first `name="..."` (or single-quoted) attribute in `fragment`.
fn attribute(fragment: &str, name: &str) -> Option<String> {
    let needle = format!("{name}=");
    let mut rest = fragment;
    while let Some(at) = rest.find(&needle) {
        let preceded_by_space = rest[..at].ends_with(char::is_whitespace);
        let after = &rest[at + needle.len()..];
        if preceded_by_space {
            let quote = after.chars().next().filter(|q| *q == '"' || *q == '\'')?;
            let body = &after[1..];
            let end = body.find(quote)?;
            return Some(decode_entities(&body[..end]));
        }
        rest = after;
    }
    None
}

fn decode_entities(text: &str) -> String {
    text.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&#x2f;", "/")
        .replace("&#10;", "\n")
        .replace("&#13;", "\r")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

// ============================================================================
// Document
// ============================================================================

/// A document that forwards clicks to subscribed widgets.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    channel: ClickChannel<NodeId>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn channel(&self) -> &ClickChannel<NodeId> {
        &self.channel
    }

    /// Deliver a click on `target` to every listener.
    pub fn click(&self, target: &NodeId) {
        self.channel.emit(target);
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.channel.listener_count()
    }
}
