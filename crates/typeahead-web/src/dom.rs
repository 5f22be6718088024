#![forbid(unsafe_code)]

//! `web-sys` element handles.
//!
//! [`WebDisplay`] owns one click closure per rendered item. On every markup
//! replacement the previous closures are unhooked and parked rather than
//! dropped: a commit triggered by an item click replaces the markup from
//! inside that item's own closure, and wasm-bindgen closures must outlive
//! their invocation.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use typeahead_core::dom::{
    DisplaySurface, Element, InputElement, SELECTED_CLASS, VALUE_ATTRIBUTE,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, HtmlInputElement, MouseEvent, Node};

/// Callback invoked with the index of a clicked item. An `Err` is thrown to
/// the page.
pub type ItemDispatch = Rc<dyn Fn(usize) -> Result<(), JsValue>>;

type ItemClosure = Closure<dyn FnMut(MouseEvent) -> Result<(), JsValue>>;

// ============================================================================
// Input
// ============================================================================

/// A bound `<input>` element.
#[derive(Debug, Clone)]
pub struct WebInput {
    element: HtmlInputElement,
}

impl WebInput {
    #[must_use]
    pub fn new(element: HtmlInputElement) -> Self {
        Self { element }
    }

    #[must_use]
    pub fn element(&self) -> &HtmlInputElement {
        &self.element
    }
}

impl Element for WebInput {
    type Node = Node;

    fn contains_node(&self, node: &Node) -> bool {
        self.element.contains(Some(node))
    }
}

impl InputElement for WebInput {
    fn value(&self) -> String {
        self.element.value()
    }

    fn set_value(&self, value: &str) {
        self.element.set_value(value);
    }
}

// ============================================================================
// Display
// ============================================================================

#[derive(Default)]
struct ItemHandlers {
    live: Vec<(web_sys::Element, ItemClosure)>,
    retired: Vec<ItemClosure>,
}

/// A bound display element whose children are the rendered items.
#[derive(Clone)]
pub struct WebDisplay {
    element: HtmlElement,
    dispatch: Rc<RefCell<Option<ItemDispatch>>>,
    handlers: Rc<RefCell<ItemHandlers>>,
}

impl fmt::Debug for WebDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebDisplay")
            .field("items", &self.handlers.borrow().live.len())
            .field("dispatch", &self.dispatch.borrow().is_some())
            .finish()
    }
}

impl WebDisplay {
    #[must_use]
    pub fn new(element: HtmlElement) -> Self {
        Self {
            element,
            dispatch: Rc::new(RefCell::new(None)),
            handlers: Rc::new(RefCell::new(ItemHandlers::default())),
        }
    }

    #[must_use]
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    /// Route item clicks to `dispatch`, or stop routing them with `None`.
    pub fn set_dispatch(&self, dispatch: Option<ItemDispatch>) {
        *self.dispatch.borrow_mut() = dispatch;
    }

    fn item(&self, index: usize) -> Option<web_sys::Element> {
        let index = u32::try_from(index).ok()?;
        self.element.children().item(index)
    }

    fn unhook_items(&self) {
        let mut handlers = self.handlers.borrow_mut();
        // Closures parked by the previous replacement are no longer running.
        handlers.retired.clear();
        let live = std::mem::take(&mut handlers.live);
        for (item, closure) in live {
            let _ = item
                .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            handlers.retired.push(closure);
        }
    }

    fn hook_items(&self) {
        let children = self.element.children();
        let mut handlers = self.handlers.borrow_mut();
        for i in 0..children.length() {
            let Some(item) = children.item(i) else {
                continue;
            };
            let dispatch = Rc::clone(&self.dispatch);
            let index = i as usize;
            let closure = ItemClosure::new(move |_event: MouseEvent| {
                // Clone out before calling: the callback may replace the markup.
                let target = dispatch.borrow().clone();
                match target {
                    Some(target) => target(index),
                    None => Ok(()),
                }
            });
            match item.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            {
                Ok(()) => handlers.live.push((item, closure)),
                Err(err) => tracing::warn!(index, ?err, "cannot attach item click handler"),
            }
        }
    }
}

impl Element for WebDisplay {
    type Node = Node;

    fn contains_node(&self, node: &Node) -> bool {
        self.element.contains(Some(node))
    }
}

impl DisplaySurface for WebDisplay {
    fn replace_markup(&self, markup: &str) {
        self.unhook_items();
        self.element.set_inner_html(markup);
        self.hook_items();
    }

    fn item_count(&self) -> usize {
        self.element.children().length() as usize
    }

    fn item_value(&self, index: usize) -> Option<String> {
        self.item(index)?.get_attribute(VALUE_ATTRIBUTE)
    }

    fn set_item_selected(&self, index: usize, selected: bool) {
        if let Some(item) = self.item(index) {
            let _ = item
                .class_list()
                .toggle_with_force(SELECTED_CLASS, selected);
        }
    }

    fn set_visible(&self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        if let Err(err) = self.element.style().set_property("display", display) {
            tracing::warn!(?err, "cannot change display visibility");
        }
    }
}
