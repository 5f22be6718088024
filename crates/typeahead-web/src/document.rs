#![forbid(unsafe_code)]

//! One shared `click` listener per page.
//!
//! Every widget on the page subscribes to the same [`ClickChannel`]. The
//! underlying DOM listener is installed when the first widget asks for it and
//! removed once the last handle is dropped. It listens in the capture phase,
//! so it sees a clicked item while that item is still in the page.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use typeahead_core::document::ClickChannel;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, MouseEvent, Node};

thread_local! {
    static SHARED: RefCell<Weak<DocumentClicks>> = RefCell::new(Weak::new());
}

/// The page-wide click listener.
pub struct DocumentClicks {
    document: Document,
    channel: ClickChannel<Node>,
    listener: Closure<dyn FnMut(MouseEvent)>,
}

impl std::fmt::Debug for DocumentClicks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentClicks")
            .field("channel", &self.channel)
            .finish()
    }
}

impl DocumentClicks {
    /// The listener for `document`, installing it on first use.
    pub fn shared(document: &Document) -> Result<Rc<Self>, JsValue> {
        if let Some(existing) = SHARED.with(|slot| slot.borrow().upgrade()) {
            return Ok(existing);
        }
        let clicks = Rc::new(Self::install(document)?);
        SHARED.with(|slot| *slot.borrow_mut() = Rc::downgrade(&clicks));
        Ok(clicks)
    }

    fn install(document: &Document) -> Result<Self, JsValue> {
        let channel = ClickChannel::new();
        let emitter = channel.clone();
        let listener = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            if let Some(node) = target {
                emitter.emit(&node);
            }
        });
        // Capture phase: an item's own click handler replaces the markup, so
        // the target must be inspected before it runs.
        document.add_event_listener_with_callback_and_bool(
            "click",
            listener.as_ref().unchecked_ref(),
            true,
        )?;
        tracing::debug!("document click listener installed");
        Ok(Self {
            document: document.clone(),
            channel,
            listener,
        })
    }

    #[must_use]
    pub fn channel(&self) -> &ClickChannel<Node> {
        &self.channel
    }
}

impl Drop for DocumentClicks {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback_and_bool(
            "click",
            self.listener.as_ref().unchecked_ref(),
            true,
        );
        tracing::debug!("document click listener removed");
    }
}
