#![forbid(unsafe_code)]

//! Document-wide click channel with scoped subscriptions.
//!
//! Click-away dismissal needs to hear about clicks anywhere in the document.
//! Rather than every widget attaching its own global handler, the host owns
//! one [`ClickChannel`] per document and forwards each click into it; widgets
//! subscribe and get back a [`Subscription`] guard.
//!
//! # Lifecycle Guarantees
//!
//! 1. **Drop deregisters** - dropping a [`Subscription`] removes its listener
//!    before the next [`ClickChannel::emit`].
//!
//! 2. **Emission is re-entrant safe** - listeners are snapshotted before
//!    dispatch, so a listener may drop subscriptions (its own included) or
//!    subscribe new ones without corrupting the current pass.
//!
//! 3. **Channel outlives nothing** - a subscription holds only a weak
//!    reference; dropping it after the channel is gone is a no-op.
//!
//! # Usage
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use typeahead_core::document::ClickChannel;
//!
//! let clicks = ClickChannel::<u32>::new();
//! let seen = Rc::new(Cell::new(0));
//!
//! let sub = {
//!     let seen = Rc::clone(&seen);
//!     clicks.subscribe(move |_target| seen.set(seen.get() + 1))
//! };
//! clicks.emit(&7);
//! drop(sub);
//! clicks.emit(&7);
//!
//! assert_eq!(seen.get(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Listener<N> = Rc<dyn Fn(&N)>;

struct ChannelInner<N> {
    next_id: u64,
    listeners: Vec<(u64, Listener<N>)>,
}

/// Broadcast channel for document clicks, keyed by the host's node type.
pub struct ClickChannel<N> {
    inner: Rc<RefCell<ChannelInner<N>>>,
}

impl<N> Clone for ClickChannel<N> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<N> Default for ClickChannel<N> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ChannelInner {
                next_id: 1,
                listeners: Vec::new(),
            })),
        }
    }
}

impl<N> fmt::Debug for ClickChannel<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickChannel")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl<N: 'static> ClickChannel<N> {
    /// Create a channel with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Dropping the returned guard deregisters it.
    #[must_use = "dropping the subscription immediately deregisters the listener"]
    pub fn subscribe(&self, listener: impl Fn(&N) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::new(listener)));
            id
        };
        tracing::trace!(listener = id, "click listener registered");

        let weak: Weak<RefCell<ChannelInner<N>>> = Rc::downgrade(&self.inner);
        Subscription {
            id,
            detach: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
                    tracing::trace!(listener = id, "click listener removed");
                }
            })),
        }
    }

    /// Deliver a click on `target` to every current listener, in
    /// registration order.
    pub fn emit(&self, target: &N) {
        let snapshot: Vec<Listener<N>> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(target);
        }
    }
}

impl<N> ClickChannel<N> {
    /// Number of live listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// RAII guard for a [`ClickChannel`] listener.
#[must_use = "dropping the subscription immediately deregisters the listener"]
pub struct Subscription {
    id: u64,
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Channel-local listener id.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}
