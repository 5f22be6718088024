#![forbid(unsafe_code)]

//! Carrying caller exceptions out of a widget call.
//!
//! A JavaScript predicate, formatter or plugin hook may throw while the
//! widget is mutably borrowed. Throwing straight through would skip the
//! borrow's release and leave the widget unusable. Instead the wrapper parks
//! the error in an [`ErrorSlot`] and returns a neutral value; [`run`] releases
//! the borrow first and then hands the parked error back to the caller.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// First error raised by a caller callback during one widget call.
pub struct ErrorSlot<E> {
    pending: Rc<RefCell<Option<E>>>,
}

impl<E> Clone for ErrorSlot<E> {
    fn clone(&self) -> Self {
        Self {
            pending: Rc::clone(&self.pending),
        }
    }
}

impl<E> Default for ErrorSlot<E> {
    fn default() -> Self {
        Self {
            pending: Rc::new(RefCell::new(None)),
        }
    }
}

impl<E> fmt::Debug for ErrorSlot<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorSlot")
            .field("pending", &self.pending.borrow().is_some())
            .finish()
    }
}

impl<E> ErrorSlot<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `error` unless an earlier one is already waiting.
    pub fn park(&self, error: E) {
        let mut pending = self.pending.borrow_mut();
        if pending.is_none() {
            *pending = Some(error);
        }
    }

    /// Take the waiting error, if any.
    pub fn take(&self) -> Option<E> {
        self.pending.borrow_mut().take()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

/// Run `call` on the widget in `cell`, then surface any parked error.
///
/// A widget that is already borrowed (a callback re-entering it) yields
/// `busy()` without touching the slot.
pub fn run<W, R, E>(
    cell: &RefCell<W>,
    errors: &ErrorSlot<E>,
    busy: impl FnOnce() -> E,
    call: impl FnOnce(&mut W) -> R,
) -> Result<R, E> {
    let result = {
        let Ok(mut widget) = cell.try_borrow_mut() else {
            tracing::warn!("widget re-entered from one of its own callbacks");
            return Err(busy());
        };
        call(&mut widget)
    };
    match errors.take() {
        Some(error) => Err(error),
        None => Ok(result),
    }
}
