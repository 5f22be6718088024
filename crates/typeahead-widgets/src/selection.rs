#![forbid(unsafe_code)]

//! Keyboard highlight state machine.
//!
//! Tracks which rendered item, if any, is highlighted and moves the highlight
//! in response to navigation keys.
//!
//! # States
//!
//! | State | Down / Tab | Up | Enter |
//! |-------|------------|----|-------|
//! | `Idle` | `Highlighted(0)` | `Highlighted(0)` | no-op |
//! | `Highlighted(i)` | `Highlighted(min(i+1, last))` | `Highlighted(max(i-1, 0))` | commit `i`, then `Idle` |
//!
//! With an empty list every key is a no-op. There is no wraparound, and once
//! something is highlighted, up never returns to `Idle`.
//!
//! # Invariants
//!
//! - `Highlighted(i)` always satisfies `i < len`.
//! - [`reset`](SelectionController::reset) (a new filter pass) always lands
//!   in `Idle`.

use typeahead_core::event::NavKey;

/// Current highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing highlighted.
    #[default]
    Idle,
    /// The item at this index is highlighted.
    Highlighted(usize),
}

impl Selection {
    /// Highlighted index, if any.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Highlighted(i) => Some(i),
        }
    }
}

/// What the caller must do after a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    Unchanged,
    /// Re-apply markers so that only `to` is highlighted.
    Moved { to: usize },
    /// Commit the item at this index. The controller is already `Idle`.
    Commit(usize),
}

/// Highlight tracker for the current rendered list.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: Selection,
    len: usize,
}

impl SelectionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> Selection {
        self.state
    }

    /// Length of the rendered list the controller navigates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Start over for a freshly rendered list of `len` items.
    pub fn reset(&mut self, len: usize) {
        self.state = Selection::Idle;
        self.len = len;
    }

    /// Apply a navigation key.
    pub fn navigate(&mut self, key: NavKey) -> Transition {
        match key {
            NavKey::Down | NavKey::Tab => self.step_down(),
            NavKey::Up => self.step_up(),
            NavKey::Enter => self.commit(),
        }
    }

    /// Jump straight to `index`, as a pointer click does.
    ///
    /// Out-of-range indices leave the state untouched.
    pub fn highlight(&mut self, index: usize) -> Transition {
        if index >= self.len {
            return Transition::Unchanged;
        }
        self.state = Selection::Highlighted(index);
        Transition::Moved { to: index }
    }

    fn step_down(&mut self) -> Transition {
        let Some(last) = self.len.checked_sub(1) else {
            return Transition::Unchanged;
        };
        let to = match self.state {
            Selection::Idle => 0,
            Selection::Highlighted(i) => (i + 1).min(last),
        };
        self.state = Selection::Highlighted(to);
        Transition::Moved { to }
    }

    fn step_up(&mut self) -> Transition {
        if self.len == 0 {
            return Transition::Unchanged;
        }
        let to = match self.state {
            Selection::Idle => 0,
            Selection::Highlighted(i) => i.saturating_sub(1),
        };
        self.state = Selection::Highlighted(to);
        Transition::Moved { to }
    }

    fn commit(&mut self) -> Transition {
        match self.state {
            Selection::Idle => Transition::Unchanged,
            Selection::Highlighted(i) => {
                self.reset(0);
                Transition::Commit(i)
            }
        }
    }
}
