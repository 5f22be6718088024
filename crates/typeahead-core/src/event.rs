#![forbid(unsafe_code)]

//! Widget event vocabulary.
//!
//! Hosts translate their native events into [`Event`] values and feed them to
//! the widget. The widget answers with [`Handled`], which tells the host
//! whether the native event's default action must be suppressed.
//!
//! Only four key codes are recognized (see [`NavKey`]). Every other code is
//! left to normal text-input behavior.

/// Key code for the down arrow.
pub const KEY_DOWN: u32 = 40;
/// Key code for the up arrow.
pub const KEY_UP: u32 = 38;
/// Key code for tab.
pub const KEY_TAB: u32 = 9;
/// Key code for enter.
pub const KEY_ENTER: u32 = 13;

/// A keyboard event reduced to its legacy key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: u32,
}

impl KeyEvent {
    #[must_use]
    pub const fn new(code: u32) -> Self {
        Self { code }
    }

    /// The navigation command this key maps to, if any.
    #[must_use]
    pub const fn nav(self) -> Option<NavKey> {
        NavKey::from_code(self.code)
    }
}

impl From<NavKey> for KeyEvent {
    fn from(key: NavKey) -> Self {
        Self::new(key.code())
    }
}

/// The recognized navigation commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Down,
    Up,
    Tab,
    Enter,
}

impl NavKey {
    /// Map a key code to a navigation command.
    #[must_use]
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            KEY_DOWN => Some(Self::Down),
            KEY_UP => Some(Self::Up),
            KEY_TAB => Some(Self::Tab),
            KEY_ENTER => Some(Self::Enter),
            _ => None,
        }
    }

    /// The key code for this command.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::Down => KEY_DOWN,
            Self::Up => KEY_UP,
            Self::Tab => KEY_TAB,
            Self::Enter => KEY_ENTER,
        }
    }
}

/// Events a host forwards to a bound widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The input's text content changed.
    Input,
    /// A key went down while the input had focus.
    KeyDown(KeyEvent),
    /// The input gained focus.
    Focus,
    /// The rendered item at this index was clicked.
    ItemClick(usize),
}

impl Event {
    /// Convenience constructor for a key-down event.
    #[must_use]
    pub const fn key(code: u32) -> Self {
        Self::KeyDown(KeyEvent::new(code))
    }
}

impl From<NavKey> for Event {
    fn from(key: NavKey) -> Self {
        Self::KeyDown(key.into())
    }
}

/// Outcome of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Handled {
    /// The widget acted on the event; the host must prevent the default.
    Consumed,
    /// The widget did not claim the event.
    #[default]
    Ignored,
}

impl Handled {
    /// Whether the host should suppress the native default action.
    #[must_use]
    pub const fn prevent_default(self) -> bool {
        matches!(self, Self::Consumed)
    }
}
