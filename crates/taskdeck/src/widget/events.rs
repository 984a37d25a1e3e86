//! Input events delivered to TaskDeck widgets.
//!
//! The host translates its native input into these types and forwards them
//! to the widget that has focus. Widgets only react to the handful of keys
//! they document; everything else is reported as unhandled.

/// Keyboard modifier state at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };
}

/// Keys the widgets understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Navigation
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,

    // Editing
    Backspace,
    Enter,
    Tab,
    Space,

    // Control
    Escape,

    /// Any key without special meaning to the widgets.
    Other,
}

/// Key press event, sent when a key is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPressEvent {
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers, is_repeat: bool) -> Self {
        Self {
            key,
            modifiers,
            is_repeat,
        }
    }

    /// A plain, non-repeat press with no modifiers.
    pub fn pressed(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE, false)
    }

    /// An auto-repeat press with no modifiers.
    pub fn repeated(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE, true)
    }
}

/// Where a pointer click landed on an overlay widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    /// The dimmed area outside the content box.
    Backdrop,
    /// Inside the content box.
    Content,
}
