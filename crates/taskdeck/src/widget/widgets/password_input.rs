//! Password input with a show/hide toggle.
//!
//! # Example
//!
//! ```
//! use taskdeck::widget::{BindableControl, PasswordInput};
//!
//! let mut password = PasswordInput::new();
//! password.input("s3cr3t");
//! assert_eq!(password.displayed_text(), "••••••");
//!
//! password.toggle_visibility();
//! assert_eq!(password.displayed_text(), "s3cr3t");
//! assert_eq!(password.value().as_deref(), Some("s3cr3t"));
//! ```

use taskdeck_core::Signal;

use crate::widget::{BindableControl, ControlBase};

/// Placeholder shown while the field is empty.
pub const DEFAULT_PLACEHOLDER: &str = "Digite sua senha";

const MASK_CHAR: char = '•';

/// A text field bound to a password, masked unless revealed.
///
/// # Signals
///
/// - `value_changed(String)`: Emitted when typed input changes the text
/// - `touched()`: Emitted on the first edit, on visibility toggle and on blur
pub struct PasswordInput {
    control: ControlBase<String>,
    text: String,
    show_password: bool,
    placeholder: String,
    required: bool,
}

impl PasswordInput {
    pub fn new() -> Self {
        Self {
            control: ControlBase::new(),
            text: String::new(),
            show_password: false,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            required: false,
        }
    }

    /// Set the placeholder text using builder pattern.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Mark the field as required using builder pattern.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Apply the field's full text after user input.
    ///
    /// Marks the field touched on the first edit, then emits `value_changed`
    /// when the text differs. Ignored when disabled.
    pub fn input(&mut self, text: impl Into<String>) {
        if self.control.is_disabled() {
            return;
        }
        self.control.mark_touched_once();
        let text = text.into();
        if text != self.text {
            self.text = text.clone();
            self.control.value_changed.emit(text);
        }
    }

    /// Reveal or mask the password. Counts as a user interaction.
    pub fn toggle_visibility(&mut self) {
        if self.control.is_disabled() {
            return;
        }
        self.show_password = !self.show_password;
        self.control.mark_touched();
    }

    /// The field lost focus. Ignored when disabled.
    pub fn blur(&mut self) {
        if self.control.is_disabled() {
            return;
        }
        self.control.mark_touched();
    }

    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }

    /// The text as rendered: masked unless revealed.
    pub fn displayed_text(&self) -> String {
        if self.show_password {
            self.text.clone()
        } else {
            std::iter::repeat_n(MASK_CHAR, self.text.chars().count()).collect()
        }
    }

    /// Icon for the visibility toggle.
    pub fn toggle_icon(&self) -> &'static str {
        if self.show_password { "eye-slash" } else { "eye" }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_touched(&self) -> bool {
        self.control.is_touched()
    }
}

impl Default for PasswordInput {
    fn default() -> Self {
        Self::new()
    }
}

impl BindableControl for PasswordInput {
    type Value = String;

    fn write_value(&mut self, value: Option<String>) {
        self.text = value.unwrap_or_default();
    }

    fn value(&self) -> Option<String> {
        Some(self.text.clone())
    }

    fn value_changed(&self) -> &Signal<String> {
        &self.control.value_changed
    }

    fn touched(&self) -> &Signal<()> {
        &self.control.touched
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.control.set_disabled(disabled);
    }

    fn is_disabled(&self) -> bool {
        self.control.is_disabled()
    }
}

static_assertions::assert_impl_all!(PasswordInput: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_input_emits_only_on_change() {
        let mut password = PasswordInput::new();
        let changes = Arc::new(Mutex::new(Vec::new()));
        let changes_clone = changes.clone();
        password.value_changed().connect(move |v| changes_clone.lock().push(v.clone()));

        password.input("abc");
        password.input("abc");
        password.input("abcd");
        assert_eq!(*changes.lock(), vec!["abc".to_string(), "abcd".to_string()]);
    }

    #[test]
    fn test_write_value_is_silent() {
        let mut password = PasswordInput::new();
        let changes = Arc::new(Mutex::new(0));
        let changes_clone = changes.clone();
        password.value_changed().connect(move |_| *changes_clone.lock() += 1);

        password.write_value(Some("stored".to_string()));
        assert_eq!(password.value().as_deref(), Some("stored"));
        password.write_value(None);
        assert_eq!(password.value().as_deref(), Some(""));
        assert_eq!(*changes.lock(), 0);
    }

    #[test]
    fn test_visibility_toggle() {
        let mut password = PasswordInput::new();
        let touched = Arc::new(Mutex::new(0));
        let touched_clone = touched.clone();
        password.touched().connect(move |_| *touched_clone.lock() += 1);

        password.write_value(Some("ação".to_string()));
        assert_eq!(password.displayed_text(), "••••");
        assert_eq!(password.toggle_icon(), "eye");

        password.toggle_visibility();
        assert!(password.is_password_visible());
        assert_eq!(password.displayed_text(), "ação");
        assert_eq!(password.toggle_icon(), "eye-slash");

        password.blur();
        assert_eq!(*touched.lock(), 2);
    }

    #[test]
    fn test_disabled_ignores_input() {
        let mut password = PasswordInput::new().with_placeholder("Senha");
        let touched = Arc::new(Mutex::new(0));
        let touched_clone = touched.clone();
        password.touched().connect(move |_| *touched_clone.lock() += 1);
        password.set_disabled(true);

        password.input("typed");
        password.toggle_visibility();
        password.blur();
        assert_eq!(password.value().as_deref(), Some(""));
        assert!(!password.is_password_visible());
        assert!(!password.is_touched());
        assert_eq!(*touched.lock(), 0);
        assert_eq!(password.placeholder(), "Senha");
    }

    #[test]
    fn test_first_input_touches_before_change() {
        let mut password = PasswordInput::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        let e = events.clone();
        password.touched().connect(move |_| e.lock().push("touched"));
        let e = events.clone();
        password.value_changed().connect(move |_| e.lock().push("changed"));

        password.input("abc");
        assert_eq!(*events.lock(), vec!["touched", "changed"]);

        // Later edits only report the change.
        password.input("abcd");
        assert_eq!(*events.lock(), vec!["touched", "changed", "changed"]);
    }
}
