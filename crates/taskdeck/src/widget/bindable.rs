//! The value-bindable control contract.
//!
//! Every input widget in TaskDeck can be plugged into a host form through the
//! same four operations: the host writes a value in, the widget reports user
//! changes and user interaction back out, and the host can disable it.
//!
//! # Contract
//!
//! - [`write_value`](BindableControl::write_value) never emits
//!   `value_changed`.
//! - `value_changed` fires exactly once per user-driven change, and never for
//!   a value equal to the current one.
//! - `touched` fires before or together with any `value_changed` caused by
//!   the same interaction.
//! - A disabled control ignores every user-initiated interaction.
//!
//! # Example
//!
//! ```
//! use taskdeck::widget::{BindableControl, Dropdown, DropdownOption};
//!
//! let mut priority = Dropdown::new(vec![
//!     DropdownOption::new("Baixa", "BAIXA"),
//!     DropdownOption::new("Alta", "ALTA"),
//! ]);
//!
//! priority.value_changed().connect(|value| println!("picked {value}"));
//! priority.write_value(Some("ALTA"));
//! assert_eq!(priority.display_value(), "Alta");
//! ```

use taskdeck_core::Signal;

/// A widget whose value can be two-way bound by a host form.
pub trait BindableControl {
    /// The bound value type.
    type Value: Clone + PartialEq + Send + Sync + 'static;

    /// Replace the displayed value from the host side, without emitting.
    ///
    /// `None` clears the control.
    fn write_value(&mut self, value: Option<Self::Value>);

    /// The current value, if any.
    fn value(&self) -> Option<Self::Value>;

    /// Signal fired once per user-driven value change.
    fn value_changed(&self) -> &Signal<Self::Value>;

    /// Signal fired when the user interacts with the control.
    fn touched(&self) -> &Signal<()>;

    /// Enable or disable user interaction.
    fn set_disabled(&mut self, disabled: bool);

    /// Whether user interaction is currently ignored.
    fn is_disabled(&self) -> bool;
}

/// Shared state behind every [`BindableControl`] implementation.
///
/// Holds the disabled flag, the touched flag and the two outgoing signals.
#[derive(Debug)]
pub struct ControlBase<V> {
    disabled: bool,
    was_touched: bool,
    /// Fired once per user-driven value change.
    pub value_changed: Signal<V>,
    /// Fired on user interaction.
    pub touched: Signal<()>,
}

impl<V: 'static> ControlBase<V> {
    pub fn new() -> Self {
        Self {
            disabled: false,
            was_touched: false,
            value_changed: Signal::new(),
            touched: Signal::new(),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Whether the user has interacted with the control at least once.
    pub fn is_touched(&self) -> bool {
        self.was_touched
    }

    /// Record an interaction and emit `touched`.
    pub fn mark_touched(&mut self) {
        self.was_touched = true;
        self.touched.emit(());
    }

    /// Emit `touched` only if the control was never touched before.
    pub fn mark_touched_once(&mut self) {
        if !self.was_touched {
            self.mark_touched();
        }
    }

    /// Forget previous interaction, as after a form reset.
    pub fn reset_touched(&mut self) {
        self.was_touched = false;
    }
}

impl<V: 'static> Default for ControlBase<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_touched_once_emits_single_time() {
        let mut base = ControlBase::<u8>::new();
        let count = Arc::new(Mutex::new(0));

        let count_clone = count.clone();
        base.touched.connect(move |_| *count_clone.lock() += 1);

        base.mark_touched_once();
        base.mark_touched_once();
        assert_eq!(*count.lock(), 1);

        // Explicit interaction always reports.
        base.mark_touched();
        assert_eq!(*count.lock(), 2);
        assert!(base.is_touched());

        base.reset_touched();
        assert!(!base.is_touched());
    }

    #[test]
    fn test_disabled_flag() {
        let mut base = ControlBase::<u8>::default();
        assert!(!base.is_disabled());
        base.set_disabled(true);
        assert!(base.is_disabled());
    }
}
