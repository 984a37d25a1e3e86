//! Dropdown widget for single-value selection.
//!
//! The Dropdown shows the label of the option matching its bound value, or a
//! placeholder when nothing matches, and opens a list of options to pick from.
//!
//! # Example
//!
//! ```
//! use taskdeck::widget::{BindableControl, Dropdown, DropdownOption};
//!
//! let mut situation = Dropdown::new(vec![
//!     DropdownOption::new("Aberta", "ABERTA"),
//!     DropdownOption::new("Concluída", "CONCLUIDA"),
//! ])
//! .with_label("Situação")
//! .with_required(true);
//!
//! situation.value_changed().connect(|value| {
//!     println!("situation is now {value}");
//! });
//!
//! situation.toggle_open();
//! situation.select_option(1);
//! assert_eq!(situation.display_value(), "Concluída");
//! ```

use taskdeck_core::Signal;
use taskdeck_core::logging::targets;

use crate::widget::{BindableControl, ControlBase, Key, KeyPressEvent};

/// Placeholder shown when no option matches the bound value.
pub const DEFAULT_PLACEHOLDER: &str = "Selecione uma opção";

/// An entry in a [`Dropdown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption<V> {
    /// The text shown for this option.
    pub label: String,
    /// The value bound when this option is picked.
    pub value: V,
}

impl<V> DropdownOption<V> {
    /// Create a new option.
    pub fn new(label: impl Into<String>, value: V) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A single-select list bound to a value.
///
/// Options keep the order the host supplied. Values need not be unique; when
/// resolving a value to an option the first match wins.
///
/// # Signals
///
/// - `value_changed(V)`: Emitted when the user picks an option with a new value
/// - `touched()`: Emitted when the list is opened, and on the first pick
/// - `open_changed(bool)`: Emitted when the list opens or closes
pub struct Dropdown<V> {
    control: ControlBase<V>,
    options: Vec<DropdownOption<V>>,
    is_open: bool,
    selected_index: Option<usize>,
    value: Option<V>,
    placeholder: String,
    label: Option<String>,
    required: bool,

    /// Signal emitted when the option list opens or closes.
    pub open_changed: Signal<bool>,
}

impl<V> Dropdown<V>
where
    V: Clone + PartialEq + Send + Sync + 'static,
{
    /// Create a closed dropdown with no value.
    pub fn new(options: Vec<DropdownOption<V>>) -> Self {
        Self {
            control: ControlBase::new(),
            options,
            is_open: false,
            selected_index: None,
            value: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            label: None,
            required: false,
            open_changed: Signal::new(),
        }
    }

    /// Set the placeholder text using builder pattern.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the field label using builder pattern.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mark the field as required using builder pattern.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    // =========================================================================
    // Options
    // =========================================================================

    pub fn options(&self) -> &[DropdownOption<V>] {
        &self.options
    }

    /// Replace the option list and re-resolve the selection against the
    /// current value.
    pub fn set_options(&mut self, options: Vec<DropdownOption<V>>) {
        self.options = options;
        self.selected_index = self.value.as_ref().and_then(|v| self.resolve_index(v));
    }

    /// Find the first option whose value equals `value`.
    ///
    /// Returns `None` when nothing matches, including when there are no options.
    pub fn resolve_selected(&self, value: &V) -> Option<&DropdownOption<V>> {
        self.options.iter().find(|option| option.value == *value)
    }

    fn resolve_index(&self, value: &V) -> Option<usize> {
        self.options.iter().position(|option| option.value == *value)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Index of the option currently marked selected.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_option(&self) -> Option<&DropdownOption<V>> {
        self.selected_index.and_then(|i| self.options.get(i))
    }

    /// Whether the option at `index` is the one marked selected.
    pub fn is_option_selected(&self, index: usize) -> bool {
        self.selected_index == Some(index)
    }

    /// Pick the option at `index` as if the user clicked it.
    ///
    /// Returns `false` and changes nothing when the dropdown is disabled or
    /// `index` is out of range.
    pub fn select_option(&mut self, index: usize) -> bool {
        if self.control.is_disabled() {
            tracing::trace!(target: targets::WIDGET, index, "dropdown disabled, ignoring select");
            return false;
        }
        let Some(option) = self.options.get(index) else {
            tracing::trace!(target: targets::WIDGET, index, "dropdown option out of range");
            return false;
        };
        let new_value = option.value.clone();

        self.control.mark_touched_once();
        self.selected_index = Some(index);
        let changed = self.value.as_ref() != Some(&new_value);
        self.value = Some(new_value.clone());
        self.close();

        if changed {
            tracing::debug!(target: targets::WIDGET, index, "dropdown value changed");
            self.control.value_changed.emit(new_value);
        }
        true
    }

    /// The text to show in the closed control.
    pub fn display_value(&self) -> &str {
        self.selected_option()
            .map(|option| option.label.as_str())
            .unwrap_or(self.placeholder.as_str())
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    // =========================================================================
    // Open / Close
    // =========================================================================

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Open or close the option list.
    ///
    /// Does nothing when disabled. Opening counts as a user interaction.
    pub fn toggle_open(&mut self) {
        if self.control.is_disabled() {
            return;
        }
        self.is_open = !self.is_open;
        if self.is_open {
            self.control.mark_touched();
        }
        self.open_changed.emit(self.is_open);
    }

    /// Close the option list if it is open.
    pub fn close(&mut self) {
        if self.is_open {
            self.is_open = false;
            self.open_changed.emit(false);
        }
    }

    /// Handle a key press while the dropdown has focus.
    ///
    /// Escape closes an open list, Enter and Space toggle it. Returns whether
    /// the key was consumed.
    pub fn handle_key(&mut self, event: &KeyPressEvent) -> bool {
        if self.control.is_disabled() {
            return false;
        }
        match event.key {
            Key::Escape if self.is_open => {
                self.close();
                true
            }
            Key::Enter | Key::Space => {
                self.toggle_open();
                true
            }
            _ => false,
        }
    }

    /// Whether the user has interacted with the dropdown.
    pub fn is_touched(&self) -> bool {
        self.control.is_touched()
    }
}

impl<V> BindableControl for Dropdown<V>
where
    V: Clone + PartialEq + Send + Sync + 'static,
{
    type Value = V;

    fn write_value(&mut self, value: Option<V>) {
        self.selected_index = value.as_ref().and_then(|v| self.resolve_index(v));
        self.value = value;
    }

    fn value(&self) -> Option<V> {
        self.value.clone()
    }

    fn value_changed(&self) -> &Signal<V> {
        &self.control.value_changed
    }

    fn touched(&self) -> &Signal<()> {
        &self.control.touched
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.control.set_disabled(disabled);
        if disabled {
            self.close();
        }
    }

    fn is_disabled(&self) -> bool {
        self.control.is_disabled()
    }
}

static_assertions::assert_impl_all!(Dropdown<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn priorities() -> Dropdown<&'static str> {
        Dropdown::new(vec![
            DropdownOption::new("Baixa", "BAIXA"),
            DropdownOption::new("Média", "MEDIA"),
            DropdownOption::new("Alta", "ALTA"),
        ])
    }

    fn record<T: Clone + Send + 'static>(signal: &Signal<T>) -> Arc<Mutex<Vec<T>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let log_clone = log.clone();
        signal.connect(move |v: &T| log_clone.lock().push(v.clone()));
        log
    }

    #[test]
    fn test_write_value_resolves_label() {
        let mut dropdown = priorities();
        let changes = record(dropdown.value_changed());

        dropdown.write_value(Some("MEDIA"));
        assert_eq!(dropdown.display_value(), "Média");
        assert_eq!(dropdown.selected_index(), Some(1));

        dropdown.write_value(Some("X"));
        assert_eq!(dropdown.display_value(), DEFAULT_PLACEHOLDER);
        assert_eq!(dropdown.selected_index(), None);

        // Host writes never emit.
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn test_resolve_selected_none() {
        let dropdown = priorities();
        assert!(dropdown.resolve_selected(&"NOPE").is_none());

        let empty: Dropdown<&str> = Dropdown::new(Vec::new());
        assert!(empty.resolve_selected(&"BAIXA").is_none());
        assert_eq!(empty.display_value(), DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn test_first_match_wins() {
        let dropdown = Dropdown::new(vec![
            DropdownOption::new("first", 1),
            DropdownOption::new("second", 1),
        ]);
        assert_eq!(dropdown.resolve_selected(&1).map(|o| o.label.as_str()), Some("first"));
    }

    #[test]
    fn test_toggle_open_fires_touched_on_open() {
        let mut dropdown = priorities();
        let touched = record(dropdown.touched());

        dropdown.toggle_open();
        assert!(dropdown.is_open());
        dropdown.toggle_open();
        assert!(!dropdown.is_open());
        dropdown.toggle_open();

        assert_eq!(touched.lock().len(), 2);
        assert!(dropdown.is_touched());
    }

    #[test]
    fn test_select_option_emits_and_closes() {
        let mut dropdown = priorities();
        let changes = record(dropdown.value_changed());
        let touched = record(dropdown.touched());

        dropdown.toggle_open();
        assert!(dropdown.select_option(2));

        assert!(!dropdown.is_open());
        assert_eq!(dropdown.value(), Some("ALTA"));
        assert_eq!(*changes.lock(), vec!["ALTA"]);
        // Opening already touched the control; the pick does not repeat it.
        assert_eq!(touched.lock().len(), 1);
        assert!(dropdown.is_option_selected(2));
        assert!(!dropdown.is_option_selected(0));
    }

    #[test]
    fn test_select_without_open_touches_first() {
        let mut dropdown = priorities();
        let order = Arc::new(Mutex::new(Vec::new()));

        let order_clone = order.clone();
        dropdown.touched().connect(move |_| order_clone.lock().push("touched"));
        let order_clone = order.clone();
        dropdown.value_changed().connect(move |_| order_clone.lock().push("changed"));

        dropdown.select_option(0);
        assert_eq!(*order.lock(), vec!["touched", "changed"]);
    }

    #[test]
    fn test_select_same_value_does_not_emit() {
        let mut dropdown = priorities();
        dropdown.write_value(Some("BAIXA"));
        let changes = record(dropdown.value_changed());

        assert!(dropdown.select_option(0));
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn test_select_out_of_range() {
        let mut dropdown = priorities();
        let touched = record(dropdown.touched());

        assert!(!dropdown.select_option(3));
        assert_eq!(dropdown.value(), None);
        assert!(touched.lock().is_empty());
    }

    #[test]
    fn test_disabled_ignores_interaction() {
        let mut dropdown = priorities();
        let changes = record(dropdown.value_changed());
        let touched = record(dropdown.touched());
        dropdown.set_disabled(true);

        dropdown.toggle_open();
        assert!(!dropdown.is_open());
        assert!(!dropdown.select_option(1));
        assert!(!dropdown.handle_key(&KeyPressEvent::pressed(Key::Enter)));

        assert!(changes.lock().is_empty());
        assert!(touched.lock().is_empty());

        // Host writes still apply.
        dropdown.write_value(Some("ALTA"));
        assert_eq!(dropdown.display_value(), "Alta");
    }

    #[test]
    fn test_set_options_reresolves() {
        let mut dropdown = priorities();
        dropdown.write_value(Some("MEDIA"));

        dropdown.set_options(vec![DropdownOption::new("Média (nova)", "MEDIA")]);
        assert_eq!(dropdown.selected_index(), Some(0));
        assert_eq!(dropdown.display_value(), "Média (nova)");

        dropdown.set_options(Vec::new());
        assert_eq!(dropdown.selected_index(), None);
        assert_eq!(dropdown.value(), Some("MEDIA"));
    }

    #[test]
    fn test_key_handling() {
        let mut dropdown = priorities().with_placeholder("Prioridade");
        assert_eq!(dropdown.display_value(), "Prioridade");

        assert!(!dropdown.handle_key(&KeyPressEvent::pressed(Key::Escape)));
        assert!(dropdown.handle_key(&KeyPressEvent::pressed(Key::Space)));
        assert!(dropdown.is_open());
        assert!(dropdown.handle_key(&KeyPressEvent::pressed(Key::Escape)));
        assert!(!dropdown.is_open());
        assert!(!dropdown.handle_key(&KeyPressEvent::pressed(Key::Tab)));
    }
}
