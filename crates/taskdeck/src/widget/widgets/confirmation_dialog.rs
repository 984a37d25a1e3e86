//! Confirmation dialog for destructive actions.
//!
//! A modal yes/no gate holding one pending decision at a time. Escape and a
//! click on the backdrop cancel; Enter confirms.
//!
//! # Example
//!
//! ```
//! use taskdeck::widget::{ConfirmationData, ConfirmationDialog, DialogKind, Key, KeyPressEvent};
//!
//! let mut dialog = ConfirmationDialog::new();
//! dialog.confirmed.connect(|_| println!("deleting task"));
//!
//! dialog.open(
//!     ConfirmationData::new("Excluir tarefa", "Deseja excluir esta tarefa?")
//!         .with_confirm_text("Excluir")
//!         .with_kind(DialogKind::Danger),
//! );
//! dialog.handle_key(&KeyPressEvent::pressed(Key::Enter));
//! assert!(!dialog.is_visible());
//! ```

use taskdeck_core::Signal;
use taskdeck_core::logging::targets;

use crate::widget::{ClickTarget, Key, KeyPressEvent};

/// The tone of a confirmation, driving its icon and button styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DialogKind {
    #[default]
    Danger,
    Warning,
    Info,
}

impl DialogKind {
    /// Icon shown in the dialog header.
    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Danger => "trash",
            Self::Warning => "exclamation-triangle",
            Self::Info => "info-circle",
        }
    }
}

/// What the dialog asks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationData {
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
    pub kind: DialogKind,
}

impl ConfirmationData {
    /// Create a question with the default button texts.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = text.into();
        self
    }

    pub fn with_cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = text.into();
        self
    }

    pub fn with_kind(mut self, kind: DialogKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Default for ConfirmationData {
    fn default() -> Self {
        Self {
            title: "Confirmar".to_string(),
            message: "Tem certeza?".to_string(),
            confirm_text: "Confirmar".to_string(),
            cancel_text: "Cancelar".to_string(),
            kind: DialogKind::Danger,
        }
    }
}

/// A modal confirm/cancel gate.
///
/// # Signals
///
/// - `confirmed()`: Emitted when the user confirms, before the dialog hides
/// - `cancelled()`: Emitted when the user cancels, before the dialog hides
/// - `visible_changed(bool)`: Emitted when the dialog shows or hides
#[derive(Debug, Default)]
pub struct ConfirmationDialog {
    visible: bool,
    data: ConfirmationData,

    /// Signal emitted when the user confirms.
    pub confirmed: Signal<()>,
    /// Signal emitted when the user cancels.
    pub cancelled: Signal<()>,
    /// Signal emitted when the dialog shows or hides.
    pub visible_changed: Signal<bool>,
}

impl ConfirmationDialog {
    /// Create a hidden dialog with the default question.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The question currently (or last) shown.
    pub fn data(&self) -> &ConfirmationData {
        &self.data
    }

    /// Show the dialog with `data`.
    ///
    /// Returns `false` and keeps the pending question when already visible.
    pub fn open(&mut self, data: ConfirmationData) -> bool {
        if self.visible {
            tracing::trace!(target: targets::WIDGET, "confirmation already pending");
            return false;
        }
        self.data = data;
        self.visible = true;
        tracing::debug!(target: targets::WIDGET, title = %self.data.title, "confirmation opened");
        self.visible_changed.emit(true);
        true
    }

    /// Take the confirm path: emit `confirmed`, then hide.
    pub fn confirm(&mut self) {
        if !self.visible {
            return;
        }
        self.confirmed.emit(());
        self.close();
    }

    /// Take the cancel path: emit `cancelled`, then hide.
    pub fn cancel(&mut self) {
        if !self.visible {
            return;
        }
        self.cancelled.emit(());
        self.close();
    }

    fn close(&mut self) {
        self.visible = false;
        self.visible_changed.emit(false);
    }

    /// Handle a key press while the dialog is shown.
    ///
    /// Escape cancels, a non-repeat Enter confirms. Returns whether the key
    /// was consumed.
    pub fn handle_key(&mut self, event: &KeyPressEvent) -> bool {
        if !self.visible {
            return false;
        }
        match event.key {
            Key::Escape => {
                self.cancel();
                true
            }
            Key::Enter if !event.is_repeat => {
                self.confirm();
                true
            }
            _ => false,
        }
    }

    /// Handle a pointer click on the overlay.
    ///
    /// A click on the backdrop cancels; a click inside the content does
    /// nothing here.
    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        if !self.visible {
            return false;
        }
        match target {
            ClickTarget::Backdrop => {
                self.cancel();
                true
            }
            ClickTarget::Content => false,
        }
    }
}

static_assertions::assert_impl_all!(ConfirmationDialog: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Records signal emissions of the dialog as labelled strings, in order.
    fn journal(dialog: &ConfirmationDialog) -> Arc<Mutex<Vec<String>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let l = log.clone();
        dialog.confirmed.connect(move |_| l.lock().push("confirmed".to_string()));
        let l = log.clone();
        dialog.cancelled.connect(move |_| l.lock().push("cancelled".to_string()));
        let l = log.clone();
        dialog
            .visible_changed
            .connect(move |v| l.lock().push(format!("visible={v}")));
        log
    }

    #[test]
    fn test_defaults() {
        let dialog = ConfirmationDialog::new();
        let data = dialog.data();
        assert!(!dialog.is_visible());
        assert_eq!(data.title, "Confirmar");
        assert_eq!(data.message, "Tem certeza?");
        assert_eq!(data.confirm_text, "Confirmar");
        assert_eq!(data.cancel_text, "Cancelar");
        assert_eq!(data.kind, DialogKind::Danger);
        assert_eq!(data.kind.icon_name(), "trash");
    }

    #[test]
    fn test_confirm_emits_before_hiding() {
        let mut dialog = ConfirmationDialog::new();
        let log = journal(&dialog);

        dialog.open(ConfirmationData::default());
        dialog.confirm();

        assert_eq!(*log.lock(), vec!["visible=true", "confirmed", "visible=false"]);
        assert!(!dialog.is_visible());
    }

    #[test]
    fn test_escape_cancels() {
        let mut dialog = ConfirmationDialog::new();
        let log = journal(&dialog);

        dialog.open(ConfirmationData::new("Sair", "Deseja sair?"));
        assert!(dialog.handle_key(&KeyPressEvent::pressed(Key::Escape)));

        assert_eq!(*log.lock(), vec!["visible=true", "cancelled", "visible=false"]);
    }

    #[test]
    fn test_repeat_enter_is_ignored() {
        let mut dialog = ConfirmationDialog::new();
        dialog.open(ConfirmationData::default());

        assert!(!dialog.handle_key(&KeyPressEvent::repeated(Key::Enter)));
        assert!(dialog.is_visible());
        assert!(!dialog.handle_key(&KeyPressEvent::pressed(Key::Space)));
        assert!(dialog.handle_key(&KeyPressEvent::pressed(Key::Enter)));
        assert!(!dialog.is_visible());
    }

    #[test]
    fn test_backdrop_click_cancels_content_click_does_not() {
        let mut dialog = ConfirmationDialog::new();
        let log = journal(&dialog);
        dialog.open(ConfirmationData::default());

        assert!(!dialog.handle_click(ClickTarget::Content));
        assert!(dialog.is_visible());
        assert!(dialog.handle_click(ClickTarget::Backdrop));
        assert!(!dialog.is_visible());
        assert_eq!(log.lock().iter().filter(|e| *e == "cancelled").count(), 1);
    }

    #[test]
    fn test_hidden_dialog_ignores_input() {
        let mut dialog = ConfirmationDialog::new();
        let log = journal(&dialog);

        assert!(!dialog.handle_key(&KeyPressEvent::pressed(Key::Enter)));
        assert!(!dialog.handle_click(ClickTarget::Backdrop));
        dialog.confirm();
        dialog.cancel();
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_single_pending_decision() {
        let mut dialog = ConfirmationDialog::new();
        assert!(dialog.open(ConfirmationData::new("A", "first")));
        assert!(!dialog.open(ConfirmationData::new("B", "second")));
        assert_eq!(dialog.data().title, "A");

        dialog.cancel();
        assert!(dialog.open(ConfirmationData::new("B", "second").with_kind(DialogKind::Info)));
        assert_eq!(dialog.data().kind.icon_name(), "info-circle");
    }

    #[test]
    fn test_confirmed_slot_runs_before_hide() {
        let mut dialog = ConfirmationDialog::new();
        let confirmed_seen = Arc::new(Mutex::new(false));
        let visibility = Arc::new(Mutex::new(Vec::new()));

        let seen = confirmed_seen.clone();
        dialog.confirmed.connect(move |_| *seen.lock() = true);
        let seen = confirmed_seen.clone();
        let log = visibility.clone();
        // Each visibility change records whether `confirmed` had already fired.
        dialog
            .visible_changed
            .connect(move |&visible| log.lock().push((visible, *seen.lock())));

        dialog.open(ConfirmationData::new("Excluir", "Excluir tarefa 7?").with_cancel_text("Voltar"));
        dialog.confirm();

        assert_eq!(*visibility.lock(), vec![(true, false), (false, true)]);
        // The question is still readable after the dialog hides.
        assert_eq!(dialog.data().message, "Excluir tarefa 7?");
        assert_eq!(dialog.data().cancel_text, "Voltar");
    }
}
