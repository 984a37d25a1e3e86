//! Form controls for TaskDeck.
//!
//! Every control here is a plain state machine: the host feeds it user input
//! (`toggle_open`, `select_option`, `handle_key`, ...) and listens to its
//! signals. Nothing in this module renders or talks to the network.
//!
//! # Binding a control
//!
//! Value-carrying controls implement [`BindableControl`], so a form layer can
//! bind any of them the same way:
//!
//! ```
//! use taskdeck::widget::{BindableControl, Dropdown, DropdownOption};
//!
//! fn bind<C: BindableControl>(control: &mut C, stored: Option<C::Value>) {
//!     control.write_value(stored);
//!     control.value_changed().connect(|_| { /* push to the form model */ });
//! }
//!
//! let mut priority = Dropdown::new(vec![
//!     DropdownOption::new("Baixa", "BAIXA"),
//!     DropdownOption::new("Alta", "ALTA"),
//! ]);
//! bind(&mut priority, Some("ALTA"));
//! assert_eq!(priority.display_value(), "Alta");
//! ```
//!
//! # Input
//!
//! Keyboard input arrives as [`KeyPressEvent`]s; pointer input that matters
//! to modal overlays arrives as a [`ClickTarget`].

pub mod bindable;
pub mod events;
pub mod widgets;

pub use bindable::{BindableControl, ControlBase};
pub use events::{ClickTarget, Key, KeyPressEvent, KeyboardModifiers};
pub use widgets::{
    CalendarDay, CalendarGrid, ConfirmationData, ConfirmationDialog, DatePicker, DialogKind,
    Dropdown, DropdownOption, PageChangeEvent, Pagination, PasswordInput,
};
