//! Standard TaskDeck widgets.
//!
//! - [`Dropdown`]: Single-choice list bound to a value
//! - [`DatePicker`]: Calendar popup bound to a date
//! - [`Pagination`]: Page navigation over a record count
//! - [`ConfirmationDialog`]: Modal confirm/cancel gate
//! - [`PasswordInput`]: Masked text field with a reveal toggle

pub mod calendar;
mod confirmation_dialog;
mod date_picker;
mod dropdown;
mod pagination;
mod password_input;

pub use calendar::CalendarGrid;
pub use confirmation_dialog::{ConfirmationData, ConfirmationDialog, DialogKind};
pub use date_picker::{CalendarDay, DatePicker};
pub use dropdown::{Dropdown, DropdownOption};
pub use pagination::{PageChangeEvent, Pagination};
pub use password_input::PasswordInput;
