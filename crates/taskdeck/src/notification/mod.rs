//! Toast notifications.
//!
//! Toasts flow one way: producers push requests into a [`ToastService`], the
//! service publishes its list, and a [`ToastStack`] renders that list and
//! dismisses each toast when its life runs out or the user closes it.

mod message;
mod service;
mod stack;

pub use message::{DEFAULT_LIFE, NewToast, Severity, ToastId, ToastMessage};
pub use service::ToastService;
pub use stack::ToastStack;
