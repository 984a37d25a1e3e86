//! Prelude module for TaskDeck.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use taskdeck::prelude::*;
//! ```

// ============================================================================
// Signal/Slot, Property and Timers
// ============================================================================

pub use crate::property::Property;
pub use crate::signal::{ConnectionId, Signal};
pub use crate::{SharedTimerManager, TimerId, TimerManager};

// ============================================================================
// Control Contract and Input
// ============================================================================

pub use crate::widget::{BindableControl, ClickTarget, Key, KeyPressEvent, KeyboardModifiers};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::{
    CalendarDay, CalendarGrid, ConfirmationData, ConfirmationDialog, DatePicker, DialogKind,
    Dropdown, DropdownOption, PageChangeEvent, Pagination, PasswordInput,
};

// ============================================================================
// Notifications
// ============================================================================

pub use crate::notification::{NewToast, Severity, ToastId, ToastMessage, ToastService, ToastStack};
