//! The toast notification channel.
//!
//! A [`ToastService`] owns the ordered list of visible toasts. Producers call
//! [`show`](ToastService::show) and friends; consumers such as
//! [`ToastStack`](super::ToastStack) subscribe to `messages_changed`, which
//! carries a snapshot of the whole list after every change.
//!
//! Services are plain values, normally shared through an `Arc` and injected
//! where needed. [`ToastService::global`] offers a single process-wide
//! instance for hosts that want one.

use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use taskdeck_core::Signal;
use taskdeck_core::logging::targets;

use super::message::{DEFAULT_LIFE, NewToast, Severity, ToastId, ToastMessage};

static GLOBAL_SERVICE: OnceLock<Arc<ToastService>> = OnceLock::new();

#[derive(Debug, Default)]
struct ServiceState {
    messages: Vec<ToastMessage>,
    next_counter: u64,
}

/// Producer side of the toast stack.
///
/// # Signals
///
/// - `messages_changed(Vec<ToastMessage>)`: Emitted with the full list after
///   every change
#[derive(Debug, Default)]
pub struct ToastService {
    state: Mutex<ServiceState>,

    /// Signal emitted with the current list after every change.
    pub messages_changed: Signal<Vec<ToastMessage>>,
}

impl ToastService {
    /// Create an empty service.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide service, created on first use.
    pub fn global() -> Arc<Self> {
        GLOBAL_SERVICE.get_or_init(|| Arc::new(Self::new())).clone()
    }

    /// Append a toast and publish the list.
    ///
    /// Returns the id assigned to the new toast.
    pub fn show(&self, toast: NewToast) -> ToastId {
        let (id, snapshot) = {
            let mut state = self.state.lock();
            state.next_counter += 1;
            let id = ToastId::new(state.next_counter, chrono::Utc::now().timestamp_millis());
            state.messages.push(ToastMessage {
                id: id.clone(),
                severity: toast.severity,
                summary: toast.summary,
                detail: toast.detail,
                life: toast.life.unwrap_or(DEFAULT_LIFE),
            });
            (id, state.messages.clone())
        };

        tracing::debug!(target: targets::TOAST, %id, severity = %toast.severity, "toast shown");
        self.messages_changed.emit(snapshot);
        id
    }

    pub fn success(&self, summary: impl Into<String>, detail: impl Into<String>) -> ToastId {
        self.show(NewToast::new(Severity::Success, summary, detail))
    }

    pub fn error(&self, summary: impl Into<String>, detail: impl Into<String>) -> ToastId {
        self.show(NewToast::new(Severity::Error, summary, detail))
    }

    pub fn warning(&self, summary: impl Into<String>, detail: impl Into<String>) -> ToastId {
        self.show(NewToast::new(Severity::Warning, summary, detail))
    }

    pub fn info(&self, summary: impl Into<String>, detail: impl Into<String>) -> ToastId {
        self.show(NewToast::new(Severity::Info, summary, detail))
    }

    /// Remove the toast with `id` and publish the list.
    ///
    /// Returns `false` without publishing when no such toast is listed.
    pub fn close(&self, id: &ToastId) -> bool {
        let snapshot = {
            let mut state = self.state.lock();
            let before = state.messages.len();
            state.messages.retain(|message| message.id != *id);
            if state.messages.len() == before {
                None
            } else {
                Some(state.messages.clone())
            }
        };

        match snapshot {
            Some(messages) => {
                tracing::debug!(target: targets::TOAST, %id, "toast closed");
                self.messages_changed.emit(messages);
                true
            }
            None => {
                tracing::trace!(target: targets::TOAST, %id, "close for absent toast ignored");
                false
            }
        }
    }

    /// Remove every toast and publish the empty list.
    pub fn clear(&self) {
        self.state.lock().messages.clear();
        tracing::debug!(target: targets::TOAST, "toasts cleared");
        self.messages_changed.emit(Vec::new());
    }

    /// A snapshot of the current list, in arrival order.
    pub fn messages(&self) -> Vec<ToastMessage> {
        self.state.lock().messages.clone()
    }

    pub fn len(&self) -> usize {
        self.state.lock().messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().messages.is_empty()
    }
}

#[cfg(feature = "networking")]
impl ToastService {
    /// Show an error toast describing a failed backend call.
    pub fn api_error(&self, error: &taskdeck_net::ApiError) -> ToastId {
        tracing::warn!(target: targets::TOAST, %error, "backend call failed");
        self.error(error.summary(), error.user_message())
    }
}

static_assertions::assert_impl_all!(ToastService: Send, Sync);
