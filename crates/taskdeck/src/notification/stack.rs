//! The toast display stack.
//!
//! A [`ToastStack`] renders the list published by a [`ToastService`] and owns
//! one auto-dismiss timer per timed toast. The host's event loop drives the
//! timers:
//!
//! ```
//! use std::sync::Arc;
//! use std::time::{Duration, Instant};
//! use taskdeck::notification::{NewToast, ToastService, ToastStack};
//! use taskdeck_core::SharedTimerManager;
//!
//! let service = Arc::new(ToastService::new());
//! let timers = Arc::new(SharedTimerManager::new());
//! let stack = ToastStack::attach(service.clone(), timers.clone());
//!
//! service.show(NewToast::success("Sucesso", "Tarefa salva").with_life(Duration::from_millis(10)));
//! assert_eq!(stack.messages().len(), 1);
//!
//! // One turn of the host loop, some time later.
//! for timer in timers.process_expired_at(Instant::now() + Duration::from_millis(10)) {
//!     stack.handle_timer(timer);
//! }
//! assert!(stack.messages().is_empty());
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use taskdeck_core::logging::targets;
use taskdeck_core::{ConnectionId, SharedTimerManager, Signal, TimerId};

use super::message::{ToastId, ToastMessage};
use super::service::ToastService;

/// Timer handles owned by the stack, indexed both ways.
#[derive(Debug, Default)]
struct TimerBook {
    by_message: HashMap<ToastId, TimerId>,
    by_timer: HashMap<TimerId, ToastId>,
    visible: Vec<ToastMessage>,
}

impl TimerBook {
    fn take_by_message(&mut self, id: &ToastId) -> Option<TimerId> {
        let timer = self.by_message.remove(id)?;
        self.by_timer.remove(&timer);
        Some(timer)
    }

    fn take_by_timer(&mut self, timer: TimerId) -> Option<ToastId> {
        let id = self.by_timer.remove(&timer)?;
        self.by_message.remove(&id);
        Some(id)
    }

    /// Bring the timers in line with a freshly published list.
    fn sync(&mut self, timers: &SharedTimerManager, messages: &[ToastMessage]) {
        for message in messages {
            if message.is_sticky() || self.by_message.contains_key(&message.id) {
                continue;
            }
            let timer = timers.start_one_shot(message.life);
            tracing::trace!(target: targets::TOAST, id = %message.id, ?timer, "toast timer started");
            self.by_message.insert(message.id.clone(), timer);
            self.by_timer.insert(timer, message.id.clone());
        }

        let gone: Vec<ToastId> = self
            .by_message
            .keys()
            .filter(|id| !messages.iter().any(|m| &m.id == *id))
            .cloned()
            .collect();
        for id in gone {
            if let Some(timer) = self.take_by_message(&id) {
                cancel_timer(timers, timer);
                tracing::trace!(target: targets::TOAST, %id, "timer released for removed toast");
            }
        }

        self.visible = messages.to_vec();
    }
}

/// Consumer side of the toast stack.
///
/// Dropping the stack disconnects it from its service and cancels every
/// outstanding timer.
///
/// # Signals
///
/// - `message_closed(ToastId)`: Emitted when a toast is dismissed by its timer
///   or by the user, before it is removed from the service
pub struct ToastStack {
    service: Arc<ToastService>,
    timers: Arc<SharedTimerManager>,
    book: Arc<Mutex<TimerBook>>,
    connection: ConnectionId,

    /// Signal emitted when a toast is dismissed.
    pub message_closed: Signal<ToastId>,
}

impl ToastStack {
    /// Subscribe to `service`, timing toasts on `timers`.
    ///
    /// Toasts already listed by the service are picked up immediately.
    pub fn attach(service: Arc<ToastService>, timers: Arc<SharedTimerManager>) -> Self {
        let book = Arc::new(Mutex::new(TimerBook::default()));

        let slot_book = book.clone();
        let slot_timers = timers.clone();
        let connection = service
            .messages_changed
            .connect(move |messages: &Vec<ToastMessage>| {
                slot_book.lock().sync(&slot_timers, messages);
            });

        book.lock().sync(&timers, &service.messages());

        Self {
            service,
            timers,
            book,
            connection,
            message_closed: Signal::new(),
        }
    }

    /// The toasts to render, in arrival order.
    pub fn messages(&self) -> Vec<ToastMessage> {
        self.book.lock().visible.clone()
    }

    /// Number of auto-dismiss timers currently held.
    pub fn pending_timers(&self) -> usize {
        self.book.lock().by_message.len()
    }

    /// Whether the toast with `id` has a running auto-dismiss timer.
    pub fn is_timed(&self, id: &ToastId) -> bool {
        self.book.lock().by_message.contains_key(id)
    }

    /// Route a fired timer to the toast that owns it.
    ///
    /// Returns `false` when the timer does not belong to this stack.
    pub fn handle_timer(&self, timer: TimerId) -> bool {
        let Some(id) = self.book.lock().take_by_timer(timer) else {
            return false;
        };
        tracing::debug!(target: targets::TOAST, %id, "toast expired");
        self.message_closed.emit(id.clone());
        self.service.close(&id);
        true
    }

    /// Dismiss a toast at the user's request.
    ///
    /// The toast's timer is cancelled before it is removed, so it can never
    /// fire for an already-closed toast. Returns `false` when the toast is not
    /// listed.
    pub fn close_message(&self, id: &ToastId) -> bool {
        let timer = self.book.lock().take_by_message(id);
        if let Some(timer) = timer {
            cancel_timer(&self.timers, timer);
        }

        let listed = self.service.messages().iter().any(|m| &m.id == id);
        if !listed {
            return false;
        }
        self.message_closed.emit(id.clone());
        self.service.close(id)
    }
}

impl Drop for ToastStack {
    fn drop(&mut self) {
        self.service.messages_changed.disconnect(self.connection);

        let mut book = self.book.lock();
        for (_, timer) in book.by_message.drain() {
            cancel_timer(&self.timers, timer);
        }
        book.by_timer.clear();
        tracing::trace!(target: targets::TOAST, "toast stack disposed");
    }
}

/// Stop `timer`, tolerating one that already fired or was stopped elsewhere.
fn cancel_timer(timers: &SharedTimerManager, timer: TimerId) {
    match timers.stop(timer) {
        Ok(()) => {}
        Err(error) => {
            tracing::trace!(target: targets::TOAST, ?timer, %error, "toast timer no longer pending");
        }
    }
}

static_assertions::assert_impl_all!(ToastStack: Send, Sync);
