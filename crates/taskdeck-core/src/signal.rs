//! Signal/slot system for TaskDeck.
//!
//! Widgets report everything that happens to them through signals: a value
//! was picked, the user touched a control, a page change was requested, a
//! toast was dismissed. The host connects slots (callbacks) and reacts.
//!
//! # Re-entrancy
//!
//! All widget state transitions run on the UI thread, so slots are invoked
//! directly in the emitting thread. `emit()` snapshots the connected slots
//! before calling them: a slot may emit, connect or disconnect on the same
//! signal without deadlocking. A slot disconnected during an emission still
//! receives that emission.
//!
//! # Example
//!
//! ```
//! use taskdeck_core::Signal;
//!
//! let page_requested = Signal::<usize>::new();
//! let id = page_requested.connect(|page| println!("fetch page {page}"));
//!
//! page_requested.emit(3);
//! assert!(page_requested.disconnect(id));
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Handle to one connected slot, valid until passed to
    /// [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A notification carrying `Args` to every connected slot, in connection
/// order.
///
/// Use `()` for signals without a payload.
pub struct Signal<Args> {
    slots: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Register `slot`, returning the handle that removes it again.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.slots.lock().insert(Arc::new(slot))
    }

    /// Remove a slot. Returns `false` when `id` was already gone.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().remove(id).is_some()
    }

    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }

    /// Call every connected slot with `args`.
    #[tracing::instrument(skip_all, target = "taskdeck_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        // Lock released before any slot runs.
        let snapshot: Vec<Slot<Args>> = self.slots.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, slots = snapshot.len(), "emit");

        for slot in snapshot {
            slot(&args);
        }
    }
}

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("slots", &self.slots.lock().len())
            .finish()
    }
}

static_assertions::assert_impl_all!(Signal<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn collect<T: Clone + Send + 'static>(signal: &Signal<T>) -> (ConnectionId, Arc<Mutex<Vec<T>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let id = signal.connect(move |value: &T| sink.lock().push(value.clone()));
        (id, seen)
    }

    #[test]
    fn test_slots_run_in_connection_order() {
        let closed = Signal::<String>::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for name in ["stack", "host", "audit"] {
            let order = order.clone();
            closed.connect(move |id: &String| order.lock().push(format!("{name}:{id}")));
        }

        closed.emit("toast-1-0".to_string());
        assert_eq!(
            *order.lock(),
            vec!["stack:toast-1-0", "host:toast-1-0", "audit:toast-1-0"]
        );
    }

    #[test]
    fn test_disconnect_stops_delivery() {
        let pages = Signal::<usize>::new();
        let (id, seen) = collect(&pages);

        pages.emit(1);
        assert!(pages.disconnect(id));
        assert!(!pages.disconnect(id));
        pages.emit(2);

        assert_eq!(*seen.lock(), vec![1]);
        assert_eq!(pages.connection_count(), 0);
    }

    #[test]
    fn test_tuple_payload() {
        let month_shown = Signal::<(i32, u32)>::new();
        let (_, seen) = collect(&month_shown);
        month_shown.emit((2025, 12));
        month_shown.emit((2026, 1));
        assert_eq!(*seen.lock(), vec![(2025, 12), (2026, 1)]);
    }

    #[test]
    fn test_reentrant_emit_from_slot() {
        let signal = Arc::new(Signal::<u32>::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let signal_clone = signal.clone();
        let calls_clone = calls.clone();
        signal.connect(move |&depth| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            if depth < 2 {
                signal_clone.emit(depth + 1);
            }
        });

        signal.emit(0);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_connect_during_emit_waits_for_next_emit() {
        let signal = Arc::new(Signal::<()>::new());
        let late_calls = Arc::new(AtomicUsize::new(0));

        let signal_clone = signal.clone();
        let late_clone = late_calls.clone();
        signal.connect(move |_| {
            let late = late_clone.clone();
            signal_clone.connect(move |_| {
                late.fetch_add(1, Ordering::SeqCst);
            });
        });

        signal.emit(());
        assert_eq!(late_calls.load(Ordering::SeqCst), 0);
        signal.emit(());
        assert_eq!(late_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disconnect_from_slot() {
        let signal = Arc::new(Signal::<()>::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let own_id = Arc::new(Mutex::new(None));

        let signal_clone = signal.clone();
        let calls_clone = calls.clone();
        let own_id_clone = own_id.clone();
        let id = signal.connect(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            if let Some(id) = *own_id_clone.lock() {
                signal_clone.disconnect(id);
            }
        });
        *own_id.lock() = Some(id);

        signal.emit(());
        signal.emit(());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(signal.connection_count(), 0);
    }
}
