//! Integration tests wiring timers, properties and signals together the way
//! widgets do.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use taskdeck_core::{Property, SharedTimerManager, Signal, TimerId};

/// A minimal auto-hiding banner: shown for a fixed time, then hidden.
struct Banner {
    timers: Arc<SharedTimerManager>,
    visible: Property<bool>,
    visible_changed: Signal<bool>,
    hide_timer: Mutex<Option<TimerId>>,
}

impl Banner {
    fn new(timers: Arc<SharedTimerManager>) -> Self {
        Self {
            timers,
            visible: Property::new(false),
            visible_changed: Signal::new(),
            hide_timer: Mutex::new(None),
        }
    }

    fn show_at(&self, now: Instant, life: Duration) {
        if let Some(old) = self.hide_timer.lock().take() {
            let _ = self.timers.stop(old);
        }
        *self.hide_timer.lock() = Some(self.timers.start_one_shot_at(now, life));
        if self.visible.set(true) {
            self.visible_changed.emit(true);
        }
    }

    fn handle_timer(&self, id: TimerId) -> bool {
        let mut slot = self.hide_timer.lock();
        if *slot != Some(id) {
            return false;
        }
        *slot = None;
        drop(slot);
        if self.visible.set(false) {
            self.visible_changed.emit(false);
        }
        true
    }
}

#[test]
fn test_banner_hides_after_life() {
    let timers = Arc::new(SharedTimerManager::new());
    let banner = Banner::new(timers.clone());
    let history = Arc::new(Mutex::new(Vec::new()));

    let history_clone = history.clone();
    banner.visible_changed.connect(move |&v| history_clone.lock().push(v));

    let start = Instant::now();
    banner.show_at(start, Duration::from_millis(300));
    assert!(banner.visible.get());

    for id in timers.process_expired_at(start + Duration::from_millis(299)) {
        banner.handle_timer(id);
    }
    assert!(banner.visible.get());

    let fired = timers.process_expired_at(start + Duration::from_millis(300));
    assert_eq!(fired.len(), 1);
    assert!(banner.handle_timer(fired[0]));
    assert!(!banner.visible.get());

    assert_eq!(*history.lock(), vec![true, false]);
}

#[test]
fn test_reshow_restarts_timer() {
    let timers = Arc::new(SharedTimerManager::new());
    let banner = Banner::new(timers.clone());

    let start = Instant::now();
    banner.show_at(start, Duration::from_millis(100));
    banner.show_at(start + Duration::from_millis(50), Duration::from_millis(100));
    assert_eq!(timers.active_count(), 1);

    // The first deadline passes without hiding the banner.
    let fired = timers.process_expired_at(start + Duration::from_millis(120));
    assert!(fired.is_empty());
    assert!(banner.visible.get());

    let fired = timers.process_expired_at(start + Duration::from_millis(150));
    assert_eq!(fired.len(), 1);
    assert!(banner.handle_timer(fired[0]));
    assert!(!banner.visible.get());
}

#[test]
fn test_stale_timer_is_ignored() {
    let timers = Arc::new(SharedTimerManager::new());
    let banner = Banner::new(timers.clone());
    let other = timers.start_one_shot(Duration::from_secs(60));

    assert!(!banner.handle_timer(other));
}
