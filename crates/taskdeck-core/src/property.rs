//! Change-detecting values.
//!
//! State shared behind `&self`, such as the logged-in flag of a session, lives
//! in a [`Property`]. Writing through [`Property::set`] tells the owner
//! whether anything moved, so it only emits its change signal on a real
//! transition.
//!
//! # Example
//!
//! ```
//! use taskdeck_core::{Property, Signal};
//!
//! struct Session {
//!     logged_in: Property<bool>,
//!     logged_in_changed: Signal<bool>,
//! }
//!
//! impl Session {
//!     fn mark(&self, logged_in: bool) {
//!         if self.logged_in.set(logged_in) {
//!             self.logged_in_changed.emit(logged_in);
//!         }
//!     }
//! }
//!
//! let session = Session { logged_in: Property::new(false), logged_in_changed: Signal::new() };
//! session.mark(true);
//! assert!(session.logged_in.get());
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A value behind a `RwLock` whose writes report change.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// A clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Store `value`. Returns `false` and leaves the property untouched when
    /// it equals the current value.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current == value {
            return false;
        }
        *current = value;
        true
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Property").field(&self.get()).finish()
    }
}

static_assertions::assert_impl_all!(Property<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_set_reports_transitions_only() {
        let flag = Property::new(false);
        assert!(!flag.set(false));
        assert!(flag.set(true));
        assert!(!flag.set(true));
        assert!(flag.get());
    }

    #[test]
    fn test_default_and_debug() {
        let token: Property<Option<String>> = Property::default();
        assert_eq!(token.get(), None);
        assert_eq!(format!("{token:?}"), "Property(None)");
    }

    #[test]
    fn test_concurrent_writers_settle() {
        let counter = Arc::new(Property::new(0u32));
        let handles: Vec<_> = (1..=4)
            .map(|n| {
                let counter = counter.clone();
                std::thread::spawn(move || {
                    counter.set(n);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert!((1..=4).contains(&counter.get()));
    }
}
