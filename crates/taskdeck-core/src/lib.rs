//! Core systems for TaskDeck.
//!
//! This crate provides the foundational pieces the TaskDeck widgets are built on:
//!
//! - **Signal/Slot System**: Type-safe notification from widgets to their host
//! - **Property System**: Values with change detection
//! - **Timers**: One-shot timers driven by the host's event loop
//! - **Logging**: `tracing` targets for every subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use taskdeck_core::Signal;
//!
//! let touched = Signal::<()>::new();
//! let id = touched.connect(|_| println!("field touched"));
//! touched.emit(());
//! touched.disconnect(id);
//! ```
//!
//! # Timer Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use taskdeck_core::TimerManager;
//!
//! let mut timers = TimerManager::new();
//! let start = Instant::now();
//! let id = timers.start_one_shot_at(start, Duration::from_millis(500));
//!
//! assert!(timers.process_expired_at(start + Duration::from_millis(499)).is_empty());
//! assert_eq!(timers.process_expired_at(start + Duration::from_millis(500)), vec![id]);
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;
mod timer;

pub use error::{CoreError, Result, TimerError};
pub use property::Property;
pub use signal::{ConnectionId, Signal};
pub use timer::{SharedTimerManager, TimerId, TimerManager};
