//! TaskDeck - stateful form controls and notifications for a task manager front end.
//!
//! This is the main umbrella crate: it re-exports the core systems from
//! `taskdeck-core` and adds the widgets and the toast stack on top of them.
//!
//! # Example
//!
//! ```
//! use taskdeck::prelude::*;
//!
//! let mut pagination = Pagination::new().with_total_records(95).with_rows(10);
//! pagination.page_changed.connect(|event| {
//!     println!("load page {} ({} rows from {})", event.page, event.rows, event.first);
//! });
//!
//! pagination.go_last();
//! assert_eq!(pagination.current_page(), 9);
//! ```
//!
//! # Features
//!
//! - `networking`: Re-exports `taskdeck-net` as [`net`] and lets the toast
//!   service report API errors directly.

pub use taskdeck_core::*;

pub mod notification;
pub mod prelude;
pub mod widget;

/// REST client, credential store and task service.
#[cfg(feature = "networking")]
pub mod net {
    pub use taskdeck_net::*;
}
