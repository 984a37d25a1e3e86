//! Logging facilities for TaskDeck.
//!
//! TaskDeck uses the `tracing` crate for instrumentation. Every subsystem logs
//! under a fixed target so hosts can filter them. To see logs, install a
//! tracing subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("taskdeck::toast=debug,taskdeck_net=info")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "taskdeck_core";
    /// Timer system target.
    pub const TIMER: &str = "taskdeck_core::timer";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "taskdeck_core::signal";
    /// Widget state transitions.
    pub const WIDGET: &str = "taskdeck::widget";
    /// Toast service and toast stack.
    pub const TOAST: &str = "taskdeck::toast";
    /// HTTP traffic to the task backend.
    pub const HTTP: &str = "taskdeck_net::http";
    /// Login, logout and credential storage.
    pub const AUTH: &str = "taskdeck_net::auth";
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::io;
    use std::sync::Arc;

    #[test]
    fn test_core_targets_share_crate_prefix() {
        for target in [targets::TIMER, targets::SIGNAL] {
            assert!(target.starts_with(targets::CORE));
        }
    }

    /// In-memory sink for formatted log lines.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_targets_filter_by_subsystem() {
        let captured = Captured::default();
        let writer = captured.clone();
        let filter = tracing_subscriber::EnvFilter::new(format!("{}=debug", targets::TOAST));
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(target: targets::TOAST, "toast shown");
            tracing::debug!(target: targets::TIMER, "timer started");
        });

        let output = String::from_utf8(captured.0.lock().clone()).unwrap();
        assert!(output.contains("toast shown"), "{output}");
        assert!(output.contains(targets::TOAST), "{output}");
        assert!(!output.contains("timer started"), "{output}");
        assert_eq!(output.lines().count(), 1, "{output}");
    }
}
