//! Toast message types.

use std::fmt;
use std::time::Duration;

/// Life given to a toast when the request does not set one.
pub const DEFAULT_LIFE: Duration = Duration::from_millis(5000);

/// How a toast is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Icon shown next to the summary.
    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "times-circle",
            Self::Warning => "exclamation-triangle",
            Self::Info => "info-circle",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier assigned to a toast by its service.
///
/// Formatted `toast-<counter>-<unix millis>`; the counter never repeats within
/// a service, so ids stay unique even within one millisecond.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(String);

impl ToastId {
    pub(crate) fn new(counter: u64, unix_millis: i64) -> Self {
        Self(format!("toast-{counter}-{unix_millis}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ToastId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A request to show a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewToast {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    /// `None` means [`DEFAULT_LIFE`]; zero means the toast stays until closed.
    pub life: Option<Duration>,
}

impl NewToast {
    pub fn new(severity: Severity, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity,
            summary: summary.into(),
            detail: detail.into(),
            life: None,
        }
    }

    pub fn success(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(Severity::Success, summary, detail)
    }

    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(Severity::Error, summary, detail)
    }

    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(Severity::Warning, summary, detail)
    }

    pub fn info(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(Severity::Info, summary, detail)
    }

    /// Set how long the toast stays up using builder pattern.
    pub fn with_life(mut self, life: Duration) -> Self {
        self.life = Some(life);
        self
    }

    /// Keep the toast until it is closed explicitly.
    pub fn sticky(self) -> Self {
        self.with_life(Duration::ZERO)
    }
}

/// A toast in a service's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub id: ToastId,
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    pub life: Duration,
}

impl ToastMessage {
    /// Whether the toast is never dismissed by a timer.
    pub fn is_sticky(&self) -> bool {
        self.life.is_zero()
    }
}
