//! Port interfaces for UI side effects
//!
//! The gateway never talks to a UI directly. These capabilities are handed to
//! the pipeline at construction so the client runs (and is tested) without a
//! UI runtime.

/// Severity of a user-visible notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Transient user-visible notifications (toasts)
pub trait NotificationSink: Send + Sync {
    /// Fire-and-forget.
    fn notify(&self, severity: Severity, message: &str);
}

/// Route changes requested by the gateway
pub trait NavigationSink: Send + Sync {
    /// Fire-and-forget.
    fn navigate(&self, path: &str);
}

/// Global loading indicator
///
/// `begin`/`end` calls nest: the indicator is shown while at least one call
/// is outstanding.
pub trait LoadingSink: Send + Sync {
    fn begin(&self);
    fn end(&self);
}
