//! Notification sink port definition.

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational message.
    Info,
    /// Error message.
    Error,
}

/// Port for fire-and-forget user notifications.
///
/// Delivery is best-effort with last-call-wins display semantics; there is
/// no acknowledgment and implementations must not fail.
pub trait Notifier {
    /// Deliver a notification.
    fn notify(&self, severity: Severity, message: &str);

    /// Deliver an informational notification.
    fn info(&self, message: &str) {
        self.notify(Severity::Info, message);
    }

    /// Deliver an error notification.
    fn error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }
}

/// Notifier that discards all messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _severity: Severity, _message: &str) {}
}
