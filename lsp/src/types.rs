//! Public types consumed by the host.
//!
//! The host subscribes to [`LifecycleEvent`]s and receives an
//! [`InitializationOutcome`] when it reports a failed handshake.

/// A lifecycle transition the manager announces to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The component finished loading; the protocol engine should begin
    /// the handshake over the activated streams.
    Start,
    /// Declared for host compatibility but never emitted: no code path
    /// raises it. Shutdown is driven entirely by the host, which tears the
    /// connection down out-of-band.
    Stop,
}

/// Normalized result of a failed protocol handshake.
///
/// Produced by `on_initialize_failed`; always well-formed. Fields are
/// private, the host reads via accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializationOutcome {
    failure_message: String,
    show_notification: bool,
}

impl InitializationOutcome {
    pub(crate) fn new(failure_message: String, show_notification: bool) -> Self {
        Self {
            failure_message,
            show_notification,
        }
    }

    /// Human-readable description of the handshake failure.
    #[must_use]
    pub fn failure_message(&self) -> &str {
        &self.failure_message
    }

    /// Whether the host should surface a notification for this failure.
    /// Always the static descriptor's flag, never derived from the failure
    /// itself.
    #[must_use]
    pub fn show_notification(&self) -> bool {
        self.show_notification
    }
}
