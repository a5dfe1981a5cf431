//! Static identity of the bridge, read once by the host at discovery time.

use serde::Deserialize;

/// Default display name of the bridge.
pub const DEFAULT_CLIENT_NAME: &str = "Rust Language Extension";

/// Static descriptor the host forwards to its protocol engine.
///
/// Constructed once when the component is built and never mutated. Fields
/// are private; the host reads via accessors.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientDescriptor {
    /// Display name shown by the host (e.g. in status UI).
    name: String,
    /// Configuration sections the host should forward to the analyzer.
    /// Ordered; may be empty.
    configuration_sections: Vec<String>,
    /// Opaque initialization-options payload passed through the handshake.
    initialization_options: Option<serde_json::Value>,
    /// Paths the host should watch on the analyzer's behalf.
    files_to_watch: Option<Vec<String>>,
    /// Whether the host should surface a notification when the handshake
    /// fails.
    show_notification_on_initialize_failed: bool,
}

impl Default for ClientDescriptor {
    fn default() -> Self {
        Self {
            name: DEFAULT_CLIENT_NAME.to_string(),
            configuration_sections: Vec::new(),
            initialization_options: None,
            files_to_watch: None,
            show_notification_on_initialize_failed: true,
        }
    }
}

impl ClientDescriptor {
    /// Construct a descriptor with an explicit notify-on-failure policy.
    ///
    /// The remaining fields start at their defaults; this is the single
    /// construction path besides deserialization.
    #[must_use]
    pub fn new(name: impl Into<String>, show_notification_on_initialize_failed: bool) -> Self {
        Self {
            name: name.into(),
            show_notification_on_initialize_failed,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configuration sections the host forwards to the analyzer. Empty by
    /// default.
    #[must_use]
    pub fn configuration_sections(&self) -> &[String] {
        &self.configuration_sections
    }

    /// Opaque initialization options, if any were configured.
    #[must_use]
    pub fn initialization_options(&self) -> Option<&serde_json::Value> {
        self.initialization_options.as_ref()
    }

    /// Paths the host should watch, if any were configured.
    #[must_use]
    pub fn files_to_watch(&self) -> Option<&[String]> {
        self.files_to_watch.as_deref()
    }

    /// Whether the host should surface a notification on handshake failure.
    #[must_use]
    pub fn show_notification_on_initialize_failed(&self) -> bool {
        self.show_notification_on_initialize_failed
    }
}
