//! LanguageClient — the connection lifecycle manager the host drives.
//!
//! The host calls exactly four operations, in this order for a given
//! attempt: `activate`, then `on_loaded`, then one of
//! `on_server_initialized` / `on_initialize_failed`. The manager holds no
//! state machine of its own; it observes the host's transitions and owns
//! nothing mutable beyond the subscriber list.

use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use oxidation_types::ClientDescriptor;

use crate::config::ClientConfig;
use crate::connection::Connection;
use crate::types::{InitializationOutcome, LifecycleEvent};

/// Capacity of each subscriber's lifecycle-event channel. One token is
/// written per transition, so a small buffer suffices.
const LIFECYCLE_CHANNEL_CAPACITY: usize = 8;

/// Rendered failure message when the host reports no underlying error.
const UNKNOWN_FAILURE: &str = "null";

/// Subdirectory of the installation that carries the bundled analyzer.
const RESOURCE_DIR: &str = "res";

/// Connection lifecycle manager for the `rs` content type.
///
/// Constructed once at extension discovery with the installation root
/// (the directory containing the extension's own binary) and the loaded
/// configuration. Immutable afterwards except for event subscriptions.
pub struct LanguageClient {
    install_dir: PathBuf,
    analyzer_bin: String,
    descriptor: ClientDescriptor,
    subscribers: Vec<mpsc::Sender<LifecycleEvent>>,
}

impl LanguageClient {
    /// Content type this client's activation is bound to.
    pub const CONTENT_TYPE: &'static str = oxidation_types::content_type::RUST_CONTENT_TYPE;

    #[must_use]
    pub fn new(install_dir: impl Into<PathBuf>, config: ClientConfig) -> Self {
        let (analyzer_bin, descriptor) = config.into_parts();
        Self {
            install_dir: install_dir.into(),
            analyzer_bin,
            descriptor,
            subscribers: Vec::new(),
        }
    }

    /// Display name from the static descriptor.
    #[must_use]
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// The static descriptor the host forwards to its protocol engine.
    #[must_use]
    pub fn descriptor(&self) -> &ClientDescriptor {
        &self.descriptor
    }

    /// Full path of the bundled analyzer:
    /// `<install-dir>/res/<analyzer-bin><exe-suffix>`.
    ///
    /// The sibling `res/` directory is part of the deployment contract.
    #[must_use]
    pub fn analyzer_path(&self) -> PathBuf {
        self.install_dir
            .join(RESOURCE_DIR)
            .join(format!("{}{EXE_SUFFIX}", self.analyzer_bin))
    }

    /// Subscribe to lifecycle events.
    ///
    /// Each call hands out an independent channel; every subscriber sees
    /// every event. The host's protocol engine subscribes once and treats
    /// [`LifecycleEvent::Start`] as its cue to begin the handshake.
    pub fn subscribe(&mut self) -> mpsc::Receiver<LifecycleEvent> {
        let (tx, rx) = mpsc::channel(LIFECYCLE_CHANNEL_CAPACITY);
        self.subscribers.push(tx);
        rx
    }

    /// Activate a connection: spawn the analyzer and hand back the duplex
    /// stream pair.
    ///
    /// Yields to the scheduler once before doing any work, then honors an
    /// already-cancelled token by failing the activation without spawning.
    /// Every spawn failure collapses to `None` — the host interprets an
    /// absent result as activation failure and skips the handshake.
    pub async fn activate(&self, cancel: &CancellationToken) -> Option<Connection> {
        tokio::task::yield_now().await;

        if cancel.is_cancelled() {
            tracing::debug!(client = self.name(), "activation cancelled before spawn");
            return None;
        }

        let path = self.analyzer_path();
        tracing::info!(client = self.name(), analyzer = %path.display(), "starting analyzer");
        match Connection::spawn(&path) {
            Ok(connection) => Some(connection),
            Err(e) => {
                tracing::warn!(client = self.name(), "failed to start analyzer: {e:#}");
                None
            }
        }
    }

    /// The host finished loading the component.
    ///
    /// Announces [`LifecycleEvent::Start`] to every subscriber, exactly
    /// once per call. No subscribers means no work; a subscriber that went
    /// away is skipped.
    pub async fn on_loaded(&self) {
        for subscriber in &self.subscribers {
            if subscriber.send(LifecycleEvent::Start).await.is_err() {
                tracing::debug!(client = self.name(), "lifecycle subscriber went away");
            }
        }
    }

    /// The host completed the protocol handshake. Pure extension point.
    pub async fn on_server_initialized(&self) {
        tracing::trace!(client = self.name(), "server initialized");
    }

    /// The host's handshake failed; normalize it into a displayable
    /// outcome.
    ///
    /// An absent error renders as the literal `"null"`. The notify flag is
    /// always the static descriptor's, regardless of the failure.
    pub async fn on_initialize_failed(
        &self,
        error: Option<&anyhow::Error>,
    ) -> InitializationOutcome {
        let message = match error {
            Some(e) => format!("{e:#}"),
            None => UNKNOWN_FAILURE.to_string(),
        };
        tracing::debug!(client = self.name(), failure = %message, "server initialize failed");
        InitializationOutcome::new(
            message,
            self.descriptor.show_notification_on_initialize_failed(),
        )
    }

    /// Installation root this client was constructed with.
    #[must_use]
    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }
}
