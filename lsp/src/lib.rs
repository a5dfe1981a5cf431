//! Connection lifecycle manager for the external Rust analyzer.
//!
//! The host editor's protocol engine asks this crate to activate a
//! connection for the `rs` content type. Activation spawns the bundled
//! analyzer process and hands back the duplex stream pair; everything
//! spoken over those streams (requests, diagnostics, completions) is the
//! protocol engine's business, not this crate's.

pub mod config;
pub mod types;

pub(crate) mod connection;

mod client;

pub use client::LanguageClient;
pub use config::{ClientConfig, ConfigError};
pub use connection::Connection;
pub use types::{InitializationOutcome, LifecycleEvent};
