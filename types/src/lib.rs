//! Core domain types for the analyzer bridge.
//!
//! These types define the static identity the host editor reads at
//! discovery time: which content type the bridge serves, which file
//! extensions map to it, and the descriptor the protocol engine forwards
//! to the external analyzer. No IO, no async.

pub mod content_type;
pub mod descriptor;

pub use content_type::{ContentTypeBinding, ContentTypeRegistry};
pub use descriptor::ClientDescriptor;
