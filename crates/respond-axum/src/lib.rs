// Rust guideline compliant 2026-10-16

//! axum integration for respond envelopes.
//!
//! This crate turns [`respond_core::Envelope`] values into HTTP responses:
//! - [`JsonEnvelope`] implements `IntoResponse`
//! - [`ApiResponses`] is a cloneable responder for handler state
//! - [`global`] offers process-wide helpers usable without any state

pub mod global;
pub mod handle;
pub mod response;

pub use global::{install, AlreadyInstalled};
pub use handle::ApiResponses;
pub use response::{JsonEnvelope, APPLICATION_JSON};
