// Rust guideline compliant 2026-10-16

//! Process-wide response helpers.
//!
//! The helpers use the configuration passed to [`install`]. When nothing was
//! installed they still work, falling back to each code's friendly name and
//! default JSON options.

use crate::response::JsonEnvelope;
use respond_core::{JsonOptions, Responder, ResponseConfig, ResponseRequest};
use serde_json::Value;
use std::error::Error as StdError;
use std::sync::OnceLock;
use thiserror::Error;

static GLOBAL: OnceLock<Responder<Option<ResponseConfig>>> = OnceLock::new();

/// The process-wide responder was already settled.
#[derive(Debug, Error)]
#[error("response configuration already installed")]
pub struct AlreadyInstalled;

/// Installs `config` for the process-wide helpers.
///
/// # Errors
///
/// Returns [`AlreadyInstalled`] if a configuration was installed before, or
/// if a helper already ran and settled on the unconfigured fallback.
pub fn install(config: ResponseConfig) -> Result<(), AlreadyInstalled> {
    let json = config.json;
    let include_stack_trace = config.include_stack_trace;
    let responder =
        Responder::with_catalog(Some(config), json).include_stack_trace(include_stack_trace);
    GLOBAL.set(responder).map_err(|_| AlreadyInstalled)
}

fn global() -> &'static Responder<Option<ResponseConfig>> {
    GLOBAL.get_or_init(|| {
        tracing::debug!("no response configuration installed, using built-in messages");
        Responder::with_catalog(None, JsonOptions::default())
    })
}

fn wrap(envelope: respond_core::Envelope) -> JsonEnvelope {
    JsonEnvelope::new(envelope, *global().json_options())
}

/// Builds a response for an arbitrary request.
pub fn respond(request: ResponseRequest) -> JsonEnvelope {
    wrap(global().build(request))
}

/// 200 OK with `data`.
pub fn ok(data: impl Into<Value>) -> JsonEnvelope {
    wrap(global().ok(data))
}

/// 401 Unauthenticated with `data`.
pub fn unauthenticated(data: impl Into<Value>) -> JsonEnvelope {
    wrap(global().unauthenticated(data))
}

/// 403 Forbidden with `data`.
pub fn forbidden(data: impl Into<Value>) -> JsonEnvelope {
    wrap(global().forbidden(data))
}

/// 404 Not Found with `data`.
pub fn not_found(data: impl Into<Value>) -> JsonEnvelope {
    wrap(global().not_found(data))
}

/// 422 Unprocessable Entity with validation errors in `data`.
pub fn validation_errors(data: impl Into<Value>) -> JsonEnvelope {
    wrap(global().validation_errors(data))
}

/// 500 Internal Server Error with `data`.
pub fn failed(data: impl Into<Value>) -> JsonEnvelope {
    wrap(global().failed(data))
}

/// 503 Service Unavailable with `data`.
pub fn maintenance(data: impl Into<Value>) -> JsonEnvelope {
    wrap(global().maintenance(data))
}

/// 500 Internal Server Error describing `error`.
pub fn failed_with_error(error: &(dyn StdError + 'static)) -> JsonEnvelope {
    wrap(global().failed_with_error(error))
}
