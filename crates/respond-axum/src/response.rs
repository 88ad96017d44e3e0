// Rust guideline compliant 2026-10-16

//! HTTP emission of response envelopes.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use respond_core::{Envelope, JsonOptions};

/// Content type of every envelope body.
pub const APPLICATION_JSON: &str = "application/json";

/// An envelope paired with the options used to encode it.
///
/// Returned from axum handlers; the HTTP status line always equals the
/// envelope code.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct JsonEnvelope {
    /// Envelope to send.
    pub envelope: Envelope,
    /// JSON encoding options.
    pub options: JsonOptions,
}

impl JsonEnvelope {
    /// Pairs `envelope` with explicit encoding options.
    pub fn new(envelope: Envelope, options: JsonOptions) -> Self {
        Self { envelope, options }
    }

    /// Returns the HTTP status for the envelope code.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.envelope.code().as_u16())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<Envelope> for JsonEnvelope {
    fn from(envelope: Envelope) -> Self {
        Self::new(envelope, JsonOptions::default())
    }
}

impl IntoResponse for JsonEnvelope {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.envelope.to_json(&self.options) {
            Ok(body) => (
                status,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(APPLICATION_JSON),
                )],
                body,
            )
                .into_response(),
            Err(err) => {
                tracing::error!(
                    code = status.as_u16(),
                    error = %err,
                    "failed to encode response envelope"
                );
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}
