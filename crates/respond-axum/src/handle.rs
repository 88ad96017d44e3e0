// Rust guideline compliant 2026-10-16

//! Cloneable responder handle for axum handlers.

use crate::response::JsonEnvelope;
use respond_core::{MessageCatalog, Responder, ResponseConfig, ResponseRequest};
use serde_json::Value;
use std::error::Error as StdError;
use std::sync::Arc;

/// Shared responder for use as axum state.
///
/// Cloning is cheap; every clone builds envelopes against the same
/// immutable configuration.
///
/// ```no_run
/// use axum::{extract::State, routing::get, Router};
/// use respond_axum::{ApiResponses, JsonEnvelope};
/// use respond_core::ResponseConfig;
/// use serde_json::json;
///
/// async fn show(State(responses): State<ApiResponses>) -> JsonEnvelope {
///     responses.ok(json!({"id": 1}))
/// }
///
/// let app: Router = Router::new()
///     .route("/", get(show))
///     .with_state(ApiResponses::new(ResponseConfig::default()));
/// ```
#[derive(Debug)]
pub struct ApiResponses<C = ResponseConfig> {
    inner: Arc<Responder<C>>,
}

impl<C> Clone for ApiResponses<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl ApiResponses<ResponseConfig> {
    /// Creates a handle from loaded configuration.
    #[must_use]
    pub fn new(config: ResponseConfig) -> Self {
        Self::from_responder(Responder::new(config))
    }
}

impl<C: MessageCatalog> ApiResponses<C> {
    /// Wraps an existing responder.
    #[must_use]
    pub fn from_responder(responder: Responder<C>) -> Self {
        Self {
            inner: Arc::new(responder),
        }
    }

    /// Returns the underlying responder.
    #[must_use]
    pub fn responder(&self) -> &Responder<C> {
        &self.inner
    }

    /// Builds and wraps an envelope for an arbitrary request.
    pub fn respond(&self, request: ResponseRequest) -> JsonEnvelope {
        self.wrap(self.inner.build(request))
    }

    /// 200 OK with `data`.
    pub fn ok(&self, data: impl Into<Value>) -> JsonEnvelope {
        self.wrap(self.inner.ok(data))
    }

    /// 401 Unauthenticated with `data`.
    pub fn unauthenticated(&self, data: impl Into<Value>) -> JsonEnvelope {
        self.wrap(self.inner.unauthenticated(data))
    }

    /// 403 Forbidden with `data`.
    pub fn forbidden(&self, data: impl Into<Value>) -> JsonEnvelope {
        self.wrap(self.inner.forbidden(data))
    }

    /// 404 Not Found with `data`.
    pub fn not_found(&self, data: impl Into<Value>) -> JsonEnvelope {
        self.wrap(self.inner.not_found(data))
    }

    /// 422 Unprocessable Entity with validation errors in `data`.
    pub fn validation_errors(&self, data: impl Into<Value>) -> JsonEnvelope {
        self.wrap(self.inner.validation_errors(data))
    }

    /// 500 Internal Server Error with `data`.
    pub fn failed(&self, data: impl Into<Value>) -> JsonEnvelope {
        self.wrap(self.inner.failed(data))
    }

    /// 503 Service Unavailable with `data`.
    pub fn maintenance(&self, data: impl Into<Value>) -> JsonEnvelope {
        self.wrap(self.inner.maintenance(data))
    }

    /// 500 Internal Server Error describing `error`.
    pub fn failed_with_error(&self, error: &(dyn StdError + 'static)) -> JsonEnvelope {
        self.wrap(self.inner.failed_with_error(error))
    }

    fn wrap(&self, envelope: respond_core::Envelope) -> JsonEnvelope {
        JsonEnvelope::new(envelope, *self.inner.json_options())
    }
}

impl<C: MessageCatalog> From<Responder<C>> for ApiResponses<C> {
    fn from(responder: Responder<C>) -> Self {
        Self::from_responder(responder)
    }
}
