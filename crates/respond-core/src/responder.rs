// Rust guideline compliant 2026-10-16

//! Shared envelope factory with the named convenience constructors.

use crate::catalog::{MessageCatalog, NoCatalog};
use crate::config::ResponseConfig;
use crate::envelope::{Envelope, ResponseRequest};
use crate::json::JsonOptions;
use crate::Result;
use serde_json::{json, Value};
use std::error::Error as StdError;

/// Builds envelopes against a fixed catalog and encoding options.
///
/// A responder is immutable once constructed. Build one at startup and
/// share it (for example behind an `Arc`) with every request handler.
#[derive(Debug, Clone)]
pub struct Responder<C = ResponseConfig> {
    catalog: C,
    json: JsonOptions,
    include_stack_trace: bool,
}

impl Responder<ResponseConfig> {
    /// Creates a responder from loaded configuration.
    #[must_use]
    pub fn new(config: ResponseConfig) -> Self {
        Self {
            json: config.json,
            include_stack_trace: config.include_stack_trace,
            catalog: config,
        }
    }
}

impl Default for Responder<ResponseConfig> {
    fn default() -> Self {
        Self::new(ResponseConfig::default())
    }
}

impl Responder<NoCatalog> {
    /// Creates a responder with no configuration at all.
    ///
    /// Messages fall back to each code's friendly name and JSON is written
    /// with default options.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self::with_catalog(NoCatalog, JsonOptions::default())
    }
}

impl<C: MessageCatalog> Responder<C> {
    /// Creates a responder over an arbitrary message catalog.
    #[must_use]
    pub fn with_catalog(catalog: C, json: JsonOptions) -> Self {
        Self {
            catalog,
            json,
            include_stack_trace: false,
        }
    }

    /// Enables or disables error chains in [`Responder::failed_with_error`].
    #[must_use]
    pub fn include_stack_trace(mut self, enabled: bool) -> Self {
        self.include_stack_trace = enabled;
        self
    }

    /// Returns the message catalog.
    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Returns the JSON encoding options.
    #[must_use]
    pub fn json_options(&self) -> &JsonOptions {
        &self.json
    }

    /// Builds an envelope for an arbitrary request.
    pub fn build(&self, request: ResponseRequest) -> Envelope {
        Envelope::build(request, &self.catalog)
    }

    /// 200 OK with `data`.
    pub fn ok(&self, data: impl Into<Value>) -> Envelope {
        self.build(ResponseRequest::ok().with_data(data))
    }

    /// 401 Unauthenticated with `data`.
    pub fn unauthenticated(&self, data: impl Into<Value>) -> Envelope {
        self.build(ResponseRequest::unauthenticated().with_data(data))
    }

    /// 403 Forbidden with `data`.
    pub fn forbidden(&self, data: impl Into<Value>) -> Envelope {
        self.build(ResponseRequest::forbidden().with_data(data))
    }

    /// 404 Not Found with `data`.
    pub fn not_found(&self, data: impl Into<Value>) -> Envelope {
        self.build(ResponseRequest::not_found().with_data(data))
    }

    /// 422 Unprocessable Entity with validation errors in `data`.
    pub fn validation_errors(&self, data: impl Into<Value>) -> Envelope {
        self.build(ResponseRequest::validation_errors().with_data(data))
    }

    /// 500 Internal Server Error with `data`.
    pub fn failed(&self, data: impl Into<Value>) -> Envelope {
        self.build(ResponseRequest::failed().with_data(data))
    }

    /// 503 Service Unavailable with `data`.
    pub fn maintenance(&self, data: impl Into<Value>) -> Envelope {
        self.build(ResponseRequest::maintenance().with_data(data))
    }

    /// 500 Internal Server Error describing `error`.
    ///
    /// The error is always logged. Its text and source chain only reach the
    /// response body when stack traces are enabled; otherwise the data is
    /// empty.
    pub fn failed_with_error(&self, error: &(dyn StdError + 'static)) -> Envelope {
        tracing::error!(error = %error, "request failed");

        let mut request = ResponseRequest::failed();
        if self.include_stack_trace {
            let trace: Vec<String> = std::iter::successors(error.source(), |&e| e.source())
                .map(ToString::to_string)
                .collect();
            request = request.with_data(json!({
                "error": error.to_string(),
                "trace": trace,
            }));
        }
        self.build(request)
    }

    /// Encodes `envelope` with this responder's JSON options.
    ///
    /// # Errors
    ///
    /// Returns an error if the envelope data cannot be represented as JSON.
    pub fn render(&self, envelope: &Envelope) -> Result<Vec<u8>> {
        envelope.to_json(&self.json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{Code, Status};
    use crate::error::Error;

    #[derive(Debug)]
    struct Outer(Error);

    impl std::fmt::Display for Outer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("could not load user")
        }
    }

    impl StdError for Outer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    fn outer_error() -> Outer {
        Outer(Error::InvalidConfig("database offline".to_string()))
    }

    #[test]
    fn test_named_constructors_pin_codes() {
        let responder = Responder::unconfigured();
        let cases = [
            (responder.ok(json!({})), 200, Status::Ok),
            (responder.unauthenticated(json!({})), 401, Status::Error),
            (responder.forbidden(json!({})), 403, Status::Error),
            (responder.not_found(json!({})), 404, Status::Error),
            (responder.validation_errors(json!({})), 422, Status::Error),
            (responder.failed(json!({})), 500, Status::Failed),
            (responder.maintenance(json!({})), 503, Status::Failed),
        ];
        for (envelope, code, status) in cases {
            assert_eq!(envelope.code().as_u16(), code);
            assert_eq!(envelope.status(), status);
        }
    }

    #[test]
    fn test_configured_messages() {
        let responder = Responder::new(ResponseConfig::default());
        assert_eq!(responder.not_found(json!({})).message(), "Item not found");

        let bare = Responder::unconfigured();
        assert_eq!(bare.not_found(json!({})).message(), "Resource Not Found");
    }

    #[test]
    fn test_failed_with_error_hides_details_by_default() {
        let responder = Responder::new(ResponseConfig::default());
        let envelope = responder.failed_with_error(&outer_error());
        assert_eq!(envelope.code(), Code::ServerError);
        assert_eq!(envelope.data(), &json!({}));
    }

    #[test]
    fn test_failed_with_error_includes_trace_when_enabled() {
        let responder = Responder::unconfigured().include_stack_trace(true);
        let envelope = responder.failed_with_error(&outer_error());
        assert_eq!(envelope.message(), "Server Error");
        assert_eq!(
            envelope.data(),
            &json!({
                "error": "could not load user",
                "trace": ["Invalid config: database offline"],
            })
        );
    }

    #[test]
    fn test_failed_with_error_walks_whole_source_chain() {
        let disk = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let error = Outer(Error::Io(disk));
        let responder = Responder::unconfigured().include_stack_trace(true);
        let envelope = responder.failed_with_error(&error);
        assert_eq!(
            envelope.data()["trace"],
            json!(["IO error: disk full", "disk full"])
        );
    }

    #[test]
    fn test_config_controls_stack_trace() {
        let mut config = ResponseConfig::default();
        config.include_stack_trace = true;
        let responder = Responder::new(config);
        let envelope = responder.failed_with_error(&outer_error());
        assert!(envelope.data().get("trace").is_some());
    }

    #[test]
    fn test_render_uses_json_options() {
        let responder = Responder::with_catalog(
            NoCatalog,
            JsonOptions {
                escape_unicode: true,
                pretty: false,
            },
        );
        let envelope = responder.ok(json!({"name": "José"}));
        let body = String::from_utf8(responder.render(&envelope).unwrap()).unwrap();
        assert_eq!(
            body,
            r#"{"status":"OK","code":200,"message":"Ok","data":{"name":"Jos\u00e9"}}"#
        );
    }
}
