// Rust guideline compliant 2026-10-16

//! Response envelope model and builder.
//!
//! Every envelope has the shape `{status, code, message, data}`. Building one
//! resolves the message through a fallback chain and normalizes the data:
//!
//! 1. An explicit, non-empty message is used verbatim.
//! 2. Otherwise a `message` key in the data mapping is taken (and removed).
//! 3. Otherwise the catalog's default for the code.
//! 4. Otherwise the code's friendly name.
//!
//! A `payload` key in the data mapping replaces the data with its value, and
//! a `message` key is never left in mapping data.

use crate::catalog::MessageCatalog;
use crate::codes::{Code, Status};
use crate::error::Error;
use crate::json::{self, JsonOptions};
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const MESSAGE_KEY: &str = "message";
const PAYLOAD_KEY: &str = "payload";

/// Input for building a single envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseRequest {
    /// Status code of the response.
    pub code: Code,
    /// Data payload; an empty mapping when absent or null.
    pub data: Option<Value>,
    /// Explicit message; empty strings count as absent.
    pub message: Option<String>,
}

impl ResponseRequest {
    /// Creates a request with no data and no message.
    #[must_use]
    pub fn new(code: Code) -> Self {
        Self {
            code,
            data: None,
            message: None,
        }
    }

    /// Sets the data payload.
    #[must_use]
    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Sets an explicit message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Request pinned to 200.
    #[must_use]
    pub fn ok() -> Self {
        Self::new(Code::Ok)
    }

    /// Request pinned to 401.
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self::new(Code::UnauthenticatedUser)
    }

    /// Request pinned to 403.
    #[must_use]
    pub fn forbidden() -> Self {
        Self::new(Code::ForbiddenResource)
    }

    /// Request pinned to 404.
    #[must_use]
    pub fn not_found() -> Self {
        Self::new(Code::ResourceNotFound)
    }

    /// Request pinned to 422.
    #[must_use]
    pub fn validation_errors() -> Self {
        Self::new(Code::ValidationErrors)
    }

    /// Request pinned to 500.
    #[must_use]
    pub fn failed() -> Self {
        Self::new(Code::ServerError)
    }

    /// Request pinned to 503.
    #[must_use]
    pub fn maintenance() -> Self {
        Self::new(Code::Maintenance)
    }
}

/// A built response body.
///
/// The `status` field always agrees with `code`, and `message` is never
/// empty. Deserializing enforces the same invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEnvelope")]
pub struct Envelope {
    status: Status,
    code: Code,
    message: String,
    data: Value,
}

impl Envelope {
    /// Builds an envelope from `request`, consulting `catalog` for default
    /// messages.
    ///
    /// Never fails: a catalog error is logged and the code's friendly name
    /// is used instead.
    pub fn build<C: MessageCatalog + ?Sized>(request: ResponseRequest, catalog: &C) -> Self {
        let ResponseRequest {
            code,
            data,
            message,
        } = request;
        let mut data = data
            .filter(|data| !data.is_null())
            .unwrap_or_else(|| Value::Object(Map::new()));

        let message = match message.filter(|m| !m.is_empty()) {
            Some(explicit) => explicit,
            None => take_data_message(&mut data)
                .unwrap_or_else(|| resolve_default_message(code, catalog)),
        };

        Self {
            status: code.status(),
            code,
            message,
            data: normalize_data(data),
        }
    }

    /// Returns the semantic status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the status code.
    #[must_use]
    pub fn code(&self) -> Code {
        self.code
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the normalized data.
    #[must_use]
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Consumes the envelope and returns its data.
    #[must_use]
    pub fn into_data(self) -> Value {
        self.data
    }

    /// Encodes the envelope as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be represented as JSON.
    pub fn to_json(&self, options: &JsonOptions) -> Result<Vec<u8>> {
        json::encode(self, options)
    }
}

impl From<Envelope> for Value {
    fn from(envelope: Envelope) -> Self {
        let mut map = Map::new();
        map.insert("status".to_string(), Value::from(envelope.status.as_str()));
        map.insert("code".to_string(), Value::from(envelope.code.as_u16()));
        map.insert(MESSAGE_KEY.to_string(), Value::from(envelope.message));
        map.insert("data".to_string(), envelope.data);
        Value::Object(map)
    }
}

#[derive(Deserialize)]
struct RawEnvelope {
    status: Status,
    code: Code,
    message: String,
    data: Value,
}

impl TryFrom<RawEnvelope> for Envelope {
    type Error = Error;

    fn try_from(raw: RawEnvelope) -> Result<Self> {
        if raw.status != raw.code.status() {
            return Err(Error::InvalidEnvelope(format!(
                "status {} does not match code {}",
                raw.status,
                raw.code.as_u16()
            )));
        }
        if raw.message.is_empty() {
            return Err(Error::InvalidEnvelope(
                "message cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            status: raw.status,
            code: raw.code,
            message: raw.message,
            data: raw.data,
        })
    }
}

/// Removes a `message` key from mapping data and returns it if usable.
fn take_data_message(data: &mut Value) -> Option<String> {
    let removed = data.as_object_mut()?.remove(MESSAGE_KEY)?;
    match removed {
        Value::String(message) if !message.is_empty() => Some(message),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn resolve_default_message<C: MessageCatalog + ?Sized>(code: Code, catalog: &C) -> String {
    match catalog.default_message(code.as_u16()) {
        Ok(Some(message)) if !message.is_empty() => message.into_owned(),
        Ok(_) => {
            tracing::debug!(code = code.as_u16(), "no default message configured");
            code.friendly_name()
        }
        Err(err) => {
            tracing::warn!(
                code = code.as_u16(),
                error = %err,
                "message catalog unavailable, using friendly name"
            );
            code.friendly_name()
        }
    }
}

/// Unwraps a non-null `payload` and strips any `message` key.
fn normalize_data(data: Value) -> Value {
    let mut effective = match data {
        Value::Object(mut map) => {
            if map.get(PAYLOAD_KEY).is_some_and(|payload| !payload.is_null()) {
                map.remove(PAYLOAD_KEY).unwrap_or_default()
            } else {
                Value::Object(map)
            }
        }
        other => other,
    };

    if let Value::Object(map) = &mut effective {
        map.remove(MESSAGE_KEY);
    }
    effective
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MessageTable, NoCatalog};
    use serde_json::json;
    use std::borrow::Cow;

    struct BrokenCatalog;

    impl MessageCatalog for BrokenCatalog {
        fn default_message(&self, _code: u16) -> Result<Option<Cow<'_, str>>> {
            Err(Error::InvalidConfig("config source offline".to_string()))
        }
    }

    #[test]
    fn test_absent_data_is_empty_object() {
        let envelope = Envelope::build(ResponseRequest::new(Code::ResourceNotFound), &NoCatalog);
        assert_eq!(envelope.data(), &json!({}));
        assert_eq!(envelope.message(), "Resource Not Found");
    }

    #[test]
    fn test_empty_explicit_message_falls_through() {
        let request = ResponseRequest::new(Code::Ok)
            .with_data(json!({"message": "From data"}))
            .with_message("");
        let envelope = Envelope::build(request, &NoCatalog);
        assert_eq!(envelope.message(), "From data");
        assert_eq!(envelope.data(), &json!({}));
    }

    #[test]
    fn test_unusable_data_message_is_dropped() {
        let request = ResponseRequest::new(Code::Ok).with_data(json!({"message": null, "a": 1}));
        let envelope = Envelope::build(request, &MessageTable::shipped());
        assert_eq!(envelope.message(), "OK");
        assert_eq!(envelope.data(), &json!({"a": 1}));
    }

    #[test]
    fn test_numeric_data_message_is_stringified() {
        let request = ResponseRequest::new(Code::Ok).with_data(json!({"message": 42}));
        let envelope = Envelope::build(request, &NoCatalog);
        assert_eq!(envelope.message(), "42");
    }

    #[test]
    fn test_null_payload_is_not_unwrapped() {
        let request = ResponseRequest::new(Code::Ok).with_data(json!({"payload": null, "a": 1}));
        let envelope = Envelope::build(request, &NoCatalog);
        assert_eq!(envelope.data(), &json!({"payload": null, "a": 1}));
    }

    #[test]
    fn test_non_object_data_passes_through() {
        let request = ResponseRequest::new(Code::Ok).with_data(json!([1, 2, 3]));
        let envelope = Envelope::build(request, &NoCatalog);
        assert_eq!(envelope.data(), &json!([1, 2, 3]));

        let request = ResponseRequest::new(Code::Ok).with_data(json!({"payload": "text"}));
        let envelope = Envelope::build(request, &NoCatalog);
        assert_eq!(envelope.data(), &json!("text"));
    }

    #[test]
    fn test_broken_catalog_falls_back_to_friendly_name() {
        let envelope = Envelope::build(ResponseRequest::new(Code::ServerError), &BrokenCatalog);
        assert_eq!(envelope.message(), "Server Error");
        assert_eq!(envelope.status(), Status::Failed);
    }

    #[test]
    fn test_into_value() {
        let envelope = Envelope::build(ResponseRequest::new(Code::Maintenance), &NoCatalog);
        let value = Value::from(envelope);
        assert_eq!(
            value,
            json!({"status": "FAILED", "code": 503, "message": "Maintenance", "data": {}})
        );
    }

    #[test]
    fn test_deserialize_rejects_mismatched_status() {
        let bad = r#"{"status":"OK","code":404,"message":"x","data":{}}"#;
        assert!(serde_json::from_str::<Envelope>(bad).is_err());

        let empty = r#"{"status":"ERROR","code":404,"message":"","data":{}}"#;
        assert!(serde_json::from_str::<Envelope>(empty).is_err());

        let good = r#"{"status":"ERROR","code":404,"message":"x","data":{}}"#;
        let envelope: Envelope = serde_json::from_str(good).unwrap();
        assert_eq!(envelope.code(), Code::ResourceNotFound);
    }
}
