// Rust guideline compliant 2026-10-16

//! Respond Core Library
//!
//! This crate builds standardized JSON API response envelopes of the shape
//! `{status, code, message, data}`:
//! - Status codes and the semantic status classifier
//! - Envelope building (message fallback chain, payload normalization)
//! - Default-message catalogs
//! - Configuration loading (TOML file plus environment overrides)
//! - JSON encoding with optional unicode escaping
//! - Error types and result handling
//!
//! # Example
//!
//! ```
//! use respond_core::{Responder, ResponseRequest};
//! use serde_json::json;
//!
//! let responder = Responder::unconfigured();
//! let envelope = responder.build(ResponseRequest::not_found());
//! let body = responder.render(&envelope).unwrap();
//! assert_eq!(
//!     String::from_utf8(body).unwrap(),
//!     r#"{"status":"ERROR","code":404,"message":"Resource Not Found","data":{}}"#
//! );
//!
//! let envelope = responder.ok(json!({"message": "Created", "payload": {"id": 7}}));
//! assert_eq!(envelope.message(), "Created");
//! assert_eq!(envelope.data(), &json!({"id": 7}));
//! ```

pub mod catalog;
pub mod codes;
pub mod config;
pub mod envelope;
pub mod error;
pub mod json;
pub mod responder;

pub use catalog::{MessageCatalog, MessageTable, NoCatalog};
pub use codes::{classify, Code, Status};
pub use config::{ResponseConfig, CONFIG_FILE};
pub use envelope::{Envelope, ResponseRequest};
pub use error::{Error, Result, UnsupportedCodeError};
pub use json::JsonOptions;
pub use responder::Responder;
