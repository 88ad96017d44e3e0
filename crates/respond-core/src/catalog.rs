// Rust guideline compliant 2026-10-16

//! Default-message lookup for envelope building.
//!
//! A [`MessageCatalog`] supplies the per-code message used when a caller
//! gives no explicit message. Lookups may fail (for example a catalog backed
//! by an unavailable configuration source); the envelope builder recovers
//! from such failures by falling back to the code's friendly name.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Source of default messages keyed by numeric status code.
pub trait MessageCatalog: Send + Sync {
    /// Returns the configured default message for `code`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be consulted.
    fn default_message(&self, code: u16) -> Result<Option<Cow<'_, str>>>;
}

/// Catalog that never knows a message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoCatalog;

impl MessageCatalog for NoCatalog {
    fn default_message(&self, _code: u16) -> Result<Option<Cow<'_, str>>> {
        Ok(None)
    }
}

impl<C: MessageCatalog> MessageCatalog for Option<C> {
    fn default_message(&self, code: u16) -> Result<Option<Cow<'_, str>>> {
        match self {
            Some(catalog) => catalog.default_message(code),
            None => Ok(None),
        }
    }
}

impl<C: MessageCatalog + ?Sized> MessageCatalog for Arc<C> {
    fn default_message(&self, code: u16) -> Result<Option<Cow<'_, str>>> {
        (**self).default_message(code)
    }
}

impl<C: MessageCatalog + ?Sized> MessageCatalog for &C {
    fn default_message(&self, code: u16) -> Result<Option<Cow<'_, str>>> {
        (**self).default_message(code)
    }
}

/// In-memory table of default messages.
///
/// Serialized as a map with string keys so it can live in a TOML table:
///
/// ```toml
/// [default_messages]
/// 404 = "Item not found"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct MessageTable(BTreeMap<u16, String>);

impl MessageTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table shipped with the library defaults.
    #[must_use]
    pub fn shipped() -> Self {
        let entries = [
            (200, "OK"),
            (401, "Unauthenticated user"),
            (403, "Forbidden resource"),
            (404, "Item not found"),
            (422, "Incomplete form"),
            (500, "Server error"),
            (503, "Maintenance"),
        ];
        Self(
            entries
                .into_iter()
                .map(|(code, message)| (code, message.to_string()))
                .collect(),
        )
    }

    /// Inserts or replaces the message for `code`.
    ///
    /// # Errors
    ///
    /// Returns an error if `code` is not a valid HTTP status code or the
    /// message is blank.
    pub fn insert(&mut self, code: u16, message: impl Into<String>) -> Result<()> {
        let message = message.into();
        validate_entry(code, &message)?;
        self.0.insert(code, message);
        Ok(())
    }

    /// Returns the message for `code`, if present.
    #[must_use]
    pub fn get(&self, code: u16) -> Option<&str> {
        self.0.get(&code).map(String::as_str)
    }

    /// Iterates over entries in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &str)> {
        self.0.iter().map(|(code, message)| (*code, message.as_str()))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn validate_entry(code: u16, message: &str) -> Result<()> {
    if !(100..=599).contains(&code) {
        return Err(Error::InvalidConfig(format!(
            "default message code must be 100-599, got {}",
            code
        )));
    }
    if message.trim().is_empty() {
        return Err(Error::InvalidConfig(format!(
            "default message for {} cannot be empty",
            code
        )));
    }
    Ok(())
}

impl TryFrom<BTreeMap<String, String>> for MessageTable {
    type Error = Error;

    fn try_from(raw: BTreeMap<String, String>) -> Result<Self> {
        let mut table = MessageTable::new();
        for (key, message) in raw {
            let code: u16 = key.trim().parse().map_err(|_| {
                Error::InvalidConfig(format!(
                    "default message key must be a status code, got '{}'",
                    key
                ))
            })?;
            table.insert(code, message)?;
        }
        Ok(table)
    }
}

impl From<MessageTable> for BTreeMap<String, String> {
    fn from(table: MessageTable) -> Self {
        table
            .0
            .into_iter()
            .map(|(code, message)| (code.to_string(), message))
            .collect()
    }
}

impl MessageCatalog for MessageTable {
    fn default_message(&self, code: u16) -> Result<Option<Cow<'_, str>>> {
        Ok(self.get(code).map(Cow::Borrowed))
    }
}
