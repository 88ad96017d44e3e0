// Rust guideline compliant 2026-10-16

//! Supported HTTP status codes and their semantic classification.

use crate::error::UnsupportedCodeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// High-level status reported in every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The request succeeded (2xx).
    Ok,
    /// Client or otherwise non-server error.
    Error,
    /// Server failure (5xx).
    Failed,
}

impl Status {
    /// Returns the wire representation of the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Error => "ERROR",
            Status::Failed => "FAILED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps an arbitrary HTTP status code to its semantic status.
///
/// Total over all integers: `200..300` is [`Status::Ok`], anything from 500
/// upwards is [`Status::Failed`], everything else is [`Status::Error`].
#[must_use]
pub fn classify(code: i64) -> Status {
    if (200..300).contains(&code) {
        Status::Ok
    } else if code >= 500 {
        Status::Failed
    } else {
        Status::Error
    }
}

/// HTTP status codes an envelope can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Code {
    /// Successful request.
    Ok,
    /// Authentication required or invalid credentials.
    UnauthenticatedUser,
    /// Authenticated but not authorized to access the resource.
    ForbiddenResource,
    /// Resource not found.
    ResourceNotFound,
    /// Validation failed for the provided input.
    ValidationErrors,
    /// Internal server error.
    ServerError,
    /// Service unavailable due to maintenance or overload.
    Maintenance,
}

struct CodeInfo {
    code: Code,
    value: u16,
    identifier: &'static str,
}

// Indexed by the `Code` discriminant.
static CODES: [CodeInfo; 7] = [
    CodeInfo {
        code: Code::Ok,
        value: 200,
        identifier: "OK",
    },
    CodeInfo {
        code: Code::UnauthenticatedUser,
        value: 401,
        identifier: "UNAUTHENTICATED_USER",
    },
    CodeInfo {
        code: Code::ForbiddenResource,
        value: 403,
        identifier: "FORBIDDEN_RESOURCE",
    },
    CodeInfo {
        code: Code::ResourceNotFound,
        value: 404,
        identifier: "RESOURCE_NOT_FOUND",
    },
    CodeInfo {
        code: Code::ValidationErrors,
        value: 422,
        identifier: "VALIDATION_ERRORS",
    },
    CodeInfo {
        code: Code::ServerError,
        value: 500,
        identifier: "SERVER_ERROR",
    },
    CodeInfo {
        code: Code::Maintenance,
        value: 503,
        identifier: "MAINTENANCE",
    },
];

impl Code {
    fn info(self) -> &'static CodeInfo {
        &CODES[self as usize]
    }

    /// Iterates over every supported code in ascending numeric order.
    pub fn all() -> impl Iterator<Item = Code> {
        CODES.iter().map(|info| info.code)
    }

    /// Returns the numeric HTTP status code.
    #[must_use]
    pub fn as_u16(self) -> u16 {
        self.info().value
    }

    /// Returns the symbolic identifier, e.g. `RESOURCE_NOT_FOUND`.
    #[must_use]
    pub fn identifier(self) -> &'static str {
        self.info().identifier
    }

    /// Returns the intrinsic fallback message for this code.
    ///
    /// The identifier is split on underscores and each word is title-cased,
    /// so `RESOURCE_NOT_FOUND` becomes `Resource Not Found`.
    #[must_use]
    pub fn friendly_name(self) -> String {
        title_case(self.identifier())
    }

    /// Returns the semantic status for this code.
    #[must_use]
    pub fn status(self) -> Status {
        classify(i64::from(self.as_u16()))
    }
}

fn title_case(identifier: &str) -> String {
    identifier
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

impl TryFrom<i64> for Code {
    type Error = UnsupportedCodeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        CODES
            .iter()
            .find(|info| i64::from(info.value) == value)
            .map(|info| info.code)
            .ok_or(UnsupportedCodeError(value))
    }
}

impl TryFrom<u16> for Code {
    type Error = UnsupportedCodeError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Code::try_from(i64::from(value))
    }
}

impl From<Code> for u16 {
    fn from(code: Code) -> Self {
        code.as_u16()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.friendly_name())
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.as_u16())
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        Code::try_from(value).map_err(serde::de::Error::custom)
    }
}
