// Rust guideline compliant 2026-10-16

//! JSON encoding with configurable unicode escaping and pretty printing.

use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};
use std::io;

/// Encoding options applied when serializing envelopes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonOptions {
    /// Write non-ASCII characters as `\uXXXX` escapes.
    #[serde(default)]
    pub escape_unicode: bool,

    /// Indent output with two spaces.
    #[serde(default)]
    pub pretty: bool,
}

/// Serializes `value` as UTF-8 JSON according to `options`.
///
/// # Errors
///
/// Returns an error if `value` cannot be represented as JSON, e.g. a map
/// with non-string keys.
pub fn encode<T: Serialize + ?Sized>(value: &T, options: &JsonOptions) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(128);
    match (options.pretty, options.escape_unicode) {
        (false, false) => serde_json::to_writer(&mut out, value)?,
        (true, false) => serde_json::to_writer_pretty(&mut out, value)?,
        (false, true) => {
            let mut ser = Serializer::with_formatter(&mut out, AsciiFormatter(CompactFormatter));
            value.serialize(&mut ser)?;
        }
        (true, true) => {
            let formatter = AsciiFormatter(PrettyFormatter::new());
            let mut ser = Serializer::with_formatter(&mut out, formatter);
            value.serialize(&mut ser)?;
        }
    }
    Ok(out)
}

/// Serializes `value` into a `String` according to `options`.
///
/// # Errors
///
/// Returns an error under the same conditions as [`encode`].
pub fn encode_to_string<T: Serialize + ?Sized>(value: &T, options: &JsonOptions) -> Result<String> {
    let bytes = encode(value, options)?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Wraps another formatter and escapes every non-ASCII scalar in strings.
struct AsciiFormatter<F>(F);

impl<F: Formatter> Formatter for AsciiFormatter<F> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let bytes = fragment.as_bytes();
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            if start < index {
                writer.write_all(&bytes[start..index])?;
            }
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(&bytes[start..])
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_object_key(writer, first)
    }

    fn end_object_key<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_object_key(writer)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_object_value(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unicode_is_raw_by_default() {
        let value = json!({"city": "Zürich", "greeting": "こんにちは"});
        let out = encode_to_string(&value, &JsonOptions::default()).unwrap();
        assert_eq!(out, r#"{"city":"Zürich","greeting":"こんにちは"}"#);
    }

    #[test]
    fn test_escape_unicode() {
        let options = JsonOptions {
            escape_unicode: true,
            pretty: false,
        };
        let out = encode_to_string(&json!({"city": "Zürich", "emoji": "😀"}), &options).unwrap();
        assert_eq!(out, r#"{"city":"Z\u00fcrich","emoji":"\ud83d\ude00"}"#);
    }

    #[test]
    fn test_escape_keeps_existing_escapes() {
        let options = JsonOptions {
            escape_unicode: true,
            pretty: false,
        };
        let out = encode_to_string(&json!("line\n\"é\""), &options).unwrap();
        assert_eq!(out, r#""line\n\"\u00e9\"""#);
    }

    #[test]
    fn test_pretty_escaped() {
        let options = JsonOptions {
            escape_unicode: true,
            pretty: true,
        };
        let out = encode_to_string(&json!({"a": ["ü"]}), &options).unwrap();
        assert_eq!(out, "{\n  \"a\": [\n    \"\\u00fc\"\n  ]\n}");
    }

    #[test]
    fn test_pretty_raw() {
        let options = JsonOptions {
            escape_unicode: false,
            pretty: true,
        };
        let out = encode_to_string(&json!({"a": 1}), &options).unwrap();
        assert_eq!(out, "{\n  \"a\": 1\n}");
    }
}
