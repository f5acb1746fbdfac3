//! JSON encoder for response bodies.
//!
//! Clients of the deployed functions compare bodies byte for byte, and those
//! bodies were always written with a space after every `,` and `:` and with
//! all non-ASCII text escaped. `serde_json`'s compact output differs on both
//! counts, so bodies go through [`SpacedFormatter`] instead.

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io;

#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.bytes().all(is_printable_ascii) {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() && is_printable_ascii(ch as u8) {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

// Control characters never reach a fragment; serde_json escapes them itself.
fn is_printable_ascii(byte: u8) -> bool {
    byte.is_ascii() && byte != 0x7f
}

/// Serialize `value` into a response body string.
pub fn to_body_string<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: ?Sized + Serialize,
{
    let mut out = Vec::with_capacity(64);
    let mut ser = Serializer::with_formatter(&mut out, SpacedFormatter);
    value.serialize(&mut ser)?;
    String::from_utf8(out).map_err(serde_json::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::MessageBody;
    use serde_json::json;

    #[test]
    fn test_message_body_has_spaced_separators() {
        let body = to_body_string(&MessageBody::new("Hello from Lambda!")).unwrap();
        assert_eq!(body, r#"{"message": "Hello from Lambda!"}"#);
    }

    #[test]
    fn test_nested_values() {
        let body = to_body_string(&json!({ "a": [1, 2, 3], "b": { "c": null, "d": true } })).unwrap();
        assert_eq!(body, r#"{"a": [1, 2, 3], "b": {"c": null, "d": true}}"#);
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(to_body_string(&json!({})).unwrap(), "{}");
        assert_eq!(to_body_string(&json!([])).unwrap(), "[]");
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        let body = to_body_string(&MessageBody::new("café 🚀")).unwrap();
        assert_eq!(body, r#"{"message": "caf\u00e9 \ud83d\ude80"}"#);
        assert!(body.is_ascii());
    }

    #[test]
    fn test_escapes_and_delete() {
        let body = to_body_string(&MessageBody::new("a\"b\n\u{7f}")).unwrap();
        assert_eq!(body, r#"{"message": "a\"b\n\u007f"}"#);
    }

    #[test]
    fn test_output_parses_back() {
        let body = to_body_string(&MessageBody::new("Grüße")).unwrap();
        let parsed: MessageBody = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.message, "Grüße");
    }
}
