//! Versioned encoding of serialized field values.
//!
//! A stored object is the 2-byte magic `OX`, one format version byte, then
//! the JSON encoding of the [`FieldValue`]. Blobs written with another
//! version are rejected rather than guessed at. Non-finite floats are
//! stored by name, so every value written here can be read back.

use std::io::Read;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{DialectError, Result};
use crate::value::FieldValue;

/// Leading bytes of every encoded object.
pub const MAGIC: [u8; 2] = *b"OX";

/// Current format version.
pub const FORMAT_VERSION: u8 = 1;

/// Serializes a field value into its stored form.
pub fn serialize_object(value: &FieldValue) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(64);
    out.extend_from_slice(&MAGIC);
    out.push(FORMAT_VERSION);
    serde_json::to_writer(&mut out, value)
        .map_err(|e| DialectError::data_access("could not write serialized object", e))?;
    Ok(out)
}

/// Reads a field value back from its stored form.
pub fn deserialize_object<R: Read>(mut reader: R) -> Result<FieldValue> {
    let mut header = [0_u8; 3];
    reader
        .read_exact(&mut header)
        .map_err(|e| DialectError::data_access("could not read serialized object header", e))?;
    if header[..2] != MAGIC {
        return Err(DialectError::DataAccess {
            message: String::from("serialized object has an unknown header"),
            source: None,
        });
    }
    if header[2] != FORMAT_VERSION {
        return Err(DialectError::DataAccess {
            message: format!(
                "serialized object format version {} is not supported (expected {FORMAT_VERSION})",
                header[2]
            ),
            source: None,
        });
    }
    serde_json::from_reader(reader)
        .map_err(|e| DialectError::data_access("could not read serialized object", e))
}

/// Serializes any serde value as a [`FieldValue::Object`].
pub fn encode_object<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let json = serde_json::to_value(value)
        .map_err(|e| DialectError::data_access("could not convert object", e))?;
    serialize_object(&FieldValue::Object(json))
}

/// Reads a value written by [`encode_object`].
pub fn decode_object<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    match deserialize_object(bytes)? {
        FieldValue::Object(json) => serde_json::from_value(json)
            .map_err(|e| DialectError::data_access("could not convert object", e)),
        other => Err(DialectError::DataAccess {
            message: format!("serialized value is a {}, not an object", other.kind()),
            source: None,
        }),
    }
}
