// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Format codecs and the file round-trip operations the benchmark times.
//!
//! MessagePack values are written with field names (`to_vec_named`) so a
//! struct becomes a map, matching the shape of the JSON document.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CodecError, SerbenchError, SerbenchResult};
use crate::types::Format;

impl Format {
    /// Serialize a value into this format.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        match self {
            Format::Json => serde_json::to_vec(value).map_err(CodecError::JsonEncode),
            Format::MessagePack => Ok(rmp_serde::to_vec_named(value)?),
        }
    }

    /// Deserialize a value from bytes in this format.
    pub fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        match self {
            Format::Json => serde_json::from_slice(bytes).map_err(CodecError::JsonDecode),
            Format::MessagePack => Ok(rmp_serde::from_slice(bytes)?),
        }
    }
}

/// Serialize `value` and write it to `path`, replacing any existing file.
///
/// Returns the number of bytes written.
pub async fn write_payload<T: Serialize + ?Sized>(
    format: Format,
    path: &Path,
    value: &T,
) -> SerbenchResult<u64> {
    let bytes = format.encode(value)?;
    tokio::fs::write(path, &bytes)
        .await
        .map_err(|e| SerbenchError::Io {
            context: "writing payload file",
            source: e,
        })?;
    Ok(bytes.len() as u64)
}

/// Read the whole file at `path` and deserialize it.
pub async fn read_payload<T: DeserializeOwned>(format: Format, path: &Path) -> SerbenchResult<T> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| SerbenchError::Io {
            context: "reading payload file",
            source: e,
        })?;
    Ok(format.decode(&bytes)?)
}
