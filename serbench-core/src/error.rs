// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Custom error types for serbench.
//!
//! This module defines explicit enum error types as per coding guidelines.
//! The library crates use no `Box<dyn Error>` and no `anyhow::Result` - all
//! errors are strongly typed. Only the `serbench` binary boxes errors, at the
//! top of each command.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the benchmark.
/// All errors are explicit variants - no catch-all or generic handling.
#[derive(Debug, Error)]
pub enum SerbenchError {
    // =========================================================================
    // Configuration Errors - Fail-Fast on Invalid Config
    // =========================================================================
    #[error("Hard validation error: {0}")]
    HardValidation(#[from] HardValidationError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    // =========================================================================
    // Harness Errors
    // =========================================================================
    #[error("Harness error: {0}")]
    Harness(#[from] HarnessError),

    // =========================================================================
    // Codec Errors
    // =========================================================================
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    // =========================================================================
    // System Errors
    // =========================================================================
    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Hard validation errors reject a configuration before any benchmark runs.
#[derive(Debug, Error)]
pub enum HardValidationError {
    #[error("Invalid field value: {field} = {value} - {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("List size out of bounds: {size} (min: {min}, max: {max})")]
    ListSizeOutOfBounds { size: u64, min: u64, max: u64 },

    #[error("Duplicate list size: {size}")]
    DuplicateListSize { size: u64 },

    #[error("Schema validation failed: {message}")]
    SchemaValidation { message: String },
}

/// Errors raised by the timing harness itself.
///
/// Failures of the timed operations never pass through here; they reach the
/// caller unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HarnessError {
    #[error("Iteration count must be at least 1")]
    NoIterations,

    #[error("Cannot compute statistics from an empty sample set")]
    NoSamples,
}

/// Serialization failures for either wire format.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("JSON encode failed: {0}")]
    JsonEncode(#[source] serde_json::Error),

    #[error("JSON decode failed: {0}")]
    JsonDecode(#[source] serde_json::Error),

    #[error("MessagePack encode failed: {0}")]
    MsgpackEncode(#[from] rmp_serde::encode::Error),

    #[error("MessagePack decode failed: {0}")]
    MsgpackDecode(#[from] rmp_serde::decode::Error),
}

/// Result type alias using SerbenchError.
pub type SerbenchResult<T> = Result<T, SerbenchError>;
