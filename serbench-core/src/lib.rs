// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! serbench Core Library
//!
//! Building blocks for the JSON vs MessagePack round-trip benchmark.
//! Provides error types, validated list sizes and formats, configuration
//! parsing, the synthetic test payload, and the file round-trip codecs.

pub mod codec;
pub mod config;
pub mod error;
pub mod payload;
pub mod types;

// Re-export commonly used types
pub use codec::{read_payload, write_payload};
pub use config::{Config, ConfigLoader, DEFAULT_LIST_SIZES};
pub use error::{CodecError, HardValidationError, HarnessError, SerbenchError, SerbenchResult};
pub use payload::{build_test_list, TestObject};
pub use types::{Format, ListSize};
