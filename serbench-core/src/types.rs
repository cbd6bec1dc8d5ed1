// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Newtype wrappers for validated inputs.
//!
//! Following the "Newtype" pattern in Rust to ensure valid state by construction.
//! All types validate their invariants at creation time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HardValidationError;

/// Smallest list a benchmark will build.
pub const MIN_LIST_SIZE: u64 = 1;
/// Largest list a benchmark will build: 10 million objects
pub const MAX_LIST_SIZE: u64 = 10_000_000;

/// Validated number of objects in a generated test list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ListSize(pub(crate) u64);

impl ListSize {
    /// Create a new ListSize with bounds validation.
    pub fn new(count: u64) -> Result<Self, HardValidationError> {
        if !(MIN_LIST_SIZE..=MAX_LIST_SIZE).contains(&count) {
            return Err(HardValidationError::ListSizeOutOfBounds {
                size: count,
                min: MIN_LIST_SIZE,
                max: MAX_LIST_SIZE,
            });
        }
        Ok(Self(count))
    }

    /// Number of objects in the list.
    pub fn count(&self) -> usize {
        self.0 as usize
    }

    /// Get the inner value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Short label used in table rows: `10k`, `1m`, or the plain count.
    pub fn label(&self) -> String {
        if self.0 % 1_000_000 == 0 {
            format!("{}m", self.0 / 1_000_000)
        } else if self.0 % 1_000 == 0 {
            format!("{}k", self.0 / 1_000)
        } else {
            self.0.to_string()
        }
    }
}

impl fmt::Display for ListSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ListSize {
    type Err = HardValidationError;

    /// Accepts plain counts (`10000`, `10_000`) and labels (`10k`, `1m`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_ascii_lowercase().replace('_', "");
        let (digits, multiplier) = if let Some(d) = trimmed.strip_suffix('m') {
            (d, 1_000_000)
        } else if let Some(d) = trimmed.strip_suffix('k') {
            (d, 1_000)
        } else {
            (trimmed.as_str(), 1)
        };

        let count = digits
            .parse::<u64>()
            .ok()
            .and_then(|n| n.checked_mul(multiplier))
            .ok_or_else(|| HardValidationError::InvalidFieldValue {
                field: "list_size",
                value: s.to_string(),
                reason: "Expected a count such as 10000, 10k or 1m".to_string(),
            })?;

        Self::new(count)
    }
}

impl TryFrom<u64> for ListSize {
    type Error = HardValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ListSize> for u64 {
    fn from(size: ListSize) -> Self {
        size.0
    }
}

/// Serialization formats under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Format {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "msgpack")]
    MessagePack,
}

impl Format {
    /// Every format, in the order the suite benchmarks them.
    pub const ALL: [Format; 2] = [Format::Json, Format::MessagePack];

    /// File extension for scratch files written in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::MessagePack => "msgpack",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::MessagePack => write!(f, "msgpack"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_size_valid() {
        assert!(ListSize::new(1).is_ok());
        assert!(ListSize::new(10_000).is_ok());
        assert!(ListSize::new(MAX_LIST_SIZE).is_ok());
    }

    #[test]
    fn test_list_size_invalid() {
        assert!(ListSize::new(0).is_err());
        assert!(ListSize::new(MAX_LIST_SIZE + 1).is_err());
    }

    #[test]
    fn test_list_size_label() {
        assert_eq!(ListSize::new(10_000).unwrap().label(), "10k");
        assert_eq!(ListSize::new(250_000).unwrap().label(), "250k");
        assert_eq!(ListSize::new(1_000_000).unwrap().label(), "1m");
        assert_eq!(ListSize::new(1_500_000).unwrap().label(), "1500k");
        assert_eq!(ListSize::new(2_500).unwrap().label(), "2500");
    }

    #[test]
    fn test_list_size_parse() {
        assert_eq!("10k".parse::<ListSize>().unwrap().value(), 10_000);
        assert_eq!("1M".parse::<ListSize>().unwrap().value(), 1_000_000);
        assert_eq!("750_000".parse::<ListSize>().unwrap().value(), 750_000);
        assert_eq!("42".parse::<ListSize>().unwrap().value(), 42);
        assert!("".parse::<ListSize>().is_err());
        assert!("ten".parse::<ListSize>().is_err());
        assert!("0k".parse::<ListSize>().is_err());
        assert!("20m".parse::<ListSize>().is_err());
    }

    #[test]
    fn test_list_size_serde() {
        let size: ListSize = serde_yaml::from_str("100000").unwrap();
        assert_eq!(size.value(), 100_000);
        assert!(serde_yaml::from_str::<ListSize>("0").is_err());
    }

    #[test]
    fn test_format_names() {
        assert_eq!(Format::Json.to_string(), "json");
        assert_eq!(Format::MessagePack.to_string(), "msgpack");
        assert_eq!(Format::MessagePack.extension(), "msgpack");
        assert_eq!(Format::ALL, [Format::Json, Format::MessagePack]);
        assert_eq!(
            serde_json::to_string(&Format::MessagePack).unwrap(),
            "\"msgpack\""
        );
    }
}
