// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! YAML configuration parser with strict schema validation.
//!
//! The only tunable is the set of list sizes to benchmark. Any invalid
//! entry results in a HardValidationError before a single file is written.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{HardValidationError, SerbenchError, SerbenchResult};
use crate::types::ListSize;

/// List sizes benchmarked when nothing else is configured.
pub const DEFAULT_LIST_SIZES: [u64; 5] = [10_000, 100_000, 250_000, 500_000, 750_000];

/// Raw configuration as parsed from YAML (before validation).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default = "default_list_sizes")]
    list_sizes: Vec<u64>,
}

fn default_list_sizes() -> Vec<u64> {
    DEFAULT_LIST_SIZES.to_vec()
}

/// Validated benchmark configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub list_sizes: Vec<ListSize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_sizes: DEFAULT_LIST_SIZES
                .iter()
                .copied()
                .map(ListSize)
                .collect(),
        }
    }
}

/// Configuration loader with strict validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from a YAML file.
    pub fn load_file(path: impl AsRef<Path>) -> SerbenchResult<Config> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SerbenchError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| SerbenchError::Io {
            context: "reading config file",
            source: e,
        })?;

        tracing::debug!(path = %path.display(), "Loaded configuration file");
        Self::load_string(&content)
    }

    /// Load and validate configuration from a YAML string.
    pub fn load_string(content: &str) -> SerbenchResult<Config> {
        // An empty document means "all defaults".
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| SerbenchError::ConfigParse {
                message: format!("YAML parse error: {}", e),
            })?;

        Self::validate(raw)
    }

    /// Validate a list of raw sizes, e.g. from command-line flags.
    pub fn validate_sizes(raw: &[u64]) -> SerbenchResult<Vec<ListSize>> {
        if raw.is_empty() {
            return Err(HardValidationError::SchemaValidation {
                message: "At least one list size must be defined".to_string(),
            }
            .into());
        }

        let mut seen = HashSet::new();
        let mut sizes = Vec::with_capacity(raw.len());
        for &count in raw {
            let size = ListSize::new(count)?;
            if !seen.insert(count) {
                return Err(HardValidationError::DuplicateListSize { size: count }.into());
            }
            sizes.push(size);
        }

        Ok(sizes)
    }

    fn validate(raw: RawConfig) -> SerbenchResult<Config> {
        let list_sizes = Self::validate_sizes(&raw.list_sizes)?;
        Ok(Config { list_sizes })
    }
}
