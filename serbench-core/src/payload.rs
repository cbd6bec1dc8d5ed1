// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Synthetic payload shared by every benchmark.
//!
//! Each list element is the same small document mixing a string, an
//! integer, a boolean and a null:
//!
//! ```json
//! { "foo": ["bar", 5, true], "baz": null }
//! ```

use serde::{Deserialize, Serialize};

/// The fixed object shape repeated in every test list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestObject {
    pub foo: (String, i64, bool),
    pub baz: Option<String>,
}

impl Default for TestObject {
    fn default() -> Self {
        Self {
            foo: ("bar".to_string(), 5, true),
            baz: None,
        }
    }
}

/// Build a list holding `size` copies of [`TestObject::default`].
pub fn build_test_list(size: usize) -> Vec<TestObject> {
    vec![TestObject::default(); size]
}
