// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Case-insensitive event names

use serde::{Deserialize, Serialize};

/// The reserved name whose handlers receive every emitted event.
pub const WILDCARD: &str = "*";

/// A normalized event name key.
///
/// Names are compared case-insensitively: `"Click"` and `"click"` address
/// the same handler bucket. Normalization happens once, at construction,
/// so every lookup path agrees on the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct EventName(String);

impl EventName {
    pub fn new(name: &str) -> Self {
        Self(name.to_lowercase())
    }

    /// The wildcard key. Normalized like any other name.
    pub fn wildcard() -> Self {
        Self::new(WILDCARD)
    }

    pub fn is_wildcard(&self) -> bool {
        self.0 == WILDCARD
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EventName {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "name_tests.rs"]
mod tests;
