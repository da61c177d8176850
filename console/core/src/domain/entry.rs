// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

use serde::{Deserialize, Serialize};

/// Canonical representation of one registration entry.
///
/// The server-assigned entry id is the natural key; SPIFFE/parent ids and
/// selectors remain uninterpreted in `attributes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub id: String,
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_requires_id() {
        let raw = serde_json::json!({ "spiffe_id": { "trust_domain": "example.org" } });
        assert!(serde_json::from_value::<EntryRecord>(raw).is_err());
    }
}
