// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Workload Attestation Metadata
//!
//! Advisory metadata joined to agent records at display time, keyed by
//! the derived SPIFFE ID. Sourced from a separate feed with its own
//! lifecycle — it can be stale or missing without corrupting the agent
//! list, which is why it is never merged into canonical storage.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Sentinel plugin value for agents with no matching attestation entry.
/// Display code never has to special-case an absent plugin field.
pub const NO_PLUGIN_CONFIGURED: &str = "No Plugin Configured For Agent";

/// One workload-attestor entry from the metadata feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestationInfo {
    pub spiffeid: String,
    pub plugin: String,
}

/// Lookup index over attestation entries, built once per attestation
/// fetch and supplied to enrichment by the caller.
#[derive(Debug, Clone, Default)]
pub struct AttestationIndex {
    by_spiffe_id: HashMap<String, String>,
}

impl AttestationIndex {
    pub fn from_infos(infos: impl IntoIterator<Item = AttestationInfo>) -> Self {
        Self {
            by_spiffe_id: infos
                .into_iter()
                .map(|info| (info.spiffeid, info.plugin))
                .collect(),
        }
    }

    /// Plugin name for a SPIFFE ID, or the fixed sentinel when the feed
    /// has no matching entry.
    pub fn plugin_for(&self, spiffe_id: &str) -> &str {
        self.by_spiffe_id
            .get(spiffe_id)
            .map(String::as_str)
            .unwrap_or(NO_PLUGIN_CONFIGURED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_lookup() {
        let index = AttestationIndex::from_infos(vec![AttestationInfo {
            spiffeid: "spiffe://example.org/agent1".to_string(),
            plugin: "k8s_sat".to_string(),
        }]);
        assert_eq!(index.plugin_for("spiffe://example.org/agent1"), "k8s_sat");
    }

    #[test]
    fn test_missing_entry_yields_sentinel() {
        let index = AttestationIndex::default();
        assert_eq!(
            index.plugin_for("spiffe://example.org/unknown"),
            NO_PLUGIN_CONFIGURED
        );
    }
}
