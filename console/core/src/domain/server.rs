// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

use serde::{Deserialize, Serialize};

/// Identity-issuance server details as reported by the server itself.
/// Plugin layout varies by deployment, so it is carried as loose JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServerInfo {
    #[serde(default)]
    pub plugins: serde_json::Map<String, serde_json::Value>,
    #[serde(default, rename = "trustDomain")]
    pub trust_domain: Option<String>,
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info_tolerates_missing_sections() {
        let info: ServerInfo = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(info.plugins.is_empty());
        assert!(info.trust_domain.is_none());
    }

    #[test]
    fn test_server_info_parses_plugins() {
        let raw = serde_json::json!({
            "plugins": { "DataStore": ["sql"] },
            "trustDomain": "example.org"
        });
        let info: ServerInfo = serde_json::from_value(raw).unwrap();
        assert_eq!(info.trust_domain.as_deref(), Some("example.org"));
        assert!(info.plugins.contains_key("DataStore"));
    }
}
