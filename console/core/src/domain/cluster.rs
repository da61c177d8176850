// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

use serde::{Deserialize, Serialize};

/// Canonical representation of one cluster registered with a server.
/// The name is the natural key; everything else (domain name, platform
/// type, member agents) stays uninterpreted in `attributes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterRecord {
    pub name: String,
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}
