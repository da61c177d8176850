// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Agent Records
//!
//! Canonical representation of a workload identity (agent) as tracked by
//! an identity-issuance server, plus the rendered-row shape handed back by
//! the table widget when the operator selects rows for a bulk operation.

use serde::{Deserialize, Serialize};

use crate::domain::error::ConsoleError;

/// Natural key for an agent: trust domain plus path.
///
/// Immutable once assigned to a record; no two canonical records within
/// the same server scope share an identical identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId {
    pub trust_domain: String,
    pub path: String,
}

impl AgentId {
    pub fn new(trust_domain: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            trust_domain: trust_domain.into(),
            path: path.into(),
        }
    }

    /// Derive the SPIFFE ID string for this identifier.
    ///
    /// Used only as a lookup key into attestation metadata, never stored
    /// as a primary identifier.
    pub fn spiffe_id(&self) -> String {
        format!("spiffe://{}{}", self.trust_domain, self.path)
    }
}

/// Canonical, server-agnostic representation of one agent.
///
/// The identity fields are load-bearing and typed; everything else the
/// server returned (attestation type, serial number, expiry, banned flag,
/// selectors) is carried uninterpreted in `attributes`. Deserialization
/// fails when `id.trust_domain` or `id.path` is absent — partial record
/// corruption is not tolerated. Other absent fields are simply omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: AgentId,
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

/// One selected row as rendered by the table widget.
///
/// The display layer only carries rendered strings, not the structured
/// identifier, so the identifier has to be reconstructed from them before
/// a delete or ban request can be issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedRow {
    pub trust_domain: String,
    pub spiffe_id: String,
}

impl SelectedRow {
    pub fn new(trust_domain: impl Into<String>, spiffe_id: impl Into<String>) -> Self {
        Self {
            trust_domain: trust_domain.into(),
            spiffe_id: spiffe_id.into(),
        }
    }

    /// Recover the structured identifier from the rendered strings.
    ///
    /// The path is whatever remains of the SPIFFE ID after the exact
    /// `spiffe://<trust_domain>` prefix. A prefix mismatch or an empty
    /// remainder means the rendered strings were corrupted or truncated;
    /// that fails this row only, never the whole batch.
    pub fn reconstruct_id(&self) -> Result<AgentId, ConsoleError> {
        let prefix = format!("spiffe://{}", self.trust_domain);
        let path = self.spiffe_id.strip_prefix(&prefix).ok_or_else(|| {
            ConsoleError::RowReconstruction(format!(
                "SPIFFE ID '{}' does not start with '{}'",
                self.spiffe_id, prefix
            ))
        })?;
        if path.is_empty() {
            return Err(ConsoleError::RowReconstruction(format!(
                "SPIFFE ID '{}' has no path component",
                self.spiffe_id
            )));
        }
        Ok(AgentId::new(self.trust_domain.clone(), path))
    }
}
