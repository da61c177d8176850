// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Display Enrichment
//!
//! Derives row view-models from canonical records, joining in
//! workload-attestation metadata by SPIFFE ID. Rows are derived data,
//! never authoritative; the attestation index may be stale, which is
//! tolerated because the metadata is advisory.

use crate::domain::agent::AgentRecord;
use crate::domain::attestation::AttestationIndex;

/// One row as handed to the table widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRow {
    /// 1-based position in the rendered table.
    pub number: usize,
    pub trust_domain: String,
    pub spiffe_id: String,
    /// Pretty-printed JSON of the whole record for the info column.
    pub info: String,
    pub plugin: String,
}

/// Enrich one canonical record for display. Pure and synchronous; a
/// record with no matching attestation entry gets the fixed sentinel
/// plugin value, never an absent field.
pub fn enrich(number: usize, record: &AgentRecord, attestation: &AttestationIndex) -> AgentRow {
    let spiffe_id = record.id.spiffe_id();
    let plugin = attestation.plugin_for(&spiffe_id).to_string();
    AgentRow {
        number,
        trust_domain: record.id.trust_domain.clone(),
        spiffe_id,
        info: serde_json::to_string_pretty(record).unwrap_or_default(),
        plugin,
    }
}

/// Prepare the full row set for a canonical list, numbered from 1.
pub fn prepare_rows(records: &[AgentRecord], attestation: &AttestationIndex) -> Vec<AgentRow> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| enrich(i + 1, record, attestation))
        .collect()
}
