// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Bulk Operation Outcomes
//!
//! Per-row results of a bulk delete or ban, consumed immediately by the
//! reconciler and summarized for the notification sink. Never persisted.

use crate::domain::agent::AgentId;

/// Kind of bulk operation applied to a selection of agent rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkKind {
    Delete,
    Ban,
}

impl BulkKind {
    pub fn verb(&self) -> &'static str {
        match self {
            BulkKind::Delete => "delete",
            BulkKind::Ban => "ban",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            BulkKind::Delete => "deleted",
            BulkKind::Ban => "banned",
        }
    }
}

/// Result of one row's delete/ban request.
///
/// `id` is present whenever the identifier could be derived from the
/// row's rendered strings; a row that failed reconstruction carries only
/// the rendered SPIFFE ID. Succeeded outcomes always carry an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationOutcome {
    /// Rendered SPIFFE ID of the row, always available for reporting.
    pub spiffe_id: String,
    /// Structured identifier, when reconstruction succeeded.
    pub id: Option<AgentId>,
    pub succeeded: bool,
    pub detail: Option<String>,
}

impl OperationOutcome {
    pub fn success(id: AgentId) -> Self {
        Self {
            spiffe_id: id.spiffe_id(),
            id: Some(id),
            succeeded: true,
            detail: None,
        }
    }

    pub fn failure(spiffe_id: impl Into<String>, id: Option<AgentId>, detail: impl Into<String>) -> Self {
        Self {
            spiffe_id: spiffe_id.into(),
            id,
            succeeded: false,
            detail: Some(detail.into()),
        }
    }
}

/// Summary of a completed bulk operation for the notification sink.
/// Presentation is external; this layer only produces the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSummary {
    pub succeeded: bool,
    pub message: String,
}

impl OperationSummary {
    /// Summarize a batch: overall success means every row succeeded, and
    /// each failed row is listed with its identifier and reason so the
    /// operator can retry manually.
    pub fn from_outcomes(kind: BulkKind, outcomes: &[OperationOutcome]) -> Self {
        let succeeded: Vec<_> = outcomes.iter().filter(|o| o.succeeded).collect();
        let failed: Vec<_> = outcomes.iter().filter(|o| !o.succeeded).collect();

        if failed.is_empty() {
            return Self {
                succeeded: true,
                message: format!("{} agent(s) {}", succeeded.len(), kind.past_tense()),
            };
        }

        let mut message = format!(
            "{} of {} agent(s) {}; failed:",
            succeeded.len(),
            outcomes.len(),
            kind.past_tense()
        );
        for outcome in &failed {
            let detail = outcome.detail.as_deref().unwrap_or("unknown error");
            message.push_str(&format!("\n  {}: {}", outcome.spiffe_id, detail));
        }
        Self {
            succeeded: false,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_all_succeeded() {
        let outcomes = vec![
            OperationOutcome::success(AgentId::new("example.org", "/agent1")),
            OperationOutcome::success(AgentId::new("example.org", "/agent2")),
        ];
        let summary = OperationSummary::from_outcomes(BulkKind::Delete, &outcomes);
        assert!(summary.succeeded);
        assert_eq!(summary.message, "2 agent(s) deleted");
    }

    #[test]
    fn test_summary_lists_failed_identifiers() {
        let outcomes = vec![
            OperationOutcome::success(AgentId::new("example.org", "/agent1")),
            OperationOutcome::failure(
                "spiffe://example.org/agent2",
                Some(AgentId::new("example.org", "/agent2")),
                "HTTP 500: datastore unavailable",
            ),
        ];
        let summary = OperationSummary::from_outcomes(BulkKind::Ban, &outcomes);
        assert!(!summary.succeeded);
        assert!(summary.message.contains("1 of 2 agent(s) banned"));
        assert!(summary.message.contains("spiffe://example.org/agent2"));
        assert!(summary.message.contains("datastore unavailable"));
    }
}
