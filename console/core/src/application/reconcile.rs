// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! List Reconciliation
//!
//! Merges bulk-operation outcomes back into the canonical agent list.
//! Strictly a shrink: only records whose identifier matches a succeeded
//! outcome are removed; failed or absent outcomes leave their records
//! untouched. A ban removes the agent from the visible active list the
//! same way a delete does — the server keeps the banned entity.
//!
//! Reconciliation trades a refetch round-trip for a bounded risk of
//! drift until the next full refresh.

use std::collections::HashSet;

use crate::domain::agent::{AgentId, AgentRecord};
use crate::domain::outcome::OperationOutcome;

/// Produce the new canonical list from the previous one plus a batch of
/// outcomes. Pure; keys strictly by identifier, never by arrival order.
pub fn reconcile(canonical: &[AgentRecord], outcomes: &[OperationOutcome]) -> Vec<AgentRecord> {
    let removed: HashSet<&AgentId> = outcomes
        .iter()
        .filter(|outcome| outcome.succeeded)
        .filter_map(|outcome| outcome.id.as_ref())
        .collect();

    canonical
        .iter()
        .filter(|record| !removed.contains(&record.id))
        .cloned()
        .collect()
}

/// The single authoritative in-memory agent list.
///
/// Writers are full replacement after a fetch and outcome application
/// after a bulk operation — nothing else mutates it. Each mutation is a
/// single assignment, so readers always observe a fully-formed snapshot.
#[derive(Debug, Default)]
pub struct CanonicalList {
    records: Vec<AgentRecord>,
}

impl CanonicalList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[AgentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the list wholesale with a fresh fetch result.
    pub fn replace(&mut self, records: Vec<AgentRecord>) {
        self.records = records;
    }

    /// Apply bulk-operation outcomes, removing succeeded rows only.
    pub fn apply(&mut self, outcomes: &[OperationOutcome]) {
        self.records = reconcile(&self.records, outcomes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str) -> AgentRecord {
        AgentRecord {
            id: AgentId::new("example.org", path),
            attributes: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_removes_exactly_the_succeeded_identifiers() {
        let canonical = vec![record("/agent1"), record("/agent2"), record("/agent3")];
        let outcomes = vec![
            OperationOutcome::success(AgentId::new("example.org", "/agent1")),
            OperationOutcome::failure(
                "spiffe://example.org/agent2",
                Some(AgentId::new("example.org", "/agent2")),
                "HTTP 500",
            ),
            OperationOutcome::success(AgentId::new("example.org", "/agent3")),
        ];

        let remaining = reconcile(&canonical, &outcomes);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id.path, "/agent2");
    }

    #[test]
    fn test_records_without_outcomes_are_retained() {
        let canonical = vec![record("/agent1"), record("/agent2")];
        let outcomes = vec![OperationOutcome::success(AgentId::new(
            "example.org",
            "/agent1",
        ))];

        let remaining = reconcile(&canonical, &outcomes);
        assert_eq!(remaining, vec![record("/agent2")]);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let canonical = vec![record("/agent1"), record("/agent2")];
        let outcomes = vec![OperationOutcome::success(AgentId::new(
            "example.org",
            "/agent1",
        ))];

        let once = reconcile(&canonical, &outcomes);
        let twice = reconcile(&once, &outcomes);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_never_adds_records() {
        let canonical = vec![record("/agent1")];
        // An outcome for a record that is not in the list.
        let outcomes = vec![OperationOutcome::success(AgentId::new(
            "example.org",
            "/elsewhere",
        ))];

        let remaining = reconcile(&canonical, &outcomes);
        assert_eq!(remaining, canonical);
    }

    #[test]
    fn test_outcome_order_is_irrelevant() {
        let canonical = vec![record("/agent1"), record("/agent2")];
        let mut outcomes = vec![
            OperationOutcome::success(AgentId::new("example.org", "/agent2")),
            OperationOutcome::success(AgentId::new("example.org", "/agent1")),
        ];

        let forward = reconcile(&canonical, &outcomes);
        outcomes.reverse();
        let backward = reconcile(&canonical, &outcomes);
        assert_eq!(forward, backward);
        assert!(forward.is_empty());
    }

    #[test]
    fn test_canonical_list_replace_and_apply() {
        let mut list = CanonicalList::new();
        assert!(list.is_empty());

        list.replace(vec![record("/agent1"), record("/agent2")]);
        assert_eq!(list.len(), 2);

        list.apply(&[OperationOutcome::success(AgentId::new(
            "example.org",
            "/agent2",
        ))]);
        assert_eq!(list.records(), &[record("/agent1")]);
    }
}
