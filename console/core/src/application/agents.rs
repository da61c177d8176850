// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Agent Service
//!
//! List fetching and bulk delete/ban against a resolved server scope.
//! Bulk operations issue one request per selected row with every request
//! in flight simultaneously; each row's outcome is independent and a
//! single unreachable target never rolls back the rest of the batch.

use std::sync::Arc;

use futures::future::join_all;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::agent::{AgentRecord, SelectedRow};
use crate::domain::error::ConsoleError;
use crate::domain::outcome::{BulkKind, OperationOutcome};
use crate::domain::scope::{ConsoleConfig, ServerScope};
use crate::domain::transport::Transport;
use crate::infrastructure::endpoints::{resolve, Operation};

#[derive(Deserialize)]
struct AgentListResponse {
    // Servers answer "No Content" with a null or absent array.
    agents: Option<Vec<AgentRecord>>,
}

pub struct AgentService {
    transport: Arc<dyn Transport>,
    config: ConsoleConfig,
}

impl AgentService {
    pub fn new(transport: Arc<dyn Transport>, config: ConsoleConfig) -> Self {
        Self { transport, config }
    }

    /// Fetch the current agent list for a scope.
    ///
    /// The result replaces the canonical list wholesale; this call never
    /// mutates state itself and never retries — refresh cadence belongs
    /// to the caller. A record missing its identity fields fails the
    /// whole fetch.
    pub async fn list(&self, scope: &ServerScope) -> Result<Vec<AgentRecord>, ConsoleError> {
        let path = resolve(Operation::ListAgents, scope, &self.config)?;
        let response = self
            .transport
            .request(Operation::ListAgents.method(), &path, None)
            .await
            .map_err(|e| ConsoleError::Fetch(e.to_string()))?;

        if !response.is_success() {
            return Err(ConsoleError::Fetch(format!(
                "HTTP {}: {}",
                response.status, response.body
            )));
        }

        let parsed: AgentListResponse = serde_json::from_str(&response.body)
            .map_err(|e| ConsoleError::MalformedResponse(e.to_string()))?;
        let agents = parsed.agents.unwrap_or_default();
        debug!(count = agents.len(), "fetched agent list");
        Ok(agents)
    }

    /// Apply a delete or ban to every selected row.
    ///
    /// Returns one outcome per row, in selection order, only after every
    /// request has resolved. Scope resolution failure aborts the whole
    /// batch before any request is issued; everything after that is
    /// per-row.
    pub async fn execute(
        &self,
        kind: BulkKind,
        selection: &[SelectedRow],
        scope: &ServerScope,
    ) -> Result<Vec<OperationOutcome>, ConsoleError> {
        let op = match kind {
            BulkKind::Delete => Operation::DeleteAgent,
            BulkKind::Ban => Operation::BanAgent,
        };
        let path = resolve(op, scope, &self.config)?;

        let requests = selection.iter().map(|row| self.submit_row(op, &path, row));
        let outcomes = join_all(requests).await;

        let failed = outcomes.iter().filter(|o| !o.succeeded).count();
        debug!(
            kind = kind.verb(),
            total = outcomes.len(),
            failed,
            "bulk operation completed"
        );
        Ok(outcomes)
    }

    async fn submit_row(&self, op: Operation, path: &str, row: &SelectedRow) -> OperationOutcome {
        let id = match row.reconstruct_id() {
            Ok(id) => id,
            Err(e) => {
                warn!(spiffe_id = %row.spiffe_id, "row identifier reconstruction failed");
                return OperationOutcome::failure(row.spiffe_id.clone(), None, e.to_string());
            }
        };

        let body = serde_json::json!({
            "id": { "path": id.path, "trust_domain": id.trust_domain }
        });

        match self.transport.request(op.method(), path, Some(body)).await {
            Ok(response) if response.is_success() => OperationOutcome::success(id),
            Ok(response) => {
                let error = ConsoleError::Operation {
                    spiffe_id: row.spiffe_id.clone(),
                    detail: format!("HTTP {}: {}", response.status, response.body),
                };
                OperationOutcome::failure(row.spiffe_id.clone(), Some(id), error.to_string())
            }
            Err(e) => {
                let error = ConsoleError::Operation {
                    spiffe_id: row.spiffe_id.clone(),
                    detail: e.to_string(),
                };
                OperationOutcome::failure(row.spiffe_id.clone(), Some(id), error.to_string())
            }
        }
    }
}
