// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Selector Service
//!
//! Fetches the workload-attestor metadata feed and registers new
//! selector entries. The feed has its own lifecycle, independent of the
//! agent list; the caller rebuilds the attestation index from it after
//! each fetch.

use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::domain::attestation::{AttestationIndex, AttestationInfo};
use crate::domain::error::ConsoleError;
use crate::domain::scope::{ConsoleConfig, ServerScope};
use crate::domain::transport::Transport;
use crate::infrastructure::endpoints::{resolve, Operation};

#[derive(Deserialize)]
struct SelectorListResponse {
    agents: Option<Vec<AttestationInfo>>,
}

pub struct SelectorService {
    transport: Arc<dyn Transport>,
    config: ConsoleConfig,
}

impl SelectorService {
    pub fn new(transport: Arc<dyn Transport>, config: ConsoleConfig) -> Self {
        Self { transport, config }
    }

    /// Fetch the current selector entries for a scope.
    pub async fn list(&self, scope: &ServerScope) -> Result<Vec<AttestationInfo>, ConsoleError> {
        let path = resolve(Operation::ListSelectors, scope, &self.config)?;
        let response = self
            .transport
            .request(Operation::ListSelectors.method(), &path, None)
            .await
            .map_err(|e| ConsoleError::Fetch(e.to_string()))?;

        if !response.is_success() {
            return Err(ConsoleError::Fetch(format!(
                "HTTP {}: {}",
                response.status, response.body
            )));
        }

        let parsed: SelectorListResponse = serde_json::from_str(&response.body)
            .map_err(|e| ConsoleError::MalformedResponse(e.to_string()))?;
        let infos = parsed.agents.unwrap_or_default();
        debug!(count = infos.len(), "fetched selector entries");
        Ok(infos)
    }

    /// Fetch and build the lookup index in one step.
    pub async fn index(&self, scope: &ServerScope) -> Result<AttestationIndex, ConsoleError> {
        Ok(AttestationIndex::from_infos(self.list(scope).await?))
    }

    /// Register a selector entry so future enrichment finds its plugin.
    /// The caller refreshes the feed afterwards.
    pub async fn register(
        &self,
        scope: &ServerScope,
        info: &AttestationInfo,
    ) -> Result<(), ConsoleError> {
        let path = resolve(Operation::RegisterSelectors, scope, &self.config)?;
        let body = serde_json::json!({
            "spiffeid": info.spiffeid,
            "plugin": info.plugin,
        });

        let response = self
            .transport
            .request(Operation::RegisterSelectors.method(), &path, Some(body))
            .await
            .map_err(|e| ConsoleError::Operation {
                spiffe_id: info.spiffeid.clone(),
                detail: e.to_string(),
            })?;

        if !response.is_success() {
            return Err(ConsoleError::Operation {
                spiffe_id: info.spiffeid.clone(),
                detail: format!("HTTP {}: {}", response.status, response.body),
            });
        }
        Ok(())
    }
}
