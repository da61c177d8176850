// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Inventory Service
//!
//! Read-only fetchers for the rest of a server's inventory: clusters,
//! registration entries, and the server's own info block. Same contract
//! as the agent list fetch — one request, normalize, no retry, caller
//! owns the refresh cadence.

use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::domain::cluster::ClusterRecord;
use crate::domain::entry::EntryRecord;
use crate::domain::error::ConsoleError;
use crate::domain::scope::{ConsoleConfig, ServerScope};
use crate::domain::server::ServerInfo;
use crate::domain::transport::Transport;
use crate::infrastructure::endpoints::{resolve, Operation};

#[derive(Deserialize)]
struct ClusterListResponse {
    clusters: Option<Vec<ClusterRecord>>,
}

#[derive(Deserialize)]
struct EntryListResponse {
    entries: Option<Vec<EntryRecord>>,
}

pub struct InventoryService {
    transport: Arc<dyn Transport>,
    config: ConsoleConfig,
}

impl InventoryService {
    pub fn new(transport: Arc<dyn Transport>, config: ConsoleConfig) -> Self {
        Self { transport, config }
    }

    async fn fetch(&self, op: Operation, scope: &ServerScope) -> Result<String, ConsoleError> {
        let path = resolve(op, scope, &self.config)?;
        let response = self
            .transport
            .request(op.method(), &path, None)
            .await
            .map_err(|e| ConsoleError::Fetch(e.to_string()))?;

        if !response.is_success() {
            return Err(ConsoleError::Fetch(format!(
                "HTTP {}: {}",
                response.status, response.body
            )));
        }
        Ok(response.body)
    }

    pub async fn list_clusters(
        &self,
        scope: &ServerScope,
    ) -> Result<Vec<ClusterRecord>, ConsoleError> {
        let body = self.fetch(Operation::ListClusters, scope).await?;
        let parsed: ClusterListResponse = serde_json::from_str(&body)
            .map_err(|e| ConsoleError::MalformedResponse(e.to_string()))?;
        let clusters = parsed.clusters.unwrap_or_default();
        debug!(count = clusters.len(), "fetched cluster list");
        Ok(clusters)
    }

    pub async fn list_entries(&self, scope: &ServerScope) -> Result<Vec<EntryRecord>, ConsoleError> {
        let body = self.fetch(Operation::ListEntries, scope).await?;
        let parsed: EntryListResponse = serde_json::from_str(&body)
            .map_err(|e| ConsoleError::MalformedResponse(e.to_string()))?;
        let entries = parsed.entries.unwrap_or_default();
        debug!(count = entries.len(), "fetched entry list");
        Ok(entries)
    }

    pub async fn server_info(&self, scope: &ServerScope) -> Result<ServerInfo, ConsoleError> {
        let body = self.fetch(Operation::ServerInfo, scope).await?;
        serde_json::from_str(&body).map_err(|e| ConsoleError::MalformedResponse(e.to_string()))
    }
}
