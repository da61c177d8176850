// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Endpoint Resolution
//!
//! Maps an operation plus a server scope to the concrete request
//! destination. Local mode uses fixed per-operation paths; manager mode
//! uses the manager path with the server name appended as the final path
//! segment. Pure function of its inputs plus the manager-mode flag.

use crate::domain::error::ConsoleError;
use crate::domain::scope::{ConsoleConfig, ServerScope};
use crate::domain::transport::HttpMethod;

/// Console operations with a remote destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListAgents,
    DeleteAgent,
    BanAgent,
    ListSelectors,
    RegisterSelectors,
    ListClusters,
    ListEntries,
    ServerInfo,
}

impl Operation {
    fn local_path(&self) -> &'static str {
        match self {
            Operation::ListAgents => "/api/agent/list",
            Operation::DeleteAgent => "/api/agent/delete",
            Operation::BanAgent => "/api/agent/ban",
            Operation::ListSelectors => "/api/tornjak/selectors/list",
            Operation::RegisterSelectors => "/api/tornjak/selectors/register",
            Operation::ListClusters => "/api/tornjak/clusters/list",
            Operation::ListEntries => "/api/entry/list",
            Operation::ServerInfo => "/api/tornjak/serverinfo",
        }
    }

    fn manager_path(&self) -> &'static str {
        match self {
            Operation::ListAgents => "/manager-api/agent/list",
            Operation::DeleteAgent => "/manager-api/agent/delete",
            Operation::BanAgent => "/manager-api/agent/ban",
            Operation::ListSelectors => "/manager-api/tornjak/selectors/list",
            Operation::RegisterSelectors => "/manager-api/tornjak/selectors/register",
            Operation::ListClusters => "/manager-api/tornjak/clusters/list",
            Operation::ListEntries => "/manager-api/entry/list",
            Operation::ServerInfo => "/manager-api/tornjak/serverinfo",
        }
    }

    /// HTTP method the operation is issued with. Delete is a DELETE with
    /// a JSON body; ban and selector registration are POSTs.
    pub fn method(&self) -> HttpMethod {
        match self {
            Operation::DeleteAgent => HttpMethod::Delete,
            Operation::BanAgent | Operation::RegisterSelectors => HttpMethod::Post,
            _ => HttpMethod::Get,
        }
    }
}

/// Resolve the destination path for an operation under a scope.
///
/// A `Named` scope with manager mode disabled is a configuration error,
/// never silently coerced to local.
pub fn resolve(
    op: Operation,
    scope: &ServerScope,
    config: &ConsoleConfig,
) -> Result<String, ConsoleError> {
    match scope {
        ServerScope::Local => Ok(op.local_path().to_string()),
        ServerScope::Named(name) => {
            if !config.manager_mode {
                return Err(ConsoleError::Configuration(format!(
                    "scope targets server '{}' but manager mode is disabled",
                    name
                )));
            }
            Ok(format!("{}/{}", op.manager_path(), name))
        }
    }
}
