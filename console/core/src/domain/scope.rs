// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Server Scope
//!
//! Whether a request targets the single local server or a named remote
//! server registered with the manager. Manager mode itself is read-only
//! configuration, passed in explicitly so endpoint resolution stays a
//! pure function of its inputs.

/// Process-wide console configuration, read-only at call time.
#[derive(Debug, Clone, Default)]
pub struct ConsoleConfig {
    /// When true, multiple named remote servers are addressable by name.
    pub manager_mode: bool,
}

impl ConsoleConfig {
    pub fn new(manager_mode: bool) -> Self {
        Self { manager_mode }
    }
}

/// Target of one console operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerScope {
    Local,
    Named(String),
}

impl ServerScope {
    /// Build a scope from the operator's current server selection.
    ///
    /// `Named` requires manager mode and a non-empty server name;
    /// otherwise the selection collapses to `Local`. An explicit `Named`
    /// scope reaching the resolver with manager mode off is still a
    /// configuration error — the collapse only applies to selections.
    pub fn select(config: &ConsoleConfig, server: Option<&str>) -> Self {
        match server {
            Some(name) if config.manager_mode && !name.is_empty() => {
                ServerScope::Named(name.to_string())
            }
            _ => ServerScope::Local,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_with_manager_mode_and_name() {
        let config = ConsoleConfig::new(true);
        let scope = ServerScope::select(&config, Some("east-1"));
        assert_eq!(scope, ServerScope::Named("east-1".to_string()));
    }

    #[test]
    fn test_selection_collapses_without_manager_mode() {
        let config = ConsoleConfig::new(false);
        assert_eq!(ServerScope::select(&config, Some("east-1")), ServerScope::Local);
    }

    #[test]
    fn test_selection_collapses_without_name() {
        let config = ConsoleConfig::new(true);
        assert_eq!(ServerScope::select(&config, None), ServerScope::Local);
        assert_eq!(ServerScope::select(&config, Some("")), ServerScope::Local);
    }
}
