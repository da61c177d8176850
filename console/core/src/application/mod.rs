// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Application Layer
//!
//! Console services: list fetching, bulk delete/ban with per-row
//! outcomes, reconciliation of outcomes into the canonical list, and
//! attestation enrichment for display.

pub mod agents;
pub mod display;
pub mod inventory;
pub mod reconcile;
pub mod selectors;

#[cfg(test)]
pub(crate) mod test_support;

pub use agents::AgentService;
pub use display::{enrich, prepare_rows, AgentRow};
pub use inventory::InventoryService;
pub use reconcile::{reconcile, CanonicalList};
pub use selectors::SelectorService;
