// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # AEGIS Fleet Console Core
//!
//! Data-synchronization and bulk-operation layer for the AEGIS fleet
//! console: a management frontend for identity-issuance servers.
//!
//! # Architecture
//!
//! - **domain** — canonical records, scope/config, transport seam, errors
//! - **application** — list fetching, bulk delete/ban, reconciliation,
//!   attestation enrichment
//! - **infrastructure** — endpoint table and the reqwest transport adapter

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use domain::*;
