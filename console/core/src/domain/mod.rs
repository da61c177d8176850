// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Domain Layer
//!
//! Canonical data model and collaborator seams for the fleet console.

pub mod agent;
pub mod attestation;
pub mod cluster;
pub mod entry;
pub mod error;
pub mod outcome;
pub mod scope;
pub mod server;
pub mod transport;

pub use agent::{AgentId, AgentRecord, SelectedRow};
pub use attestation::{AttestationIndex, AttestationInfo, NO_PLUGIN_CONFIGURED};
pub use cluster::ClusterRecord;
pub use entry::EntryRecord;
pub use error::ConsoleError;
pub use outcome::{BulkKind, OperationOutcome, OperationSummary};
pub use scope::{ConsoleConfig, ServerScope};
pub use server::ServerInfo;
pub use transport::{HttpMethod, Transport, TransportError, TransportResponse};
