// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Command implementations for the AEGIS fleet console CLI

pub mod agent;
pub mod cluster;
pub mod entry;
pub mod selector;
pub mod server;

pub use self::agent::AgentCommand;
pub use self::cluster::ClusterCommand;
pub use self::entry::EntryCommand;
pub use self::selector::SelectorCommand;
pub use self::server::ServerCommand;
