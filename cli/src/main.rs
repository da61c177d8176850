// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! # AEGIS Fleet Console CLI
//!
//! The `aegis-console` binary is the operator frontend for a fleet of
//! identity-issuance servers.
//!
//! ## Modes
//!
//! - **Local mode** (default): commands target the single server behind
//!   `--endpoint`
//! - **Manager mode** (`--manager --server <name>`): commands target a
//!   named remote server registered with the manager behind `--endpoint`
//!
//! ## Commands
//!
//! - `aegis-console agent list|delete|ban` - Agent operations
//! - `aegis-console cluster list` / `entry list` / `server info`
//! - `aegis-console selector list|register` - Workload-attestor metadata

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use aegis_console_core::infrastructure::HttpTransport;
use aegis_console_core::{ConsoleConfig, ServerScope};

mod commands;

use commands::{AgentCommand, ClusterCommand, EntryCommand, SelectorCommand, ServerCommand};

/// AEGIS Fleet Console - Manage agents across identity-issuance servers
#[derive(Parser)]
#[command(name = "aegis-console")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Base URL of the server (or manager) API
    #[arg(
        long,
        global = true,
        env = "CONSOLE_ENDPOINT",
        default_value = "http://localhost:10000"
    )]
    endpoint: String,

    /// Enable manager mode (multiple named remote servers)
    #[arg(long, global = true, env = "CONSOLE_MANAGER_MODE")]
    manager: bool,

    /// Named remote server to target (manager mode only)
    #[arg(long, global = true, env = "CONSOLE_SERVER", value_name = "NAME")]
    server: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "CONSOLE_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Agent operations
    #[command(name = "agent")]
    Agent {
        #[command(subcommand)]
        command: AgentCommand,
    },

    /// Cluster inventory
    #[command(name = "cluster")]
    Cluster {
        #[command(subcommand)]
        command: ClusterCommand,
    },

    /// Registration entry inventory
    #[command(name = "entry")]
    Entry {
        #[command(subcommand)]
        command: EntryCommand,
    },

    /// Server details
    #[command(name = "server")]
    Server {
        #[command(subcommand)]
        command: ServerCommand,
    },

    /// Workload-attestor selector metadata
    #[command(name = "selector")]
    Selector {
        #[command(subcommand)]
        command: SelectorCommand,
    },
}

/// Shared handles built once from the global flags.
pub struct Console {
    pub transport: Arc<HttpTransport>,
    pub config: ConsoleConfig,
    pub scope: ServerScope,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_logging(&cli.log_level)?;

    let config = ConsoleConfig::new(cli.manager);
    let scope = ServerScope::select(&config, cli.server.as_deref());
    debug!(endpoint = %cli.endpoint, manager = config.manager_mode, ?scope, "console configured");
    let console = Console {
        transport: Arc::new(HttpTransport::new(cli.endpoint)),
        config,
        scope,
    };

    match cli.command {
        Commands::Agent { command } => commands::agent::handle_command(command, &console).await,
        Commands::Cluster { command } => commands::cluster::handle_command(command, &console).await,
        Commands::Entry { command } => commands::entry::handle_command(command, &console).await,
        Commands::Server { command } => commands::server::handle_command(command, &console).await,
        Commands::Selector { command } => {
            commands::selector::handle_command(command, &console).await
        }
    }
}

/// Initialize tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    Ok(())
}
