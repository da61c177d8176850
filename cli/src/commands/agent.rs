// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use aegis_console_core::application::{prepare_rows, reconcile, AgentService, SelectorService};
use aegis_console_core::{
    AgentRecord, AttestationIndex, BulkKind, OperationSummary, SelectedRow,
};

use crate::Console;

#[derive(Subcommand)]
pub enum AgentCommand {
    /// List agents with their workload-attestor plugin
    List,

    /// Delete the selected agents
    Delete {
        /// SPIFFE IDs of the agents to delete
        #[arg(value_name = "SPIFFE_ID", required = true)]
        spiffe_ids: Vec<String>,
    },

    /// Ban the selected agents
    Ban {
        /// SPIFFE IDs of the agents to ban
        #[arg(value_name = "SPIFFE_ID", required = true)]
        spiffe_ids: Vec<String>,
    },
}

pub async fn handle_command(command: AgentCommand, console: &Console) -> Result<()> {
    let service = AgentService::new(console.transport.clone(), console.config.clone());

    match command {
        AgentCommand::List => list_agents(service, console).await,
        AgentCommand::Delete { spiffe_ids } => {
            bulk_operation(BulkKind::Delete, spiffe_ids, service, console).await
        }
        AgentCommand::Ban { spiffe_ids } => {
            bulk_operation(BulkKind::Ban, spiffe_ids, service, console).await
        }
    }
}

async fn list_agents(service: AgentService, console: &Console) -> Result<()> {
    let agents = service.list(&console.scope).await?;

    if agents.is_empty() {
        println!("{}", "No agents found".yellow());
        return Ok(());
    }

    // Attestation metadata is advisory; a stale or unavailable feed must
    // not block the agent list.
    let selectors = SelectorService::new(console.transport.clone(), console.config.clone());
    let attestation = match selectors.index(&console.scope).await {
        Ok(index) => index,
        Err(e) => {
            eprintln!("{}", format!("⚠ selector feed unavailable: {}", e).yellow());
            AttestationIndex::default()
        }
    };

    println!("{} agents found:", agents.len());
    println!("{:<4} {:<24} {:<48} {}", "#NO", "TRUST DOMAIN", "SPIFFE ID", "PLUGIN");

    for row in prepare_rows(&agents, &attestation) {
        println!(
            "{:<4} {:<24} {:<48} {}",
            row.number,
            row.trust_domain,
            row.spiffe_id.bold(),
            row.plugin
        );
    }

    Ok(())
}

async fn bulk_operation(
    kind: BulkKind,
    spiffe_ids: Vec<String>,
    service: AgentService,
    console: &Console,
) -> Result<()> {
    let agents = service.list(&console.scope).await?;
    let (selection, missing) = select_rows(&agents, &spiffe_ids);

    for spiffe_id in &missing {
        println!("{}", format!("⚠ No agent with SPIFFE ID {}", spiffe_id).yellow());
    }
    if selection.is_empty() {
        anyhow::bail!("no matching agents to {}", kind.verb());
    }

    let outcomes = service.execute(kind, &selection, &console.scope).await?;
    let summary = OperationSummary::from_outcomes(kind, &outcomes);
    let remaining = reconcile(&agents, &outcomes);

    if summary.succeeded {
        println!("{}", format!("✓ {}", summary.message).green());
    } else {
        println!("{}", summary.message.red());
    }
    println!("{} agent(s) remaining", remaining.len());

    if outcomes.iter().all(|outcome| !outcome.succeeded) {
        anyhow::bail!("every row failed to {}", kind.verb());
    }
    Ok(())
}

/// Resolve the operator's requested SPIFFE IDs against the fetched list,
/// the way a table selection resolves to rendered rows. Returns the
/// selected rows plus the IDs that matched nothing.
fn select_rows(agents: &[AgentRecord], requested: &[String]) -> (Vec<SelectedRow>, Vec<String>) {
    let mut selection = Vec::new();
    let mut missing = Vec::new();

    for spiffe_id in requested {
        match agents.iter().find(|agent| &agent.id.spiffe_id() == spiffe_id) {
            Some(agent) => selection.push(SelectedRow::new(
                agent.id.trust_domain.clone(),
                agent.id.spiffe_id(),
            )),
            None => missing.push(spiffe_id.clone()),
        }
    }

    (selection, missing)
}
