// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use aegis_console_core::application::InventoryService;

use crate::Console;

#[derive(Subcommand)]
pub enum ClusterCommand {
    /// List clusters registered with the server
    List,
}

pub async fn handle_command(command: ClusterCommand, console: &Console) -> Result<()> {
    let service = InventoryService::new(console.transport.clone(), console.config.clone());

    match command {
        ClusterCommand::List => {
            let clusters = service.list_clusters(&console.scope).await?;

            if clusters.is_empty() {
                println!("{}", "No clusters found".yellow());
                return Ok(());
            }

            println!("{} clusters found:", clusters.len());
            println!("{:<24} {}", "NAME", "DETAILS");
            for cluster in clusters {
                println!(
                    "{:<24} {}",
                    cluster.name.bold(),
                    serde_json::Value::Object(cluster.attributes)
                );
            }
            Ok(())
        }
    }
}
