// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use aegis_console_core::application::InventoryService;

use crate::Console;

#[derive(Subcommand)]
pub enum ServerCommand {
    /// Show details of the targeted server
    Info,
}

pub async fn handle_command(command: ServerCommand, console: &Console) -> Result<()> {
    let service = InventoryService::new(console.transport.clone(), console.config.clone());

    match command {
        ServerCommand::Info => {
            let info = service.server_info(&console.scope).await?;

            if let Some(trust_domain) = &info.trust_domain {
                println!("Trust domain: {}", trust_domain.bold());
            }
            if !info.plugins.is_empty() {
                println!("Plugins:");
                for (kind, names) in &info.plugins {
                    println!("  {:<20} {}", kind, names);
                }
            }
            if !info.attributes.is_empty() {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&info.attributes).unwrap_or_default()
                );
            }
            Ok(())
        }
    }
}
