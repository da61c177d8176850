// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use aegis_console_core::application::InventoryService;

use crate::Console;

#[derive(Subcommand)]
pub enum EntryCommand {
    /// List registration entries
    List,
}

pub async fn handle_command(command: EntryCommand, console: &Console) -> Result<()> {
    let service = InventoryService::new(console.transport.clone(), console.config.clone());

    match command {
        EntryCommand::List => {
            let entries = service.list_entries(&console.scope).await?;

            if entries.is_empty() {
                println!("{}", "No registration entries found".yellow());
                return Ok(());
            }

            println!("{} entries found:", entries.len());
            println!("{:<38} {}", "ID", "DETAILS");
            for entry in entries {
                println!(
                    "{:<38} {}",
                    entry.id.bold(),
                    serde_json::Value::Object(entry.attributes)
                );
            }
            Ok(())
        }
    }
}
