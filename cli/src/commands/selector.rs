// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use aegis_console_core::application::SelectorService;
use aegis_console_core::AttestationInfo;

use crate::Console;

#[derive(Subcommand)]
pub enum SelectorCommand {
    /// List workload-attestor selector entries
    List,

    /// Register a selector entry for an agent
    Register {
        /// SPIFFE ID of the agent
        #[arg(long, value_name = "SPIFFE_ID")]
        spiffe_id: String,

        /// Workload-attestor plugin name
        #[arg(long, value_name = "PLUGIN")]
        plugin: String,
    },
}

pub async fn handle_command(command: SelectorCommand, console: &Console) -> Result<()> {
    let service = SelectorService::new(console.transport.clone(), console.config.clone());

    match command {
        SelectorCommand::List => {
            let infos = service.list(&console.scope).await?;

            if infos.is_empty() {
                println!("{}", "No selector entries found".yellow());
                return Ok(());
            }

            println!("{:<48} {}", "SPIFFE ID", "PLUGIN");
            for info in infos {
                println!("{:<48} {}", info.spiffeid.bold(), info.plugin);
            }
            Ok(())
        }
        SelectorCommand::Register { spiffe_id, plugin } => {
            let info = AttestationInfo {
                spiffeid: spiffe_id,
                plugin,
            };
            service.register(&console.scope, &info).await?;
            println!(
                "{}",
                format!("✓ Selector registered for {}", info.spiffeid).green()
            );
            Ok(())
        }
    }
}
