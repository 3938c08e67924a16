//! Terminal Probe (termprobe) - CLI entry point

use anyhow::Result;
use clap::Parser;

use termprobe::cli::{Cli, Commands, ConfigCommands};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Keys { idle_timeout_ms } => commands::keys::handle(idle_timeout_ms),
        Commands::Colors => commands::colors::handle(),
        Commands::Simple => commands::simple::handle(),
        Commands::Escapes { pause } => commands::escapes::handle(pause),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::show(),
            ConfigCommands::Edit => commands::config::edit(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
