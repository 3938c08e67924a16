//! Completions command handler

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};
use std::io;

/// Generate a shell completion script on stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle<C: CommandFactory>(shell: Option<CompletionShell>) -> Result<()> {
    match shell {
        Some(shell) => {
            let mut cmd = C::command();
            generate(shell, &mut cmd, "termprobe", &mut io::stdout());
            Ok(())
        }
        None => {
            eprintln!("Usage: termprobe completions --shell <bash|zsh|fish|powershell>");
            std::process::exit(1);
        }
    }
}
