//! dddc CLI - YAML aggregate model compiler
//!
//! Usage: dddc <COMMAND>
//!
//! Commands:
//!   compile  Compile a model document and print the renderer context
//!   check    Validate a model document and report warnings

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

/// Environment variable overriding the `-v` log level
const LOG_ENV: &str = "DDDC_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Compile {
            file,
            package,
            module,
            format,
        } => commands::compile::cmd_compile(&file, &package, &module, format, config),
        Commands::Check { file } => commands::check::cmd_check(&file, config),
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("dddc={}", level_for(verbose))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Warnings are already printed by the commands, so the default level is `error`.
fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => "warn",
        2 => "debug",
        _ => "trace",
    }
}
