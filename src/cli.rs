use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// dddc - compile YAML aggregate models into a resolved domain model
#[derive(Parser, Debug)]
#[command(name = "dddc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Compiler conventions file (defaults to ./dddc.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile a model document and print the renderer context
    Compile {
        /// Path to the YAML model document
        file: PathBuf,

        /// Base package of the generated sources
        #[arg(short, long)]
        package: String,

        /// Module name of the generated sources
        #[arg(short, long)]
        module: String,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Validate a model document and report warnings
    Check {
        /// Path to the YAML model document
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}
