use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

/// Find resources in Terraform states that reference identifiers of a source state.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Matcher configuration (YAML)
    #[arg(long, env = "TFXREF_CONFIG", default_value = "tfxref.yaml")]
    pub config: PathBuf,

    /// JSON state holding the source resources
    #[arg(long, env = "TFXREF_SOURCE_STATE", default_value = "states/source.json")]
    pub source_state: PathBuf,

    /// Directory searched recursively for destination JSON states
    #[arg(
        long,
        env = "TFXREF_DESTINATION_STATES",
        default_value = "states/"
    )]
    pub destination_states: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Set log level to debug
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}
