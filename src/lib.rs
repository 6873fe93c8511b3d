//! tfxref - Terraform cross-state reference finder
//!
//! Extracts identifying attribute values (IDs, ARNs, ...) from a source state and
//! reports which resources of other states reference them.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod output;
pub mod terraform;

mod error;

pub use analysis::{DestinationResource, SourceResource, cross_reference, extract_from_state};
pub use config::{ConfigError, MatcherRules};
pub use error::TfxrefError;
pub use output::OutputFormat;
pub use terraform::{FileStateLoader, State, StateError, StateLoader};

use cli::Cli;

/// Runs a full analysis as configured by `cli` and returns the rendered output.
pub fn run(cli: &Cli) -> Result<String, TfxrefError> {
    let rules = MatcherRules::load(&cli.config)?;

    let destination_states: Vec<String> =
        terraform::list_destination_states(&cli.source_state, &cli.destination_states)
            .into_iter()
            .map(|path| path.display().to_string())
            .collect();

    let source = State::from_file(&cli.source_state)?;
    let sources = extract_from_state(&source, &rules);

    tracing::info!(
        sources = sources.len(),
        destination_states = destination_states.len(),
        "analyzing destination states"
    );

    let sources = cross_reference(&FileStateLoader, &destination_states, sources, &rules);

    let referenced = sources.iter().filter(|s| s.has_destinations()).count();
    tracing::info!(referenced, "analysis complete");

    Ok(output::render(&sources, cli.format)?)
}
