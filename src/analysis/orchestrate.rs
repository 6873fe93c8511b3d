use crate::config::MatcherRules;
use crate::terraform::StateLoader;

use super::{SourceResource, scan_for_references};

/// Searches every destination state for references to each source value.
///
/// Destinations found in each state are appended to the matching source, so a
/// source ends up with the union over all states. States that fail to load are
/// logged and skipped.
pub fn cross_reference<L>(
    loader: &L,
    destination_states: &[String],
    mut sources: Vec<SourceResource>,
    rules: &MatcherRules,
) -> Vec<SourceResource>
where
    L: StateLoader + ?Sized,
{
    for identifier in destination_states {
        let state = match loader.load(identifier) {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(state = %identifier, error = %err, "skipping destination state");
                continue;
            }
        };

        let modules = state.root_module().modules();
        for source in &mut sources {
            for module in &modules {
                let found = scan_for_references(module, source, rules, identifier);
                source.destinations.extend(found);
            }
        }

        tracing::debug!(state = %identifier, "destination state analyzed");
    }

    sources
}
