use crate::config::MatcherRules;
use crate::terraform::{ResourceMode, State, StateModule};

use super::SourceResource;

/// Extracts identifying string values from the managed resources of `module`.
///
/// Child modules are not visited; see [`extract_from_state`].
pub fn extract_sources(module: &StateModule, rules: &MatcherRules) -> Vec<SourceResource> {
    let mut sources = Vec::new();

    for resource in &module.resources {
        if resource.mode != ResourceMode::Managed {
            continue;
        }

        let keys = rules.resolve(&resource.type_, &resource.provider_name);
        for (key, value) in &resource.attributes {
            let Some(value) = value.as_str() else {
                continue;
            };
            if !keys.iter().any(|k| k == key) {
                continue;
            }

            sources.push(SourceResource {
                key: key.clone(),
                value: value.to_string(),
                provider: resource.provider_name.clone(),
                address: resource.address.clone(),
                destinations: Vec::new(),
            });
        }
    }

    sources
}

/// Extracts identifying values from every module of `state`.
pub fn extract_from_state(state: &State, rules: &MatcherRules) -> Vec<SourceResource> {
    let sources: Vec<SourceResource> = state
        .root_module()
        .modules()
        .into_iter()
        .flat_map(|module| extract_sources(module, rules))
        .collect();

    tracing::debug!(count = sources.len(), "source values extracted");

    sources
}
