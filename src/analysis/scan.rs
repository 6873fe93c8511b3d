use crate::config::MatcherRules;
use crate::terraform::{ResourceMode, StateModule};

use super::{DestinationResource, SourceResource, tree};

/// Finds the resources of `module` that reference `source.value`.
///
/// Identifying keys of managed resources are skipped so a resource never
/// matches its own identity. Data resources are scanned on every key. Each
/// attribute key yields at most one match.
pub fn scan_for_references(
    module: &StateModule,
    source: &SourceResource,
    rules: &MatcherRules,
    state: &str,
) -> Vec<DestinationResource> {
    let mut matches = Vec::new();

    for resource in &module.resources {
        let banned: &[String] = match resource.mode {
            ResourceMode::Managed => rules.resolve(&resource.type_, &resource.provider_name),
            ResourceMode::Data => &[],
        };

        for (key, value) in &resource.attributes {
            if banned.iter().any(|k| k == key) {
                continue;
            }

            let Some(path) = tree::search(value, &source.value) else {
                continue;
            };
            let key = if path.is_empty() {
                key.clone()
            } else {
                format!("{key}.{path}")
            };

            tracing::debug!(
                source = %source.address,
                destination = %resource.address,
                key = %key,
                state,
                "reference found"
            );

            matches.push(DestinationResource {
                provider: resource.provider_name.clone(),
                address: resource.address.clone(),
                state: state.to_string(),
                mode: resource.mode,
                key,
            });
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terraform::State;
    use std::path::Path;

    const AWS: &str = "registry.terraform.io/hashicorp/aws";
    const SG_ID: &str = "sg-00000000000000000";

    fn source(key: &str, value: &str) -> SourceResource {
        SourceResource {
            key: key.to_string(),
            value: value.to_string(),
            provider: AWS.to_string(),
            address: "module.sg.aws_security_group.sg".to_string(),
            destinations: Vec::new(),
        }
    }

    fn module(resources: &str) -> StateModule {
        let json = format!(r#"{{"values": {{"root_module": {{"resources": {resources}}}}}}}"#);
        State::from_json(Path::new("dest.json"), &json)
            .unwrap()
            .values
            .root_module
    }

    fn id_rules() -> MatcherRules {
        MatcherRules::from_yaml("defaultKeyMatchers: [id]").unwrap()
    }

    #[test]
    fn test_data_resource_matches_on_identifying_key() {
        let module = module(
            r#"[{"address": "module.an_awesome_module.data.aws_security_group.sg", "mode": "data",
                 "type": "aws_security_group", "provider_name": "registry.terraform.io/hashicorp/aws",
                 "values": {"id": "sg-00000000000000000"}}]"#,
        );
        let found = scan_for_references(&module, &source("id", SG_ID), &id_rules(), "some_state.json");

        assert_eq!(
            found,
            vec![DestinationResource {
                provider: AWS.to_string(),
                address: "module.an_awesome_module.data.aws_security_group.sg".to_string(),
                state: "some_state.json".to_string(),
                mode: ResourceMode::Data,
                key: "id".to_string(),
            }]
        );
    }

    #[test]
    fn test_managed_resource_identifying_key_is_banned() {
        let module = module(
            r#"[{"address": "aws_security_group.copy", "mode": "managed",
                 "type": "aws_security_group", "provider_name": "registry.terraform.io/hashicorp/aws",
                 "values": {"id": "sg-00000000000000000"}}]"#,
        );
        let found = scan_for_references(&module, &source("id", SG_ID), &id_rules(), "s.json");
        assert!(found.is_empty());
    }

    #[test]
    fn test_managed_resource_matches_on_other_keys() {
        let module = module(
            r#"[{"address": "aws_security_group_rule.https", "mode": "managed",
                 "type": "aws_security_group_rule", "provider_name": "registry.terraform.io/hashicorp/aws",
                 "values": {"id": "sgrule-1", "security_group_id": "sg-00000000000000000"}}]"#,
        );
        let found = scan_for_references(&module, &source("id", SG_ID), &id_rules(), "s.json");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].key, "security_group_id");
        assert_eq!(found[0].mode, ResourceMode::Managed);
    }

    #[test]
    fn test_list_and_nested_map_paths() {
        let module = module(
            r#"[{"address": "aws_instance.web", "mode": "managed",
                 "type": "aws_instance", "provider_name": "registry.terraform.io/hashicorp/aws",
                 "values": {
                    "vpc_security_group_ids": ["sg-1", "sg-00000000000000000"],
                    "network_interface": {"primary": {"security_group": "sg-00000000000000000"}}
                 }}]"#,
        );
        let found = scan_for_references(&module, &source("id", SG_ID), &id_rules(), "s.json");
        let keys: Vec<&str> = found.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "network_interface.primary.security_group",
                "vpc_security_group_ids"
            ]
        );
    }

    #[test]
    fn test_one_match_per_key() {
        let module = module(
            r#"[{"address": "aws_instance.web", "mode": "managed",
                 "type": "aws_instance", "provider_name": "registry.terraform.io/hashicorp/aws",
                 "values": {"tags": {"a": "sg-00000000000000000", "b": "sg-00000000000000000"}}}]"#,
        );
        let found = scan_for_references(&module, &source("id", SG_ID), &id_rules(), "s.json");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].key, "tags.a");
    }

    #[test]
    fn test_ban_follows_resolved_rules_per_resource() {
        let rules = MatcherRules::from_yaml(
            r#"
defaultKeyMatchers: [id]
typeMatchers:
  - names: [aws_security_group_rule]
    providerMatcher:
      names: [registry.terraform.io/hashicorp/aws]
      keyMatchers: [security_group_id]
"#,
        )
        .unwrap();
        let module = module(
            r#"[{"address": "aws_security_group_rule.https", "mode": "managed",
                 "type": "aws_security_group_rule", "provider_name": "registry.terraform.io/hashicorp/aws",
                 "values": {"id": "sg-00000000000000000", "security_group_id": "sg-00000000000000000"}}]"#,
        );
        let found = scan_for_references(&module, &source("id", SG_ID), &rules, "s.json");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].key, "id");
    }

    #[test]
    fn test_partial_values_do_not_match() {
        let module = module(
            r#"[{"address": "aws_instance.web", "mode": "managed",
                 "type": "aws_instance", "provider_name": "registry.terraform.io/hashicorp/aws",
                 "values": {"description": "uses sg-00000000000000000", "count": 0}}]"#,
        );
        let found = scan_for_references(&module, &source("id", SG_ID), &id_rules(), "s.json");
        assert!(found.is_empty());
    }
}
