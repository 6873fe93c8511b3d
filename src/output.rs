//! Presentation of cross-reference results.
//!
//! Sources without destinations are left out of every format.

use clap::ValueEnum;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use termtree::Tree;

use crate::analysis::SourceResource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Tree,
    Json,
    /// One log event per referenced source.
    Log,
}

#[derive(Debug, Tabled)]
struct ReferenceRow<'a> {
    #[tabled(rename = "Source")]
    source: &'a str,
    #[tabled(rename = "Key")]
    source_key: &'a str,
    #[tabled(rename = "Value")]
    value: &'a str,
    #[tabled(rename = "Referenced by")]
    destination: &'a str,
    #[tabled(rename = "Mode")]
    mode: &'static str,
    #[tabled(rename = "Attribute")]
    destination_key: &'a str,
    #[tabled(rename = "State")]
    state: &'a str,
}

/// Renders `sources` for stdout. `Log` emits tracing events and returns an
/// empty string.
pub fn render(sources: &[SourceResource], format: OutputFormat) -> Result<String, serde_json::Error> {
    let referenced: Vec<&SourceResource> = sources.iter().filter(|s| s.has_destinations()).collect();

    match format {
        OutputFormat::Table => Ok(render_table(&referenced)),
        OutputFormat::Tree => Ok(render_tree(&referenced)),
        OutputFormat::Json => serde_json::to_string_pretty(&referenced),
        OutputFormat::Log => {
            for source in &referenced {
                tracing::info!(
                    address = %source.address,
                    key = %source.key,
                    value = %source.value,
                    provider = %source.provider,
                    destinations = ?source.destinations,
                    "source referenced"
                );
            }
            Ok(String::new())
        }
    }
}

fn render_table(sources: &[&SourceResource]) -> String {
    if sources.is_empty() {
        return "No references found.".to_string();
    }

    let rows = sources.iter().flat_map(|source| {
        source.destinations.iter().map(|destination| ReferenceRow {
            source: &source.address,
            source_key: &source.key,
            value: &source.value,
            destination: &destination.address,
            mode: destination.mode.as_str(),
            destination_key: &destination.key,
            state: &destination.state,
        })
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_tree(sources: &[&SourceResource]) -> String {
    sources
        .iter()
        .map(|source| {
            let leaves = source.destinations.iter().map(|destination| {
                Tree::new(format!(
                    "{} [{}] {} ({})",
                    destination.address, destination.mode, destination.key, destination.state
                ))
            });
            Tree::new(format!("{} {} = {}", source.address, source.key, source.value))
                .with_leaves(leaves)
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::DestinationResource;
    use crate::terraform::ResourceMode;

    fn sources() -> Vec<SourceResource> {
        vec![
            SourceResource {
                key: "id".to_string(),
                value: "sg-00000000000000000".to_string(),
                provider: "registry.terraform.io/hashicorp/aws".to_string(),
                address: "module.sg.aws_security_group.sg".to_string(),
                destinations: vec![DestinationResource {
                    provider: "registry.terraform.io/hashicorp/aws".to_string(),
                    address: "module.an_awesome_module.data.aws_security_group.sg".to_string(),
                    state: "states/some_state.json".to_string(),
                    mode: ResourceMode::Data,
                    key: "id".to_string(),
                }],
            },
            SourceResource {
                key: "arn".to_string(),
                value: "arn:aws:ec2:eu-west-1:000000000000:security-group/sg-unused".to_string(),
                provider: "registry.terraform.io/hashicorp/aws".to_string(),
                address: "module.sg.aws_security_group.sg".to_string(),
                destinations: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_table_lists_each_reference() {
        let table = render(&sources(), OutputFormat::Table).unwrap();
        assert!(table.contains("Referenced by"));
        assert!(table.contains("module.an_awesome_module.data.aws_security_group.sg"));
        assert!(table.contains("data"));
        assert!(!table.contains("sg-unused"));
    }

    #[test]
    fn test_table_without_references() {
        let table = render(&sources()[1..], OutputFormat::Table).unwrap();
        assert_eq!(table, "No references found.");
    }

    #[test]
    fn test_tree_nests_destinations_under_source() {
        let tree = render(&sources(), OutputFormat::Tree).unwrap();
        let mut lines = tree.lines();
        assert_eq!(
            lines.next(),
            Some("module.sg.aws_security_group.sg id = sg-00000000000000000")
        );
        let leaf = lines.next().unwrap();
        assert!(leaf.contains("module.an_awesome_module.data.aws_security_group.sg [data] id"));
        assert!(!tree.contains("sg-unused"));
    }

    #[test]
    fn test_json_only_referenced_sources() {
        let json = render(&sources(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["key"], "id");
        assert_eq!(entries[0]["destinations"][0]["mode"], "data");
        assert_eq!(entries[0]["destinations"][0]["state"], "states/some_state.json");
    }

    #[test]
    fn test_log_format_prints_nothing() {
        assert_eq!(render(&sources(), OutputFormat::Log).unwrap(), "");
    }
}
