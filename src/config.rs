//! Matcher configuration: which attribute keys identify a resource.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("can't read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid matcher configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Layered matcher rules.
///
/// Resolution order is type rules, then provider rules, then the default
/// keys. The first matching layer wins outright; layers are never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatcherRules {
    #[serde(default, rename = "defaultKeyMatchers")]
    pub default_keys: Vec<String>,
    #[serde(default)]
    pub provider_matchers: Vec<ProviderMatcher>,
    #[serde(default)]
    pub type_matchers: Vec<TypeMatcher>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMatcher {
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub key_matchers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMatcher {
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub provider_matcher: ProviderMatcher,
}

impl MatcherRules {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let rules = Self::from_yaml(&contents)?;

        tracing::debug!(path = %path.display(), rules = ?rules, "matcher configuration loaded");

        Ok(rules)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Identifying keys for a resource of `resource_type` from `provider_name`.
    pub fn resolve(&self, resource_type: &str, provider_name: &str) -> &[String] {
        let type_rule = self.type_matchers.iter().find(|rule| {
            contains(&rule.names, resource_type)
                && contains(&rule.provider_matcher.names, provider_name)
        });
        if let Some(rule) = type_rule {
            return &rule.provider_matcher.key_matchers;
        }

        let provider_rule = self
            .provider_matchers
            .iter()
            .find(|rule| contains(&rule.names, provider_name));
        if let Some(rule) = provider_rule {
            return &rule.key_matchers;
        }

        &self.default_keys
    }

    pub fn is_identifying(&self, resource_type: &str, provider_name: &str, key: &str) -> bool {
        contains(self.resolve(resource_type, provider_name), key)
    }
}

fn contains(names: &[String], name: &str) -> bool {
    names.iter().any(|n| n == name)
}
