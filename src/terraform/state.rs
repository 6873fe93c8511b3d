//! Terraform state model, decoded from the JSON representation produced by
//! `terraform show -json`.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AttributeValue, StateError};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct State {
    #[serde(default)]
    pub format_version: String,
    #[serde(default)]
    pub terraform_version: String,
    #[serde(default)]
    pub values: StateValues,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateValues {
    #[serde(default)]
    pub root_module: StateModule,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateModule {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub resources: Vec<StateResource>,
    #[serde(default)]
    pub child_modules: Vec<StateModule>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StateResource {
    pub address: String,
    pub mode: ResourceMode,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default)]
    pub name: String,
    pub provider_name: String,
    #[serde(default, rename = "values")]
    pub attributes: BTreeMap<String, AttributeValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceMode {
    Managed,
    Data,
}

impl ResourceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceMode::Managed => "managed",
            ResourceMode::Data => "data",
        }
    }
}

impl fmt::Display for ResourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl State {
    pub fn from_json(path: &Path, json: &str) -> Result<Self, StateError> {
        serde_json::from_str(json).map_err(|source| StateError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, StateError> {
        let contents = std::fs::read_to_string(path).map_err(|source| StateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let state = Self::from_json(path, &contents)?;

        tracing::debug!(
            path = %path.display(),
            format_version = %state.format_version,
            terraform_version = %state.terraform_version,
            "state loaded"
        );

        Ok(state)
    }

    pub fn root_module(&self) -> &StateModule {
        &self.values.root_module
    }
}

impl StateModule {
    /// This module followed by every descendant module, depth-first.
    pub fn modules(&self) -> Vec<&StateModule> {
        let mut modules = vec![self];
        for child in &self.child_modules {
            modules.extend(child.modules());
        }
        modules
    }
}

/// Loads the state behind an opaque identifier.
pub trait StateLoader {
    fn load(&self, identifier: &str) -> Result<State, StateError>;
}

/// Treats identifiers as filesystem paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStateLoader;

impl StateLoader for FileStateLoader {
    fn load(&self, identifier: &str) -> Result<State, StateError> {
        State::from_file(Path::new(identifier))
    }
}
