//! Cross-state reference analysis.
//!
//! Identifying values are extracted from a source state, then searched for in
//! the attributes of every resource of each destination state.

mod extract;
mod orchestrate;
mod scan;
mod tree;

pub use extract::{extract_from_state, extract_sources};
pub use orchestrate::cross_reference;
pub use scan::scan_for_references;
pub use tree::search;

use serde::Serialize;

use crate::terraform::ResourceMode;

/// One identifying value of a managed source resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceResource {
    pub key: String,
    pub value: String,
    pub provider: String,
    pub address: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub destinations: Vec<DestinationResource>,
}

/// A resource found referencing a source value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinationResource {
    pub provider: String,
    pub address: String,
    pub state: String,
    pub mode: ResourceMode,
    /// Dotted path of the attribute holding the value.
    pub key: String,
}

impl SourceResource {
    pub fn has_destinations(&self) -> bool {
        !self.destinations.is_empty()
    }
}
