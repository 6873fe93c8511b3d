use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or decoding a state file.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("can't read state file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("can't parse state file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
