use thiserror::Error;

#[derive(Debug, Error)]
pub enum TfxrefError {
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error(transparent)]
    State(#[from] crate::terraform::StateError),

    #[error("can't render output: {0}")]
    Output(#[from] serde_json::Error),
}
