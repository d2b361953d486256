use crate::store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskRunError {
    /// Selection flags rejected before any store access
    #[error("{0}")]
    Validation(String),

    /// User declined the confirmation prompt
    #[error("{0}")]
    Canceled(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// One or more deletions failed; carries the rendered report
    #[error("{0}")]
    DeleteFailed(String),

    #[error("kubectl not found: {0}. Install from https://kubernetes.io/docs/tasks/tools/")]
    KubectlNotInstalled(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TaskRunError>;
