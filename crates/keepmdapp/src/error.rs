use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeepmdError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("--source-path {} does not exist", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, KeepmdError>;
