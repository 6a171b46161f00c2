use thiserror::Error;

#[derive(Error, Debug)]
pub enum DupsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{source_name}: input is empty")]
    EmptyInput { source_name: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DupsError>;
