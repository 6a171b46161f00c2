use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("Malformed model header: {0}")]
    MalformedHeader(String),
    #[error("Malformed entry {index}: {reason}")]
    MalformedEntry { index: usize, reason: String },
    #[error("Model truncated: expected {expected} words, got {got}")]
    Truncated { expected: usize, got: usize },
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EmbedError>;
