use crate::model::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TelbookError {
    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No entry with id {0}")]
    NotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A phonebook line that is not a valid serialized entry. Skipping it
    /// silently would shift every positional id after it, so scans stop here.
    #[error("Phonebook line {line} is corrupt: {source}")]
    Corrupt {
        line: usize,
        source: serde_json::Error,
    },

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, TelbookError>;
