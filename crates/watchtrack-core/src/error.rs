use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Failed to access blob '{key}': {source}")]
    Storage {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize sessions: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Stored sessions under '{key}' are malformed: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, LedgerError>;
