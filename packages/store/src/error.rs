use thiserror::Error;

/// Failures of a [`crate::KeyValueStore`] backend or of encoding the data
/// written to it.
///
/// [`crate::BlogStore`] never propagates these to its callers: reads that fail
/// are treated as "nothing persisted" and writes that fail are logged, leaving
/// the in-memory snapshot authoritative.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode posts: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("storage lock poisoned")]
    Poisoned,
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
