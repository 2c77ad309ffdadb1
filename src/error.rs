//! Error types for the store and its storage backends.

use thiserror::Error;

/// Errors returned by tape store operations.
///
/// Background persistence failures do not show up here directly; they are
/// logged when they happen and reported by `TapeStore::flush`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("tape limit reached (maximum of {max} tapes)")]
    CapacityExceeded { max: usize },

    #[error("could not serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("tape store has not been loaded yet")]
    NotLoaded,
}

/// Errors produced by storage backends and the persist queue.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    /// A queued write of `key` failed, so durable storage is behind the
    /// in-memory state until a later write of that key succeeds.
    #[error("queued write of {key:?} failed: {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("persist worker disconnected")]
    Disconnected,

    #[error("other: {0}")]
    Other(String),
}
