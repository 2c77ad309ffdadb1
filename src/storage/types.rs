//! Storage-related small types: well-known keys and persist commands.

use std::sync::mpsc::Sender;

use crate::error::StorageError;

/// Key the tape collection is stored under.
pub const TAPES_KEY: &str = "tapes";

/// Key the label settings are stored under.
pub const LABEL_SETTINGS_KEY: &str = "tapeLabelSettings";

#[derive(Debug)]
pub(crate) enum PersistCmd {
    /// Replace the payload stored under `key`. A later write of the same
    /// key supersedes this one if both are still queued.
    Write { key: &'static str, payload: String },
    /// Run every queued write, then report over the channel whether
    /// durable storage has caught up with the in-memory state.
    Flush(Sender<Result<(), StorageError>>),
    /// Run every queued write and stop the worker.
    Shutdown,
}
