//! Persistence layer: pluggable key/value backends and the write-behind
//! persist queue.
//!
//! The store never writes synchronously. Mutations hand finished payloads
//! to a `PersistQueue`, whose worker thread applies them per key in
//! submission order, coalescing bursts so only the newest payload per key
//! hits the backend.

mod backend;
mod file;
mod queue;
mod types;
mod writer;

pub use backend::{MemoryBackend, StorageBackend};
pub use file::FileBackend;
pub use types::{LABEL_SETTINGS_KEY, TAPES_KEY};

pub(crate) use queue::PersistQueue;
