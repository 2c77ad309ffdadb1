//! Persistence and state core for a pocket cassette shelf.
//!
//! [`TapeStore`] keeps an ordered shelf of mixtapes plus the label font
//! preference in memory, loads both once from a [`StorageBackend`], and
//! persists every mutation through a background write queue.

mod config;
mod error;
mod storage;
mod store;
mod tape;

pub use config::{Settings, StorageSettings};
pub use error::{StorageError, StoreError};
pub use storage::{FileBackend, LABEL_SETTINGS_KEY, MemoryBackend, StorageBackend, TAPES_KEY};
pub use store::{MAX_TAPES, TapeStore};
pub use tape::{
    TAPE_STYLES, Tape, TapeDraft, TapeFont, TapeLabelSettings, TapeStyle, TapeUpdate,
    style_or_default,
};
