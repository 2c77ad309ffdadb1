//! The tape store: in-memory shelf state plus persistence orchestration.

use std::sync::Arc;

use chrono::Utc;
use log::{debug, warn};
use rand::RngExt;

use crate::config::Settings;
use crate::error::{StorageError, StoreError};
use crate::storage::{FileBackend, LABEL_SETTINGS_KEY, PersistQueue, StorageBackend, TAPES_KEY};
use crate::tape::{
    Tape, TapeDraft, TapeFont, TapeLabelSettings, TapeStyle, TapeUpdate, style_or_default,
};

/// Hard cap on the number of tapes a shelf can hold.
pub const MAX_TAPES: usize = 50;

/// The tape shelf: every tape in creation order, the current selection and
/// the label settings.
///
/// A store starts empty and unloaded; call [`TapeStore::load`] once to pull
/// state out of the backend. Mutations update memory first and queue the
/// persist in the background; [`TapeStore::flush`] blocks until the queue
/// has caught up. Dropping the store drains the queue.
pub struct TapeStore {
    backend: Arc<dyn StorageBackend>,
    queue: PersistQueue,
    tapes: Vec<Tape>,
    current_tape_id: Option<String>,
    label_settings: TapeLabelSettings,
    loaded: bool,
}

impl TapeStore {
    /// Create an unloaded store over `backend`.
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        let queue = PersistQueue::spawn(backend.clone());
        Self {
            backend,
            queue,
            tapes: Vec::new(),
            current_tape_id: None,
            label_settings: TapeLabelSettings::default(),
            loaded: false,
        }
    }

    /// Convenience for [`TapeStore::new`] followed by [`TapeStore::load`].
    pub fn open(backend: Arc<dyn StorageBackend>) -> Self {
        let mut store = Self::new(backend);
        store.load();
        store
    }

    /// Open a store over a [`FileBackend`] in the configured data
    /// directory (see the `config` module for how that is resolved).
    pub fn open_default() -> Result<Self, StoreError> {
        let settings = Settings::load_or_default();
        let Some(data_dir) = settings.storage.data_dir() else {
            return Err(StoreError::Storage(StorageError::Other(
                "could not determine a data directory".to_string(),
            )));
        };
        debug!("opening tape store at {}", data_dir.display());
        let backend = FileBackend::new(data_dir)?;
        Ok(Self::open(Arc::new(backend)))
    }

    /// Pull tapes and label settings out of the backend.
    ///
    /// Loading never fails: unreadable or corrupted state degrades to an
    /// empty shelf and default settings (see `load_stored_tapes`). Loading
    /// an already-loaded store is a logged no-op.
    pub fn load(&mut self) {
        if self.loaded {
            warn!("tape store loaded twice; ignoring");
            return;
        }
        self.tapes = load_stored_tapes(self.backend.as_ref());
        self.label_settings = load_label_settings(self.backend.as_ref());
        self.loaded = true;
        debug!(
            "tape store loaded: {} tape(s), label font {:?}",
            self.tapes.len(),
            self.label_settings.font
        );
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Every tape, oldest first.
    pub fn tapes(&self) -> &[Tape] {
        &self.tapes
    }

    pub fn tape_by_id(&self, id: &str) -> Option<&Tape> {
        self.tapes.iter().find(|tape| tape.id == id)
    }

    /// The selected tape, if the selection still points at a live one.
    pub fn current_tape(&self) -> Option<&Tape> {
        self.current_tape_id
            .as_deref()
            .and_then(|id| self.tape_by_id(id))
    }

    pub fn current_tape_id(&self) -> Option<&str> {
        self.current_tape_id.as_deref()
    }

    pub fn label_settings(&self) -> TapeLabelSettings {
        self.label_settings
    }

    /// Style for a tape, falling back to the first catalog entry when the
    /// id is unknown.
    pub fn tape_style(&self, style_id: &str) -> &'static TapeStyle {
        style_or_default(style_id)
    }

    /// Point the deck at a tape, or clear the selection with `None`.
    ///
    /// Selection is ephemeral: never persisted, and an id that matches no
    /// tape just means [`TapeStore::current_tape`] returns `None`.
    pub fn select_tape(&mut self, id: Option<&str>) {
        self.current_tape_id = id.map(str::to_owned);
    }

    /// Record a new tape at the end of the shelf and queue a persist.
    ///
    /// Fails when the shelf is full or the store has not been loaded.
    pub fn create_tape(&mut self, draft: TapeDraft) -> Result<Tape, StoreError> {
        self.ensure_loaded()?;
        if self.tapes.len() >= MAX_TAPES {
            return Err(StoreError::CapacityExceeded { max: MAX_TAPES });
        }

        let mut id = new_tape_id();
        // Ids embed a millisecond timestamp; same-instant ids only differ
        // in the random suffix, so retry until unique on this shelf.
        while self.tapes.iter().any(|tape| tape.id == id) {
            id = new_tape_id();
        }

        let tape = Tape {
            id,
            name: draft.name,
            to: draft.to,
            description: draft.description,
            created_at: Utc::now(),
            style_id: draft.style_id,
            font: draft.font,
            playlist_url: draft.playlist_url,
        };

        debug!("creating tape {:?} ({})", tape.name, tape.id);
        self.tapes.push(tape.clone());
        self.persist_tapes()?;
        Ok(tape)
    }

    /// Patch the tape with `id` and queue a persist.
    ///
    /// An unknown id is a no-op, not an error; the shelf is persisted
    /// either way.
    pub fn update_tape(&mut self, id: &str, update: TapeUpdate) -> Result<(), StoreError> {
        self.ensure_loaded()?;
        match self.tapes.iter_mut().find(|tape| tape.id == id) {
            Some(tape) => {
                update.apply_to(tape);
                debug!("updated tape {id}");
            }
            None => debug!("update for unknown tape {id} ignored"),
        }
        self.persist_tapes()
    }

    /// Remove the tape with `id` and queue a persist. Clears the selection
    /// if it pointed at the removed tape. An unknown id is a no-op.
    pub fn delete_tape(&mut self, id: &str) -> Result<(), StoreError> {
        self.ensure_loaded()?;
        let before = self.tapes.len();
        self.tapes.retain(|tape| tape.id != id);
        if self.tapes.len() == before {
            debug!("delete for unknown tape {id} ignored");
        } else {
            debug!("deleted tape {id}; {} left", self.tapes.len());
        }
        if self.current_tape_id.as_deref() == Some(id) {
            self.current_tape_id = None;
        }
        self.persist_tapes()
    }

    /// Change the preferred label font and queue a persist of the label
    /// settings. The tapes themselves are untouched.
    pub fn update_label_font(&mut self, font: TapeFont) -> Result<(), StoreError> {
        self.ensure_loaded()?;
        self.label_settings = TapeLabelSettings { font };
        self.persist_label_settings()
    }

    /// Block until every queued write has been attempted.
    ///
    /// `Ok` means durable storage has caught up with every mutation so
    /// far. An error names a key whose latest write failed; memory keeps
    /// the data, and the next successful write of that key clears it.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.queue.flush()?;
        Ok(())
    }

    fn ensure_loaded(&self) -> Result<(), StoreError> {
        if self.loaded {
            Ok(())
        } else {
            Err(StoreError::NotLoaded)
        }
    }

    /// Serialize the shelf, minus invalid records, and queue the write.
    fn persist_tapes(&self) -> Result<(), StoreError> {
        let valid: Vec<&Tape> = self.tapes.iter().filter(|tape| tape.is_valid()).collect();
        if valid.len() != self.tapes.len() {
            warn!(
                "not persisting {} invalid tape record(s)",
                self.tapes.len() - valid.len()
            );
        }

        let payload = serde_json::to_string(&valid).map_err(|source| StoreError::Serialize {
            what: "tapes",
            source,
        })?;
        self.queue.submit(TAPES_KEY, payload)?;
        Ok(())
    }

    fn persist_label_settings(&self) -> Result<(), StoreError> {
        let payload =
            serde_json::to_string(&self.label_settings).map_err(|source| StoreError::Serialize {
                what: "label settings",
                source,
            })?;
        self.queue.submit(LABEL_SETTINGS_KEY, payload)?;
        Ok(())
    }
}

/// Read and repair the stored tape collection.
///
/// Anything unreadable degrades to an empty shelf: absent payloads and the
/// literal `undefined` / `null` sentinels are "nothing stored"; unparsable
/// payloads and non-arrays are removed from the backend (best effort) so
/// the next run starts clean. Records that fail to decode or fail the
/// validity check are dropped without taking the rest down.
fn load_stored_tapes(backend: &dyn StorageBackend) -> Vec<Tape> {
    let stored = match backend.get(TAPES_KEY) {
        Ok(stored) => stored,
        Err(e) => {
            warn!("could not read stored tapes: {e}");
            return Vec::new();
        }
    };
    let Some(raw) = stored else {
        debug!("no stored tapes");
        return Vec::new();
    };
    if raw.trim().is_empty() || raw == "undefined" || raw == "null" {
        debug!("no stored tapes");
        return Vec::new();
    }

    let parsed: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("stored tapes are corrupted, clearing: {e}");
            remove_corrupted(backend, TAPES_KEY);
            return Vec::new();
        }
    };
    let serde_json::Value::Array(items) = parsed else {
        warn!("stored tapes are not an array, clearing");
        remove_corrupted(backend, TAPES_KEY);
        return Vec::new();
    };

    let total = items.len();
    let tapes: Vec<Tape> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<Tape>(item).ok())
        .filter(Tape::is_valid)
        .collect();
    if tapes.len() != total {
        warn!(
            "dropped {} invalid stored tape record(s)",
            total - tapes.len()
        );
    }
    debug!("loaded {} tape(s)", tapes.len());
    tapes
}

fn load_label_settings(backend: &dyn StorageBackend) -> TapeLabelSettings {
    let stored = match backend.get(LABEL_SETTINGS_KEY) {
        Ok(stored) => stored,
        Err(e) => {
            warn!("could not read label settings: {e}");
            return TapeLabelSettings::default();
        }
    };
    let Some(raw) = stored else {
        return TapeLabelSettings::default();
    };
    // Whitespace is not special-cased here; it goes down the corrupt path.
    if raw == "undefined" || raw == "null" {
        return TapeLabelSettings::default();
    }

    match serde_json::from_str(&raw) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("label settings are corrupted, using defaults: {e}");
            remove_corrupted(backend, LABEL_SETTINGS_KEY);
            TapeLabelSettings::default()
        }
    }
}

fn remove_corrupted(backend: &dyn StorageBackend, key: &str) {
    if let Err(e) = backend.remove(key) {
        warn!("could not clear corrupted {key:?}: {e}");
    }
}

/// Mint a tape id: `tape-<millis>-<random base36 suffix>`.
fn new_tape_id() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    const SUFFIX_LEN: usize = 7;

    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect();
    format!("tape-{}-{}", Utc::now().timestamp_millis(), suffix)
}
