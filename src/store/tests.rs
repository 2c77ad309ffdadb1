use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::*;
use crate::error::{StorageError, StoreError};
use crate::storage::{FileBackend, LABEL_SETTINGS_KEY, MemoryBackend, StorageBackend, TAPES_KEY};
use crate::tape::{Tape, TapeDraft, TapeFont, TapeUpdate};

fn store_with(backend: &MemoryBackend) -> TapeStore {
    TapeStore::open(Arc::new(backend.clone()))
}

fn draft(name: &str) -> TapeDraft {
    TapeDraft {
        name: name.to_string(),
        style_id: "classic-red".to_string(),
        ..TapeDraft::default()
    }
}

fn tape_json(id: &str, name: &str) -> String {
    format!(
        r#"[{{"id":"{id}","name":"{name}","to":"","description":"","createdAt":"2024-01-15T10:30:00.000Z","styleId":"classic-red","font":"default"}}]"#
    )
}

#[test]
fn a_fresh_backend_loads_as_an_empty_shelf() {
    let backend = MemoryBackend::new();
    let store = store_with(&backend);

    assert!(store.is_loaded());
    assert!(store.tapes().is_empty());
    assert!(store.current_tape().is_none());
    assert_eq!(store.label_settings().font, TapeFont::Default);
}

#[test]
fn sentinel_payloads_load_as_an_empty_shelf() {
    for sentinel in ["undefined", "null", "", "   "] {
        let backend = MemoryBackend::new();
        backend.set(TAPES_KEY, sentinel).unwrap();

        let store = store_with(&backend);
        assert!(store.tapes().is_empty(), "sentinel {sentinel:?}");
        // Sentinels are not corruption; nothing gets removed.
        assert!(backend.get(TAPES_KEY).unwrap().is_some());
    }
}

#[test]
fn corrupted_tape_payloads_are_cleared_on_load() {
    let backend = MemoryBackend::new();
    backend.set(TAPES_KEY, "{invalid json").unwrap();

    let store = store_with(&backend);
    assert!(store.is_loaded());
    assert!(store.tapes().is_empty());
    // The corrupt payload is gone, so the next run starts clean.
    assert!(backend.get(TAPES_KEY).unwrap().is_none());
}

#[test]
fn non_array_tape_payloads_are_cleared_on_load() {
    let backend = MemoryBackend::new();
    backend.set(TAPES_KEY, r#"{"id":"not-an-array"}"#).unwrap();

    let store = store_with(&backend);
    assert!(store.tapes().is_empty());
    assert!(backend.get(TAPES_KEY).unwrap().is_none());
}

#[test]
fn invalid_records_are_dropped_individually_on_load() {
    let backend = MemoryBackend::new();
    backend
        .set(
            TAPES_KEY,
            r#"[
                {"id":"good","name":"Keeper","styleId":"classic-red"},
                {"id":"1"},
                {"id":"bad-font","name":"x","styleId":"classic-red","font":"papyrus"},
                "not even an object"
            ]"#,
        )
        .unwrap();

    let store = store_with(&backend);
    assert_eq!(store.tapes().len(), 1);

    let kept = &store.tapes()[0];
    assert_eq!(kept.id, "good");
    // Partial records decode with defaults for the missing fields.
    assert_eq!(kept.created_at, DateTime::<Utc>::UNIX_EPOCH);
    assert_eq!(kept.font, TapeFont::Default);

    // A payload of nothing but invalid records loads as an empty shelf.
    let backend = MemoryBackend::new();
    backend.set(TAPES_KEY, r#"[{"id":"1"}]"#).unwrap();
    assert!(store_with(&backend).tapes().is_empty());
}

#[test]
fn load_is_one_shot() {
    let backend = MemoryBackend::new();
    backend.set(TAPES_KEY, &tape_json("tape-1", "First")).unwrap();

    let mut store = TapeStore::new(Arc::new(backend.clone()));
    assert!(!store.is_loaded());
    store.load();
    assert_eq!(store.tapes().len(), 1);

    store.create_tape(draft("Second")).unwrap();
    // A second load must not clobber state that only exists in memory.
    store.load();
    assert_eq!(store.tapes().len(), 2);
}

#[test]
fn mutations_before_load_are_rejected() {
    let backend = MemoryBackend::new();
    let mut store = TapeStore::new(Arc::new(backend.clone()));

    assert!(matches!(
        store.create_tape(draft("x")),
        Err(StoreError::NotLoaded)
    ));
    assert!(matches!(
        store.update_tape("tape-1", TapeUpdate::default()),
        Err(StoreError::NotLoaded)
    ));
    assert!(matches!(store.delete_tape("tape-1"), Err(StoreError::NotLoaded)));
    assert!(matches!(
        store.update_label_font(TapeFont::Serif),
        Err(StoreError::NotLoaded)
    ));

    // None of the rejected calls persisted anything.
    store.flush().unwrap();
    assert!(backend.get(TAPES_KEY).unwrap().is_none());
    assert!(backend.get(LABEL_SETTINGS_KEY).unwrap().is_none());
}

#[test]
fn create_appends_a_tape_and_persists_it() {
    let backend = MemoryBackend::new();
    let mut store = store_with(&backend);

    let before = Utc::now();
    let tape = store
        .create_tape(TapeDraft {
            name: "Mix 1".to_string(),
            to: "Sam".to_string(),
            description: "Late night drive".to_string(),
            style_id: "neon-cyan".to_string(),
            font: TapeFont::Sharpie,
            playlist_url: None,
        })
        .unwrap();

    assert_eq!(store.tapes().len(), 1);
    assert_eq!(store.tapes()[0].id, tape.id);
    assert!(tape.created_at >= before && tape.created_at <= Utc::now());

    // Ids look like `tape-<millis>-<7 base36 chars>`.
    let parts: Vec<&str> = tape.id.splitn(3, '-').collect();
    assert_eq!(parts[0], "tape");
    assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
    assert_eq!(parts[2].len(), 7);
    assert!(
        parts[2]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
    );

    store.flush().unwrap();
    let raw = backend.get(TAPES_KEY).unwrap().unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 1);
    assert_eq!(v[0]["name"], "Mix 1");
    assert_eq!(v[0]["styleId"], "neon-cyan");
    assert_eq!(v[0]["font"], "sharpie");
}

#[test]
fn create_keeps_creation_order() {
    let backend = MemoryBackend::new();
    let mut store = store_with(&backend);

    for name in ["A", "B", "C"] {
        store.create_tape(draft(name)).unwrap();
    }
    let names: Vec<&str> = store.tapes().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);

    // Order survives a reload.
    store.flush().unwrap();
    let store2 = store_with(&backend);
    let names: Vec<&str> = store2.tapes().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);
}

#[test]
fn create_fails_once_the_shelf_is_full() {
    let backend = MemoryBackend::new();
    let mut store = store_with(&backend);

    for i in 0..MAX_TAPES {
        store.create_tape(draft(&format!("Tape {i}"))).unwrap();
    }

    let err = store.create_tape(draft("One too many")).unwrap_err();
    assert!(matches!(err, StoreError::CapacityExceeded { max: MAX_TAPES }));
    assert!(err.to_string().contains("50"));
    assert_eq!(store.tapes().len(), MAX_TAPES);

    let ids: std::collections::HashSet<&str> =
        store.tapes().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids.len(), MAX_TAPES, "every tape id is unique");
}

#[test]
fn update_patches_a_tape_and_persists() {
    let backend = MemoryBackend::new();
    let mut store = store_with(&backend);
    let tape = store
        .create_tape(TapeDraft {
            name: "Original".to_string(),
            to: "Alex".to_string(),
            style_id: "classic-red".to_string(),
            playlist_url: Some("https://example.com/a".to_string()),
            ..TapeDraft::default()
        })
        .unwrap();

    store
        .update_tape(
            &tape.id,
            TapeUpdate {
                name: Some("Renamed".to_string()),
                style_id: Some("hot-pink".to_string()),
                playlist_url: Some(None),
                ..TapeUpdate::default()
            },
        )
        .unwrap();

    let updated = store.tape_by_id(&tape.id).unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.style_id, "hot-pink");
    assert_eq!(updated.to, "Alex");
    assert!(updated.playlist_url.is_none());
    // Identity fields cannot change through a patch.
    assert_eq!(updated.id, tape.id);
    assert_eq!(updated.created_at, tape.created_at);

    store.flush().unwrap();
    let raw = backend.get(TAPES_KEY).unwrap().unwrap();
    assert!(raw.contains("Renamed"));
    assert!(!raw.contains("playlistUrl"));
}

#[test]
fn update_of_an_unknown_id_is_a_quiet_no_op() {
    let backend = MemoryBackend::new();
    let mut store = store_with(&backend);
    store.create_tape(draft("Only")).unwrap();

    store
        .update_tape(
            "tape-missing",
            TapeUpdate {
                name: Some("Never applied".to_string()),
                ..TapeUpdate::default()
            },
        )
        .unwrap();

    assert_eq!(store.tapes()[0].name, "Only");
    // The shelf is persisted even though nothing changed.
    store.flush().unwrap();
    assert!(backend.get(TAPES_KEY).unwrap().is_some());
}

#[test]
fn delete_removes_a_tape_and_keeps_the_rest_in_order() {
    let backend = MemoryBackend::new();
    let mut store = store_with(&backend);
    let a = store.create_tape(draft("A")).unwrap();
    let b = store.create_tape(draft("B")).unwrap();
    let c = store.create_tape(draft("C")).unwrap();

    store.delete_tape(&b.id).unwrap();
    let ids: Vec<&str> = store.tapes().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, [a.id.as_str(), c.id.as_str()]);

    // Deleting something unknown changes nothing and still succeeds.
    store.delete_tape("tape-missing").unwrap();
    assert_eq!(store.tapes().len(), 2);
}

#[test]
fn selection_follows_the_shelf() {
    let backend = MemoryBackend::new();
    let mut store = store_with(&backend);
    let a = store.create_tape(draft("A")).unwrap();
    let b = store.create_tape(draft("B")).unwrap();

    store.select_tape(Some(a.id.as_str()));
    assert_eq!(store.current_tape().map(|t| t.name.as_str()), Some("A"));
    assert_eq!(store.current_tape_id(), Some(a.id.as_str()));

    // A selection no tape matches leaves current_tape empty.
    store.select_tape(Some("tape-missing"));
    assert!(store.current_tape().is_none());
    assert_eq!(store.current_tape_id(), Some("tape-missing"));

    store.select_tape(None);
    assert!(store.current_tape_id().is_none());

    // Deleting the selected tape clears the selection.
    store.select_tape(Some(b.id.as_str()));
    store.delete_tape(&b.id).unwrap();
    assert!(store.current_tape_id().is_none());

    // Deleting a different tape leaves it alone.
    let c = store.create_tape(draft("C")).unwrap();
    store.select_tape(Some(c.id.as_str()));
    store.delete_tape(&a.id).unwrap();
    assert_eq!(store.current_tape_id(), Some(c.id.as_str()));
}

#[test]
fn label_settings_load_and_update_independently() {
    let backend = MemoryBackend::new();
    backend
        .set(LABEL_SETTINGS_KEY, r#"{"font":"sharpie"}"#)
        .unwrap();

    let mut store = store_with(&backend);
    assert_eq!(store.label_settings().font, TapeFont::Sharpie);

    store.update_label_font(TapeFont::MonospaceBold).unwrap();
    assert_eq!(store.label_settings().font, TapeFont::MonospaceBold);

    store.flush().unwrap();
    assert_eq!(
        backend.get(LABEL_SETTINGS_KEY).unwrap().as_deref(),
        Some(r#"{"font":"monospace-bold"}"#)
    );
    // A font change does not touch the tapes key.
    assert!(backend.get(TAPES_KEY).unwrap().is_none());
}

#[test]
fn corrupted_label_settings_fall_back_to_defaults() {
    let backend = MemoryBackend::new();
    backend.set(LABEL_SETTINGS_KEY, "not json").unwrap();

    let store = store_with(&backend);
    assert_eq!(store.label_settings().font, TapeFont::Default);
    assert!(backend.get(LABEL_SETTINGS_KEY).unwrap().is_none());
}

#[test]
fn records_made_invalid_are_filtered_from_the_saved_payload() {
    let backend = MemoryBackend::new();
    let mut store = store_with(&backend);
    let keep = store.create_tape(draft("Keep")).unwrap();
    let wipe = store.create_tape(draft("Wipe")).unwrap();

    // Blanking the name keeps the record on the in-memory shelf but makes
    // it invalid, so the persisted payload excludes it.
    store
        .update_tape(
            &wipe.id,
            TapeUpdate {
                name: Some(String::new()),
                ..TapeUpdate::default()
            },
        )
        .unwrap();
    assert_eq!(store.tapes().len(), 2);

    store.flush().unwrap();
    let raw = backend.get(TAPES_KEY).unwrap().unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 1);
    assert_eq!(v[0]["id"], keep.id.as_str());

    // A fresh load over the same backend only sees the valid record.
    let store2 = store_with(&backend);
    assert_eq!(store2.tapes().len(), 1);
}

#[test]
fn a_second_store_sees_what_the_first_persisted() {
    let backend = MemoryBackend::new();
    let mut store = store_with(&backend);
    let tape = store
        .create_tape(TapeDraft {
            name: "Handoff".to_string(),
            to: "Casey".to_string(),
            description: "For the bus ride".to_string(),
            style_id: "disco-gold".to_string(),
            font: TapeFont::HandwritingBold,
            playlist_url: Some("https://example.com/mix".to_string()),
        })
        .unwrap();
    store.select_tape(Some(tape.id.as_str()));
    store.flush().unwrap();

    let store2 = store_with(&backend);
    let reloaded: &Tape = store2.tape_by_id(&tape.id).unwrap();
    assert_eq!(reloaded, &tape);
    // Selection is ephemeral and does not survive a restart.
    assert!(store2.current_tape_id().is_none());
}

#[test]
fn file_backed_store_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    let tape = {
        let backend = Arc::new(FileBackend::new(dir.path()).unwrap());
        let mut store = TapeStore::open(backend);
        let tape = store.create_tape(draft("On disk")).unwrap();
        store.update_label_font(TapeFont::Serif).unwrap();
        tape
        // Dropping the store drains the queue before the scope ends.
    };

    assert!(dir.path().join("tapes.json").is_file());
    assert!(dir.path().join("tapeLabelSettings.json").is_file());

    let backend = Arc::new(FileBackend::new(dir.path()).unwrap());
    let store = TapeStore::open(backend);
    assert_eq!(store.tapes().len(), 1);
    assert_eq!(store.tapes()[0].id, tape.id);
    assert_eq!(store.label_settings().font, TapeFont::Serif);
}

/// Backend whose writes always fail; reads and removes pass through.
struct ReadOnlyBackend {
    inner: MemoryBackend,
}

impl StorageBackend for ReadOnlyBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Other("read-only backend".to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

#[test]
fn flush_surfaces_background_write_failures() {
    let backend = Arc::new(ReadOnlyBackend {
        inner: MemoryBackend::new(),
    });
    let mut store = TapeStore::open(backend);

    // The mutation itself succeeds; memory is updated optimistically.
    store.create_tape(draft("Doomed")).unwrap();
    assert_eq!(store.tapes().len(), 1);

    let err = store.flush().unwrap_err();
    assert!(matches!(
        err,
        StoreError::Storage(StorageError::WriteFailed { ref key, .. }) if key == TAPES_KEY
    ));
}
