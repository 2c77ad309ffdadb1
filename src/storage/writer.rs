use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::thread::{self, JoinHandle};

use log::{debug, error};

use crate::error::StorageError;

use super::backend::StorageBackend;
use super::types::PersistCmd;

pub(super) fn spawn_writer(
    backend: Arc<dyn StorageBackend>,
    rx: Receiver<PersistCmd>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        // Keys whose most recent write attempt failed. Durable storage is
        // behind the in-memory state for these until a later write of the
        // same key succeeds.
        let mut out_of_sync: Vec<(&'static str, String)> = Vec::new();

        fn run_writes(
            backend: &dyn StorageBackend,
            pending: &mut Vec<(&'static str, String)>,
            out_of_sync: &mut Vec<(&'static str, String)>,
        ) {
            for (key, payload) in pending.drain(..) {
                match backend.set(key, &payload) {
                    Ok(()) => {
                        out_of_sync.retain(|(k, _)| *k != key);
                        debug!("persisted {key:?} ({} bytes)", payload.len());
                    }
                    Err(e) => {
                        error!("persisting {key:?} failed: {e}");
                        out_of_sync.retain(|(k, _)| *k != key);
                        out_of_sync.push((key, e.to_string()));
                    }
                }
            }
        }

        loop {
            let first = match rx.recv() {
                Ok(cmd) => cmd,
                // Every queue handle is gone; nothing more can arrive.
                Err(_) => break,
            };

            let mut batch = vec![first];
            while let Ok(cmd) = rx.try_recv() {
                batch.push(cmd);
            }

            let mut pending: Vec<(&'static str, String)> = Vec::new();
            let mut shutdown = false;

            for cmd in batch {
                match cmd {
                    PersistCmd::Write { key, payload } => {
                        // Last writer wins: a newer payload for the same key
                        // replaces the queued one.
                        if let Some(slot) = pending.iter_mut().find(|(k, _)| *k == key) {
                            slot.1 = payload;
                        } else {
                            pending.push((key, payload));
                        }
                    }
                    PersistCmd::Flush(ack) => {
                        // Everything queued ahead of the flush completes
                        // before the acknowledgement.
                        run_writes(backend.as_ref(), &mut pending, &mut out_of_sync);
                        let result = match out_of_sync.first() {
                            Some((key, reason)) => Err(StorageError::WriteFailed {
                                key: (*key).to_string(),
                                reason: reason.clone(),
                            }),
                            None => Ok(()),
                        };
                        // The caller may have stopped waiting.
                        let _ = ack.send(result);
                    }
                    PersistCmd::Shutdown => {
                        shutdown = true;
                        break;
                    }
                }
            }

            run_writes(backend.as_ref(), &mut pending, &mut out_of_sync);

            if shutdown {
                break;
            }
        }
    })
}
