use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use crate::error::StorageError;

use super::backend::StorageBackend;
use super::types::PersistCmd;
use super::writer::spawn_writer;

/// Handle to the background persist worker.
///
/// Writes are applied in submission order; when several writes to one key
/// are waiting, only the newest payload is written. Dropping the queue
/// runs whatever is still queued and joins the worker, so queued writes
/// land before the owner goes away.
pub(crate) struct PersistQueue {
    tx: Sender<PersistCmd>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl PersistQueue {
    pub(crate) fn spawn(backend: Arc<dyn StorageBackend>) -> Self {
        let (tx, rx) = mpsc::channel::<PersistCmd>();
        let handle = spawn_writer(backend, rx);

        Self {
            tx,
            join: Mutex::new(Some(handle)),
        }
    }

    /// Queue a write of `payload` under `key`.
    pub(crate) fn submit(&self, key: &'static str, payload: String) -> Result<(), StorageError> {
        self.tx
            .send(PersistCmd::Write { key, payload })
            .map_err(|_| StorageError::Disconnected)
    }

    /// Block until every write queued so far has been attempted. Reports
    /// the first key still out of sync after a failed write, if any.
    pub(crate) fn flush(&self) -> Result<(), StorageError> {
        let (ack_tx, ack_rx) = mpsc::channel();
        self.tx
            .send(PersistCmd::Flush(ack_tx))
            .map_err(|_| StorageError::Disconnected)?;
        ack_rx.recv().map_err(|_| StorageError::Disconnected)?
    }
}

impl Drop for PersistQueue {
    fn drop(&mut self) {
        let _ = self.tx.send(PersistCmd::Shutdown);

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}
