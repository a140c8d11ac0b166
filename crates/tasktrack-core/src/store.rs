use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Errors produced by task store implementations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Underlying I/O failure while creating, reading, or writing the store.
    #[error("store I/O failure: {reason}")]
    Io { reason: String },
}

/// Contract for the backing store holding the encoded task list.
///
/// The store is a single opaque text document; callers read and rewrite it
/// whole. There is no locking across processes, so concurrent invocations
/// race on the read-modify-write cycle (known limitation).
pub trait TaskStore: Send + Sync {
    /// Create the store with an empty task list encoding if it is absent.
    fn ensure_exists(&self) -> Result<(), StoreError>;

    /// Read the entire store contents.
    fn read_all(&self) -> Result<String, StoreError>;

    /// Overwrite the entire store contents.
    fn write_all(&self, contents: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and smoke runs. Holds the document in a
/// mutex-guarded buffer seeded with the empty-list encoding.
#[derive(Debug, Clone)]
pub struct InMemoryTaskStore {
    inner: Arc<Mutex<String>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the buffer with an arbitrary document, valid or not.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(contents.into())),
        }
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::with_contents("[]")
    }
}

impl TaskStore for InMemoryTaskStore {
    fn ensure_exists(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn read_all(&self) -> Result<String, StoreError> {
        let buf = self.inner.lock().map_err(|err| StoreError::Io {
            reason: format!("lock poisoned: {err}"),
        })?;
        Ok(buf.clone())
    }

    fn write_all(&self, contents: &str) -> Result<(), StoreError> {
        let mut buf = self.inner.lock().map_err(|err| StoreError::Io {
            reason: format!("lock poisoned: {err}"),
        })?;
        *buf = contents.to_string();
        Ok(())
    }
}
