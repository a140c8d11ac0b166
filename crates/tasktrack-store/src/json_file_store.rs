use std::{
    fs,
    path::{Path, PathBuf},
};

use tasktrack_core::store::{StoreError, TaskStore};
use tracing::debug;

/// Plain-file store implementing the shared `TaskStore` contract. The whole
/// document lives in a single file; writes are full rewrites and are not
/// atomic, so a failure mid-write can truncate the store.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

const EMPTY_STORE: &str = "[]";

impl TaskStore for JsonFileStore {
    fn ensure_exists(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        debug!(path = %self.path.display(), "creating empty task store");
        fs::write(&self.path, EMPTY_STORE).map_err(io_err)
    }

    fn read_all(&self) -> Result<String, StoreError> {
        fs::read_to_string(&self.path).map_err(io_err)
    }

    fn write_all(&self, contents: &str) -> Result<(), StoreError> {
        fs::write(&self.path, contents).map_err(io_err)
    }
}

fn io_err(err: std::io::Error) -> StoreError {
    StoreError::Io {
        reason: err.to_string(),
    }
}
