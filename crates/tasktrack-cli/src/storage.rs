use std::{ffi::OsString, path::PathBuf};

use tasktrack_store::JsonFileStore;
use tracing::debug;

use crate::config::Config;

/// Conventional store file, created in the working directory when no
/// override is configured.
pub const DEFAULT_STORE_FILE: &str = "task_tracker_cli.json";

/// Environment override for the store path; takes precedence over config.
pub const STORE_PATH_ENV: &str = "TASKTRACK_STORE";

/// Build the file store, resolving the path from env, config, or default.
pub fn store_from_config(config: &Config) -> JsonFileStore {
    let path = resolve_store_path(std::env::var_os(STORE_PATH_ENV), config);
    debug!(path = %path.display(), "opening task store");
    JsonFileStore::new(path)
}

fn resolve_store_path(env_override: Option<OsString>, config: &Config) -> PathBuf {
    env_override
        .map(PathBuf::from)
        .or_else(|| config.store_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
}
