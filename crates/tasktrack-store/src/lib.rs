//! File-backed store implementation: one JSON document per store, read and
//! rewritten whole on every mutation.

pub mod json_file_store;

pub use json_file_store::JsonFileStore;
