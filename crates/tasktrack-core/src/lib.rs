//! Core abstractions for Tasktrack: the task model and storage contracts.
//! This crate is intentionally small to keep dependency surface minimal.

pub mod store;
pub mod tasks;
