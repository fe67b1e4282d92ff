//! Application layer
//!
//! Use cases that orchestrate the classifier and the file store.

pub mod dto;
mod restore_files;

pub use restore_files::{EntryCallback, RestoreError, RestoreFilesUseCase};
