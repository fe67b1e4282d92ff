//! Resift identifies files by their leading magic bytes and sorts copies of
//! them into type-named folders.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::dto::{EntryOutcome, RestoreOptions, RestoreSummary};
pub use application::{RestoreError, RestoreFilesUseCase};
pub use domain::entities::{Classification, FileSignature};
pub use domain::services::{Classifier, SignatureTable};
pub use infrastructure::persistence::LocalFileStore;

/// Classifies a byte prefix against the built-in signature table
pub fn classify(prefix: &[u8]) -> Classification<'static> {
    Classifier::builtin().classify(prefix)
}
