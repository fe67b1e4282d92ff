//! Data Transfer Objects

mod entry_outcome;
mod restore_options;
mod restore_summary;

pub use entry_outcome::EntryOutcome;
pub use restore_options::{RESTORED_DIR_NAME, RestoreOptions, UNIDENTIFIED_DIR_NAME};
pub use restore_summary::RestoreSummary;
