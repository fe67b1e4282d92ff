//! Per-entry outcome DTO

use serde::Serialize;
use std::path::{Path, PathBuf};

/// What happened to a single candidate file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EntryOutcome {
    /// Identified and copied under its label directory
    Restored {
        source: PathBuf,
        destination: PathBuf,
        label: String,
        bytes: u64,
        /// SHA-256 of the source, when verification is on
        digest: Option<String>,
    },
    /// No signature matched
    Unidentified {
        source: PathBuf,
        /// Where the unchanged copy went, if the bucket is enabled
        copied_to: Option<PathBuf>,
    },
    /// Reading, copying or verifying failed; the run carried on
    Failed { source: PathBuf, error: String },
}

impl EntryOutcome {
    /// The source file this outcome is about
    pub fn source(&self) -> &Path {
        match self {
            EntryOutcome::Restored { source, .. }
            | EntryOutcome::Unidentified { source, .. }
            | EntryOutcome::Failed { source, .. } => source,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, EntryOutcome::Failed { .. })
    }
}
