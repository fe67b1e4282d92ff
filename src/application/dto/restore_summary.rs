//! Restore summary DTO

use super::EntryOutcome;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// Result of a restore run
#[derive(Debug, Clone, Serialize)]
pub struct RestoreSummary {
    /// Directory that was scanned
    pub source_dir: PathBuf,
    /// Root for identified copies
    pub restored_root: PathBuf,
    /// Root for unidentified copies, when that bucket is enabled
    pub unidentified_root: Option<PathBuf>,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Regular files considered
    pub files_scanned: usize,
    pub restored: usize,
    pub unidentified: usize,
    pub failed: usize,
    /// Directories and other non-file entries passed over
    pub skipped: usize,
    /// Restored files by type label
    pub by_label: BTreeMap<String, usize>,
    /// Total bytes copied
    pub bytes_copied: u64,
    /// Per-file error messages
    pub errors: Vec<String>,
    /// Duration of the run
    #[serde(rename = "elapsed_secs", serialize_with = "secs_f64")]
    pub duration: Duration,
}

fn secs_f64<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

impl RestoreSummary {
    /// Creates an empty summary
    pub fn new(
        source_dir: PathBuf,
        restored_root: PathBuf,
        unidentified_root: Option<PathBuf>,
        dry_run: bool,
    ) -> Self {
        Self {
            source_dir,
            restored_root,
            unidentified_root,
            dry_run,
            files_scanned: 0,
            restored: 0,
            unidentified: 0,
            failed: 0,
            skipped: 0,
            by_label: BTreeMap::new(),
            bytes_copied: 0,
            errors: Vec::new(),
            duration: Duration::ZERO,
        }
    }

    /// Adds an entry outcome to the totals
    pub fn record(&mut self, outcome: &EntryOutcome) {
        self.files_scanned += 1;
        match outcome {
            EntryOutcome::Restored { label, bytes, .. } => {
                self.restored += 1;
                *self.by_label.entry(label.clone()).or_insert(0) += 1;
                self.bytes_copied += bytes;
            }
            EntryOutcome::Unidentified { .. } => self.unidentified += 1,
            EntryOutcome::Failed { source, error } => {
                self.failed += 1;
                self.errors.push(format!("{}: {}", source.display(), error));
            }
        }
    }

    /// Counts an entry that was not a regular file
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    /// True when no per-file errors occurred
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }

    /// Returns a summary string
    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str(&format!(
            "{}: {} of {} files identified, {} unidentified, {} failed\n",
            if self.dry_run { "Dry run complete" } else { "Restoration complete" },
            self.restored,
            self.files_scanned,
            self.unidentified,
            self.failed
        ));

        summary.push_str(&format!(
            "Copied {} bytes in {:.2}s\n",
            self.bytes_copied,
            self.duration.as_secs_f64()
        ));

        for (label, count) in &self.by_label {
            summary.push_str(&format!("  - {}: {}\n", label, count));
        }

        if !self.errors.is_empty() {
            summary.push_str(&format!("\n{} errors occurred\n", self.errors.len()));
        }

        summary
    }
}
