//! CLI arguments using clap

use crate::application::dto::RestoreOptions;
use clap::Parser;
use std::path::PathBuf;

/// Resift - file type restorer
///
/// Identifies files whose extensions are missing or wrong by their leading
/// magic bytes and copies them into type-named folders under
/// SOURCE_DIR/Restored_Files. Source files are never modified.
#[derive(Parser, Debug)]
#[command(name = "resift")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Directory holding the files to identify
    #[arg(value_name = "SOURCE_DIR", required_unless_present = "list_signatures")]
    pub source: Option<PathBuf>,

    /// Only report unidentified files instead of copying them to Unidentified_Files
    #[arg(long)]
    pub skip_unidentified: bool,

    /// Verify every copy against its source with SHA-256
    #[arg(long)]
    pub verify: bool,

    /// Classify and report without creating or copying anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the final summary as JSON
    #[arg(long)]
    pub json: bool,

    /// List the supported signatures and exit
    #[arg(long)]
    pub list_signatures: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress per-file lines
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Restore options selected by the flags
    pub fn restore_options(&self) -> RestoreOptions {
        let mut options = RestoreOptions::new().with_unidentified_copies(!self.skip_unidentified);
        if self.verify {
            options = options.verified();
        }
        if self.dry_run {
            options = options.dry_run();
        }
        options
    }

    /// Whether per-file lines go to the console
    pub fn per_file_lines(&self) -> bool {
        !self.quiet && !self.json
    }
}
