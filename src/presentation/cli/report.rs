//! Console diagnostics
//!
//! Human-readable lines for the console. Nothing parses them.

use crate::application::dto::{EntryOutcome, RestoreSummary};
use crate::domain::services::SignatureTable;
use std::path::Path;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Banner printed before the run starts
pub fn print_start(source: &Path, dry_run: bool) {
    if dry_run {
        println!("Classifying files in folder (dry run): {}", source.display());
    } else {
        println!("Restoring files in folder: {}", source.display());
    }
}

/// One line for a single entry; failures go to stderr and are never
/// suppressed
pub fn print_outcome(outcome: &EntryOutcome, per_file_lines: bool) {
    if !per_file_lines && !outcome.is_failure() {
        return;
    }

    let source = outcome.source();
    match outcome {
        EntryOutcome::Restored {
            destination, label, ..
        } => {
            println!(
                "Restored: {} -> {} ({})",
                file_name(source),
                destination.display(),
                label.to_uppercase()
            );
        }
        EntryOutcome::Unidentified { copied_to, .. } => match copied_to {
            Some(dest) => println!(
                "Could not identify type for file: {} (copied to {})",
                file_name(source),
                dest.display()
            ),
            None => println!("Could not identify type for file: {}", file_name(source)),
        },
        EntryOutcome::Failed { error, .. } => {
            eprintln!("Error processing {}: {}", source.display(), error);
        }
    }
}

/// Completion banner
pub fn print_summary(summary: &RestoreSummary) {
    print!("{}", summary.summary());
}

/// Summary as pretty JSON on stdout
pub fn print_json(summary: &RestoreSummary) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

/// Table of signatures in match order
pub fn signature_listing(table: &SignatureTable) -> String {
    let mut out = format!("{:<6} {:<26} {}\n", "LABEL", "SIGNATURE", "FORMAT");
    out.push_str(&format!("{}\n", "-".repeat(50)));
    for sig in table.iter() {
        out.push_str(&format!(
            "{:<6} {:<26} {}\n",
            sig.label(),
            sig.magic_hex(),
            sig.description()
        ));
    }
    out.push_str(&format!("\nSupported types: {}\n", table.labels().join(", ")));
    out
}
