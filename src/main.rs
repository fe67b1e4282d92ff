use anyhow::{Context, Result, bail};
use clap::Parser;
use std::process::ExitCode;

use resift::presentation::cli::{Cli, logging, report};
use resift::{Classifier, EntryOutcome, LocalFileStore, RestoreFilesUseCase, SignatureTable};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.list_signatures {
        print!("{}", report::signature_listing(SignatureTable::builtin()));
        return Ok(());
    }

    let Some(source) = cli.source.as_deref() else {
        bail!("Missing argument: SOURCE_DIR");
    };

    if !source.is_dir() {
        bail!("Provided path is not a directory: {}", source.display());
    }

    let options = cli.restore_options();
    let dry_run = options.dry_run;
    let per_file_lines = cli.per_file_lines();
    let use_case = RestoreFilesUseCase::new(Classifier::builtin(), LocalFileStore::new(), options);

    if !cli.json {
        report::print_start(source, dry_run);
    }

    let summary = use_case
        .execute(
            source,
            Some(Box::new(|outcome: &EntryOutcome| {
                report::print_outcome(outcome, per_file_lines)
            })),
        )
        .with_context(|| format!("Restore of {} aborted", source.display()))?;

    if cli.json {
        report::print_json(&summary).context("Failed to write JSON summary")?;
    } else {
        report::print_summary(&summary);
    }

    Ok(())
}
