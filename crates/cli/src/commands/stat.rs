use std::{io::Write, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Args;
use log::debug;
use syswrap_interface::FileSystemEntry;

use super::{CommandResult, OutputOptions, finish};
use crate::printer::{EntryPrinter, EntryReport};

#[derive(Args, Debug)]
pub struct StatArgs {
    /// File or directory to inspect
    pub path: PathBuf,

    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: StatArgs) -> ExitCode {
    finish("stat", execute(args))
}

fn execute(args: StatArgs) -> CommandResult<ExitCode> {
    let entry = syswrap_fs::open_entry(&args.path)?;
    let mut printer = EntryPrinter::stdout(args.output.format());
    describe(&entry, &mut printer)?;
    Ok(ExitCode::SUCCESS)
}

/// Print a fresh report for `entry`.
pub fn describe<W: Write>(
    entry: &FileSystemEntry,
    printer: &mut EntryPrinter<W>,
) -> CommandResult<()> {
    debug!("[stat] {entry:?}");
    let report = EntryReport::collect(entry)?;
    printer
        .print_report(&report)
        .context("failed to write report")?;
    Ok(())
}

#[cfg(test)]
#[path = "stat_tests.rs"]
mod tests;
