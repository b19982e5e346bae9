use std::{io::Write, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Args;
use log::debug;
use syswrap_fs::DirectoryInfoWrap;
use syswrap_interface::{DEFAULT_SEARCH_PATTERN, DirectoryInfo, FileSystemInfo, SearchOption};

use super::{CommandResult, OutputOptions, finish};
use crate::printer::{EntryKind, EntryPrinter, ListingRow};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory to list
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Name pattern; `*` and `?` are the only wildcards
    #[arg(short, long, default_value = DEFAULT_SEARCH_PATTERN)]
    pub pattern: String,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Only list files
    #[arg(long, conflicts_with = "dirs")]
    pub files: bool,

    /// Only list directories
    #[arg(long)]
    pub dirs: bool,

    #[command(flatten)]
    pub output: OutputOptions,
}

/// Which kinds of entries a listing yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Files,
    Directories,
    Everything,
}

impl ListArgs {
    fn listing(&self) -> Listing {
        match (self.files, self.dirs) {
            (true, _) => Listing::Files,
            (_, true) => Listing::Directories,
            _ => Listing::Everything,
        }
    }
}

pub fn run(args: ListArgs) -> ExitCode {
    finish("ls", execute(args))
}

fn execute(args: ListArgs) -> CommandResult<ExitCode> {
    let dir = DirectoryInfoWrap::new(&args.dir);
    let mut printer = EntryPrinter::stdout(args.output.format());
    let count = list(
        &dir,
        &args.pattern,
        SearchOption::from(args.recursive),
        args.listing(),
        &mut printer,
    )?;
    debug!("[ls] {count} entries under {:?}", dir.full_name());
    Ok(ExitCode::SUCCESS)
}

/// Stream matching entries of `dir` to `printer` and return how many were written.
///
/// Rows are written as the walk produces them; the first error ends the listing.
pub fn list<W: Write>(
    dir: &dyn DirectoryInfo,
    pattern: &str,
    option: SearchOption,
    listing: Listing,
    printer: &mut EntryPrinter<W>,
) -> CommandResult<usize> {
    let mut count = 0usize;
    let mut emit = |row: ListingRow| -> CommandResult<()> {
        printer.print_row(&row).context("failed to write listing")?;
        count += 1;
        Ok(())
    };

    match listing {
        Listing::Files => {
            for file in dir.enumerate_files(pattern, option)? {
                emit(ListingRow::new(EntryKind::File, file?.as_ref()))?;
            }
        }
        Listing::Directories => {
            for sub in dir.enumerate_directories(pattern, option)? {
                emit(ListingRow::new(EntryKind::Directory, sub?.as_ref()))?;
            }
        }
        Listing::Everything => {
            for entry in dir.enumerate_file_system_infos(pattern, option)? {
                let entry = entry?;
                emit(ListingRow::new(EntryKind::of(&entry), entry.info()))?;
            }
        }
    }

    Ok(count)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
