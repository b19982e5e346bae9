use std::{path::PathBuf, process::ExitCode};

use anyhow::bail;
use clap::Args;
use log::info;
use syswrap_interface::{FileSystemEntry, FileSystemInfo};

use super::{CommandResult, finish};

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// File or directory to delete
    pub path: PathBuf,

    /// Delete a directory together with everything beneath it
    #[arg(short, long)]
    pub recursive: bool,
}

pub fn run(args: RemoveArgs) -> ExitCode {
    finish("rm", execute(args))
}

fn execute(args: RemoveArgs) -> CommandResult<ExitCode> {
    let entry = syswrap_fs::open_entry(&args.path)?;
    remove(&entry, args.recursive)?;
    Ok(ExitCode::SUCCESS)
}

/// Delete `entry`. `recursive` is only meaningful for directories.
pub fn remove(entry: &FileSystemEntry, recursive: bool) -> CommandResult<()> {
    match entry {
        FileSystemEntry::File(file) => {
            if recursive {
                bail!(
                    "'{}' is a file; --recursive applies to directories",
                    file.original_path()
                );
            }
            file.delete()?;
        }
        FileSystemEntry::Directory(dir) => dir.delete_recursive(recursive)?,
    }
    info!("[rm] {}", entry.info().original_path());
    Ok(())
}

#[cfg(test)]
#[path = "remove_tests.rs"]
mod tests;
