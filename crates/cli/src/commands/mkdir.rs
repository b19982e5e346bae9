use std::{io::Write, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Args;
use syswrap_fs::DirectoryInfoWrap;
use syswrap_interface::{DirectoryInfo, FileSystemInfo};

use super::{CommandResult, finish};

#[derive(Args, Debug)]
pub struct MkdirArgs {
    /// Parent directory; created along with any missing ancestors
    pub parent: PathBuf,

    /// Name of the subdirectory; may contain separators to create intermediates
    pub name: String,
}

pub fn run(args: MkdirArgs) -> ExitCode {
    finish("mkdir", execute(args))
}

fn execute(args: MkdirArgs) -> CommandResult<ExitCode> {
    let parent = DirectoryInfoWrap::new(&args.parent);
    make_subdirectory(&parent, &args.name, &mut std::io::stdout().lock())?;
    Ok(ExitCode::SUCCESS)
}

/// Create `name` under `parent` and print the new directory's full path.
pub fn make_subdirectory<W: Write>(
    parent: &dyn DirectoryInfo,
    name: &str,
    out: &mut W,
) -> CommandResult<PathBuf> {
    let created = parent.create_subdirectory(name)?;
    let path = created.full_name();
    writeln!(out, "{}", path.display()).context("failed to write path")?;
    Ok(path)
}

#[cfg(test)]
#[path = "mkdir_tests.rs"]
mod tests;
