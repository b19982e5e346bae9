pub mod list;
pub mod mkdir;
pub mod remove;
pub mod stat;
pub mod touch;

use std::process::ExitCode;

use clap::{Args, Subcommand};
use log::error;
use syswrap_interface::FsError;

pub use list::ListArgs;
pub use mkdir::MkdirArgs;
pub use remove::RemoveArgs;
pub use stat::StatArgs;
pub use touch::TouchArgs;

use crate::printer::OutputFormat;

/// Common result type for command handlers
pub type CommandResult<T> = anyhow::Result<T>;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show attributes, size and timestamps of a file or directory.
    ///
    /// Example:
    ///   syswrap stat Cargo.toml
    ///   syswrap stat --json src
    Stat(StatArgs),

    /// List the contents of a directory, optionally filtered and recursive.
    ///
    /// Example:
    ///   syswrap ls src --pattern '*.rs' --recursive
    ///   syswrap ls . --dirs --json
    #[command(name = "ls")]
    List(ListArgs),

    /// Set the last write time of an existing entry.
    Touch(TouchArgs),

    /// Create a subdirectory under an existing directory.
    Mkdir(MkdirArgs),

    /// Delete a file or directory.
    #[command(name = "rm")]
    Remove(RemoveArgs),
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Output results as NDJSON (one JSON object per line)
    #[arg(long)]
    pub json: bool,
}

impl OutputOptions {
    pub fn format(self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Map a handler outcome to the process exit code.
///
/// A missing entry is a soft failure (1); any other error is 2.
pub fn finish(command: &str, result: CommandResult<ExitCode>) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(e) => {
            error!("[{command}] {e:#}");
            eprintln!("[error] {e:#}");
            ExitCode::from(failure_status(&e))
        }
    }
}

fn failure_status(error: &anyhow::Error) -> u8 {
    let missing = error
        .downcast_ref::<FsError>()
        .is_some_and(FsError::is_not_found);
    if missing { 1 } else { 2 }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
