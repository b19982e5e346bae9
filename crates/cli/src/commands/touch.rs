use std::{path::PathBuf, process::ExitCode};

use chrono::{DateTime, Utc};
use clap::Args;
use log::info;
use syswrap_interface::{FileSystemInfo, FsError};

use super::{CommandResult, finish};

#[derive(Args, Debug)]
pub struct TouchArgs {
    /// Existing file or directory
    pub path: PathBuf,

    /// Timestamp to apply (RFC 3339); defaults to now
    #[arg(long, value_parser = parse_time)]
    pub time: Option<DateTime<Utc>>,
}

fn parse_time(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

pub fn run(args: TouchArgs) -> ExitCode {
    finish("touch", execute(args))
}

fn execute(args: TouchArgs) -> CommandResult<ExitCode> {
    let entry = syswrap_fs::open_entry(&args.path)?;
    touch(entry.info(), args.time.unwrap_or_else(Utc::now))?;
    Ok(ExitCode::SUCCESS)
}

/// Set the last write time of `info`, which must already exist.
pub fn touch(info: &dyn FileSystemInfo, when: DateTime<Utc>) -> CommandResult<()> {
    if !info.exists() {
        return Err(FsError::not_found("touch", info.full_name()).into());
    }
    info.set_last_write_time_utc(when)?;
    info!("[touch] {} -> {when}", info.original_path());
    Ok(())
}

#[cfg(test)]
#[path = "touch_tests.rs"]
mod tests;
