use std::io::{self, Write};

use chrono::{DateTime, Local};
use serde::Serialize;
use syswrap_interface::{FileSystemEntry, FileSystemInfo, FsResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// NDJSON (newline-delimited JSON) for machine consumption.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn of(entry: &FileSystemEntry) -> Self {
        if entry.is_directory() {
            Self::Directory
        } else {
            Self::File
        }
    }

    fn tag(self) -> char {
        match self {
            Self::File => '-',
            Self::Directory => 'd',
        }
    }
}

/// Everything `stat` shows about one entry.
#[derive(Debug, Clone, Serialize)]
pub struct EntryReport {
    pub kind: EntryKind,
    pub name: String,
    pub full_name: String,
    pub extension: String,
    pub exists: bool,
    pub attributes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u64>,
    pub created: DateTime<Local>,
    pub accessed: DateTime<Local>,
    pub modified: DateTime<Local>,
}

impl EntryReport {
    /// Refresh `entry` and read its snapshot.
    pub fn collect(entry: &FileSystemEntry) -> FsResult<Self> {
        let info = entry.info();
        info.refresh()?;

        let length = match entry.as_file() {
            Some(file) => Some(file.length()?),
            None => None,
        };

        Ok(Self {
            kind: EntryKind::of(entry),
            name: info.name(),
            full_name: info.full_name().to_string_lossy().into_owned(),
            extension: info.extension(),
            exists: info.exists(),
            attributes: info.attributes()?.describe(),
            length,
            created: info.creation_time()?,
            accessed: info.last_access_time()?,
            modified: info.last_write_time()?,
        })
    }
}

/// One line of `ls` output.
#[derive(Debug, Clone, Serialize)]
pub struct ListingRow {
    pub kind: EntryKind,
    pub path: String,
}

impl ListingRow {
    pub fn new(kind: EntryKind, info: &dyn FileSystemInfo) -> Self {
        Self {
            kind,
            path: info.full_name().to_string_lossy().into_owned(),
        }
    }
}

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f %:z";

/// Writes reports and listing rows in the selected format.
pub struct EntryPrinter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> EntryPrinter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print_report(&mut self, report: &EntryReport) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => self.print_json(report),
            OutputFormat::Human => {
                let kind = match report.kind {
                    EntryKind::File => "file",
                    EntryKind::Directory => "directory",
                };
                writeln!(self.out, "      Name: {}", report.name)?;
                writeln!(self.out, "      Path: {}", report.full_name)?;
                writeln!(self.out, "      Kind: {kind}")?;
                writeln!(self.out, "    Exists: {}", report.exists)?;
                if !report.extension.is_empty() {
                    writeln!(self.out, " Extension: {}", report.extension)?;
                }
                if let Some(length) = report.length {
                    writeln!(self.out, "      Size: {length}")?;
                }
                writeln!(self.out, "Attributes: {}", report.attributes)?;
                writeln!(self.out, "   Created: {}", report.created.format(TIME_FORMAT))?;
                writeln!(self.out, "  Accessed: {}", report.accessed.format(TIME_FORMAT))?;
                writeln!(self.out, "  Modified: {}", report.modified.format(TIME_FORMAT))
            }
        }
    }

    pub fn print_row(&mut self, row: &ListingRow) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => self.print_json(row),
            OutputFormat::Human => writeln!(self.out, "{} {}", row.kind.tag(), row.path),
        }
    }

    fn print_json<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)
    }
}

impl EntryPrinter<io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
