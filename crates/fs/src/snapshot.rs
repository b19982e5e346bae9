use std::{
    fs::{self, Metadata},
    io,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use syswrap_interface::FileAttributes;

/// Metadata captured by a refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Snapshot {
    pub attributes: FileAttributes,
    pub length: u64,
    pub created: SystemTime,
    pub accessed: SystemTime,
    pub modified: SystemTime,
}

/// What an accessor currently knows about its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum State {
    /// Never refreshed, or a setter dropped the snapshot.
    Stale,
    /// Nothing existed at the path when last refreshed.
    Missing,
    Present(Snapshot),
}

/// Query the OS for `path`. A missing entry is a state, not an error.
pub(crate) fn load(path: &Path) -> io::Result<State> {
    let link = match fs::symlink_metadata(path) {
        Ok(m) => m,
        // A path running through a file is just as absent.
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
            return Ok(State::Missing);
        }
        Err(e) => return Err(e),
    };

    // Report the target for symlinks; dangling links fall back to the link.
    let meta = if link.file_type().is_symlink() {
        fs::metadata(path).unwrap_or_else(|_| link.clone())
    } else {
        link.clone()
    };

    let modified = meta.modified().unwrap_or(UNIX_EPOCH);
    // Birth time is missing on plenty of Linux filesystems; fall back to the
    // write time rather than failing the whole refresh.
    let created = meta.created().unwrap_or(modified);
    let accessed = meta.accessed().unwrap_or(modified);

    Ok(State::Present(Snapshot {
        attributes: attributes_of(path, &link, &meta),
        length: if meta.is_dir() { 0 } else { meta.len() },
        created,
        accessed,
        modified,
    }))
}

#[cfg(windows)]
fn attributes_of(_path: &Path, link: &Metadata, _meta: &Metadata) -> FileAttributes {
    use std::os::windows::fs::MetadataExt;

    FileAttributes::from_bits_retain(link.file_attributes())
}

#[cfg(not(windows))]
fn attributes_of(path: &Path, link: &Metadata, meta: &Metadata) -> FileAttributes {
    let mut attrs = FileAttributes::empty();

    if meta.is_dir() {
        attrs |= FileAttributes::DIRECTORY;
    }
    if meta.permissions().readonly() {
        attrs |= FileAttributes::READ_ONLY;
    }
    if is_dot_name(path) {
        attrs |= FileAttributes::HIDDEN;
    }
    if link.file_type().is_symlink() {
        attrs |= FileAttributes::REPARSE_POINT;
    }
    if attrs.is_empty() {
        attrs = FileAttributes::NORMAL;
    }

    attrs
}

#[cfg(not(windows))]
fn is_dot_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.') && n != "." && n != "..")
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
