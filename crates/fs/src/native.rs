use std::{fs, io, path::Path, time::SystemTime};

use filetime::FileTime;
use syswrap_interface::FileAttributes;

/// Flags `SetFileAttributesW` accepts; the OS owns the rest.
#[cfg(windows)]
const SETTABLE: FileAttributes = FileAttributes::READ_ONLY
    .union(FileAttributes::HIDDEN)
    .union(FileAttributes::SYSTEM)
    .union(FileAttributes::ARCHIVE)
    .union(FileAttributes::NORMAL)
    .union(FileAttributes::TEMPORARY)
    .union(FileAttributes::OFFLINE)
    .union(FileAttributes::NOT_CONTENT_INDEXED);

/// Write `attributes` through the OS attribute call.
#[cfg(windows)]
pub(crate) fn set_attributes(path: &Path, attributes: FileAttributes) -> io::Result<()> {
    use std::{iter, os::windows::ffi::OsStrExt};

    use windows_sys::Win32::Storage::FileSystem::SetFileAttributesW;

    let mut bits = attributes & SETTABLE;
    if bits.is_empty() {
        bits = FileAttributes::NORMAL;
    }
    let wide: Vec<u16> = path
        .as_os_str()
        .encode_wide()
        .chain(iter::once(0))
        .collect();

    // SAFETY: `wide` is NUL-terminated and outlives the call.
    let ok = unsafe { SetFileAttributesW(wide.as_ptr(), bits.bits()) };
    if ok == 0 {
        Err(io::Error::last_os_error())
    } else {
        Ok(())
    }
}

/// Apply the part of `attributes` the platform can store.
///
/// Only `READ_ONLY` survives the trip; the OS derives the rest.
#[cfg(not(windows))]
pub(crate) fn set_attributes(path: &Path, attributes: FileAttributes) -> io::Result<()> {
    let mut perms = fs::metadata(path)?.permissions();
    set_read_only(&mut perms, attributes.is_read_only());
    fs::set_permissions(path, perms)
}

#[cfg(unix)]
fn set_read_only(perms: &mut fs::Permissions, read_only: bool) {
    use std::os::unix::fs::PermissionsExt;

    let mode = perms.mode();
    // Clearing read-only restores the owner write bit only.
    let mode = if read_only { mode & !0o222 } else { mode | 0o200 };
    perms.set_mode(mode);
}

#[cfg(not(any(unix, windows)))]
fn set_read_only(perms: &mut fs::Permissions, read_only: bool) {
    perms.set_readonly(read_only);
}

pub(crate) fn set_accessed(path: &Path, time: SystemTime) -> io::Result<()> {
    filetime::set_file_atime(path, FileTime::from_system_time(time))
}

pub(crate) fn set_modified(path: &Path, time: SystemTime) -> io::Result<()> {
    filetime::set_file_mtime(path, FileTime::from_system_time(time))
}

#[cfg(windows)]
pub(crate) fn set_created(path: &Path, time: SystemTime) -> io::Result<()> {
    use std::{
        fs::FileTimes,
        os::windows::fs::{FileTimesExt, OpenOptionsExt},
    };

    const FILE_WRITE_ATTRIBUTES: u32 = 0x0100;
    const FILE_FLAG_BACKUP_SEMANTICS: u32 = 0x0200_0000;

    // Backup semantics lets the same call open directories.
    let file = fs::OpenOptions::new()
        .access_mode(FILE_WRITE_ATTRIBUTES)
        .custom_flags(FILE_FLAG_BACKUP_SEMANTICS)
        .open(path)?;
    file.set_times(FileTimes::new().set_created(time))
}

#[cfg(target_os = "macos")]
pub(crate) fn set_created(path: &Path, time: SystemTime) -> io::Result<()> {
    use std::{fs::FileTimes, os::macos::fs::FileTimesExt};

    let file = fs::File::open(path)?;
    file.set_times(FileTimes::new().set_created(time))
}

#[cfg(not(any(windows, target_os = "macos")))]
pub(crate) fn set_created(path: &Path, _time: SystemTime) -> io::Result<()> {
    // Still report a missing entry as such before refusing.
    fs::symlink_metadata(path)?;
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "creation time cannot be set on this platform",
    ))
}

#[cfg(test)]
#[path = "native_tests.rs"]
mod tests;
