use std::{
    fs::Metadata,
    io,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard, PoisonError},
    time::SystemTime,
};

use chrono::{DateTime, Utc};
use log::debug;
use syswrap_interface::{FileAttributes, FsError, FsResult};

use crate::{
    native,
    snapshot::{self, Snapshot, State},
};

/// Path-derived fields plus the cached snapshot shared by the file and
/// directory accessors.
#[derive(Debug)]
pub(crate) struct EntryCore {
    original: PathBuf,
    full: PathBuf,
    name: String,
    extension: String,
    state: Mutex<State>,
}

impl EntryCore {
    /// Derive everything from `path` without touching the filesystem, apart
    /// from reading the current directory for relative paths.
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        let original = path.into();
        let full = absolute(&original);
        let name = name_of(&full);
        let extension = extension_of(&name).to_owned();
        Self {
            original,
            full,
            name,
            extension,
            state: Mutex::new(State::Stale),
        }
    }

    pub(crate) fn full(&self) -> &Path {
        &self.full
    }

    pub(crate) fn original(&self) -> &Path {
        &self.original
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn extension(&self) -> &str {
        &self.extension
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Live check that something of the wrapper's kind is at the path.
    /// Symlinks count as their target; a dangling link as itself.
    pub(crate) fn exists(&self, is_kind: fn(&Metadata) -> bool) -> bool {
        self.full
            .metadata()
            .or_else(|_| self.full.symlink_metadata())
            .is_ok_and(|meta| is_kind(&meta))
    }

    pub(crate) fn refresh(&self) -> FsResult<()> {
        let state = snapshot::load(&self.full).map_err(|e| self.error("refresh", e))?;
        *self.lock() = state;
        Ok(())
    }

    /// Drop the snapshot so the next read goes back to the OS.
    pub(crate) fn invalidate(&self) {
        *self.lock() = State::Stale;
    }

    /// Read from the snapshot, taking one first if there is none yet.
    pub(crate) fn read<T>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&Snapshot) -> T,
    ) -> FsResult<T> {
        let mut state = self.lock();
        if *state == State::Stale {
            *state = snapshot::load(&self.full).map_err(|e| self.error(operation, e))?;
        }
        match &*state {
            State::Present(snap) => Ok(f(snap)),
            State::Missing | State::Stale => Err(FsError::not_found(operation, &self.full)),
        }
    }

    pub(crate) fn attributes(&self) -> FsResult<FileAttributes> {
        self.read("attributes", |s| s.attributes)
    }

    pub(crate) fn set_attributes(&self, attributes: FileAttributes) -> FsResult<()> {
        debug!("[fs] set_attributes {:?} {}", self.full, attributes.describe());
        let result = native::set_attributes(&self.full, attributes);
        self.invalidate();
        result.map_err(|e| match e.kind() {
            // Changing attributes of something that is not there is an
            // access failure, not a lookup failure.
            io::ErrorKind::NotFound => FsError::Access {
                operation: "set_attributes",
                path: self.full.clone(),
                source: e,
            },
            _ => self.error("set_attributes", e),
        })
    }

    pub(crate) fn time(
        &self,
        operation: &'static str,
        pick: fn(&Snapshot) -> SystemTime,
    ) -> FsResult<DateTime<Utc>> {
        self.read(operation, |s| DateTime::<Utc>::from(pick(s)))
    }

    pub(crate) fn set_time(
        &self,
        operation: &'static str,
        set: fn(&Path, SystemTime) -> io::Result<()>,
        time: DateTime<Utc>,
    ) -> FsResult<()> {
        debug!("[fs] {operation} {:?} {}", self.full, time.to_rfc3339());
        let result = set(&self.full, SystemTime::from(time));
        self.invalidate();
        result.map_err(|e| self.error(operation, e))
    }

    /// Run a removal call and drop the snapshot whatever the outcome.
    pub(crate) fn remove(
        &self,
        operation: &'static str,
        remove: fn(&Path) -> io::Result<()>,
    ) -> FsResult<()> {
        debug!("[fs] {operation} {:?}", self.full);
        let result = remove(&self.full);
        self.invalidate();
        result.map_err(|e| self.error(operation, e))
    }

    pub(crate) fn error(&self, operation: &'static str, source: io::Error) -> FsError {
        FsError::from_io(operation, &self.full, source)
    }
}

/// Join relative paths onto the current directory. No `..` resolution and no
/// symlink resolution.
fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Last component, or the whole path for roots such as `/` or `C:\`.
fn name_of(full: &Path) -> String {
    full.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| full.to_string_lossy().into_owned())
}

/// Everything from the last `.` of the name, or empty when there is no dot
/// or the name ends with one. Dot-files count as all extension.
pub(crate) fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) if i + 1 < name.len() => &name[i..],
        _ => "",
    }
}

/// Implements `FileSystemInfo` and `Display` for a wrapper whose `core`
/// field is an [`EntryCore`]. The wrapper supplies `remove_entry` and
/// `is_kind`.
macro_rules! impl_file_system_info {
    ($ty:ty) => {
        impl ::syswrap_interface::FileSystemInfo for $ty {
            fn attributes(&self) -> ::syswrap_interface::FsResult<::syswrap_interface::FileAttributes> {
                self.core.attributes()
            }

            fn set_attributes(
                &self,
                attributes: ::syswrap_interface::FileAttributes,
            ) -> ::syswrap_interface::FsResult<()> {
                self.core.set_attributes(attributes)
            }

            fn creation_time_utc(&self) -> ::syswrap_interface::FsResult<::chrono::DateTime<::chrono::Utc>> {
                self.core.time("creation_time", |s| s.created)
            }

            fn set_creation_time_utc(
                &self,
                time: ::chrono::DateTime<::chrono::Utc>,
            ) -> ::syswrap_interface::FsResult<()> {
                self.core.set_time("set_creation_time", $crate::native::set_created, time)
            }

            fn last_access_time_utc(&self) -> ::syswrap_interface::FsResult<::chrono::DateTime<::chrono::Utc>> {
                self.core.time("last_access_time", |s| s.accessed)
            }

            fn set_last_access_time_utc(
                &self,
                time: ::chrono::DateTime<::chrono::Utc>,
            ) -> ::syswrap_interface::FsResult<()> {
                self.core.set_time("set_last_access_time", $crate::native::set_accessed, time)
            }

            fn last_write_time_utc(&self) -> ::syswrap_interface::FsResult<::chrono::DateTime<::chrono::Utc>> {
                self.core.time("last_write_time", |s| s.modified)
            }

            fn set_last_write_time_utc(
                &self,
                time: ::chrono::DateTime<::chrono::Utc>,
            ) -> ::syswrap_interface::FsResult<()> {
                self.core.set_time("set_last_write_time", $crate::native::set_modified, time)
            }

            fn exists(&self) -> bool {
                self.core.exists(Self::is_kind)
            }

            fn extension(&self) -> String {
                self.core.extension().to_owned()
            }

            fn full_name(&self) -> ::std::path::PathBuf {
                self.core.full().to_path_buf()
            }

            fn name(&self) -> String {
                self.core.name().to_owned()
            }

            fn delete(&self) -> ::syswrap_interface::FsResult<()> {
                self.remove_entry()
            }

            fn refresh(&self) -> ::syswrap_interface::FsResult<()> {
                self.core.refresh()
            }

            fn original_path(&self) -> String {
                self.core.original().to_string_lossy().into_owned()
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.core.original().display())
            }
        }
    };
}

pub(crate) use impl_file_system_info;

#[cfg(test)]
#[path = "info_tests.rs"]
mod tests;
