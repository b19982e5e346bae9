use std::{
    fs::{self, ReadDir},
    path::{Path, PathBuf},
};

use log::{trace, warn};
use syswrap_interface::{FsError, FsResult, SearchOption};

use crate::pattern::NamePattern;

/// Which entry kinds a walk yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Wanted {
    Files,
    Directories,
    Both,
}

/// A matched child, before it is bound to an accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Found {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Lazy depth-first walk over a directory.
///
/// Subdirectories are opened only when the walk reaches them. Errors opening
/// or reading a nested directory are yielded as items and the walk carries on
/// with the rest of the tree. Symlinked directories are reported but never
/// descended into.
pub(crate) struct EntryWalker {
    pattern: NamePattern,
    wanted: Wanted,
    recursive: bool,
    stack: Vec<(PathBuf, ReadDir)>,
    pending: Option<FsError>,
}

impl EntryWalker {
    /// Open `root`. Failure to read the root itself is returned here rather
    /// than from the first `next()`.
    pub(crate) fn open(
        root: &Path,
        pattern: NamePattern,
        wanted: Wanted,
        option: SearchOption,
    ) -> FsResult<Self> {
        trace!(
            "[walk] {:?} pattern={:?} wanted={:?} option={:?}",
            root,
            pattern.as_str(),
            wanted,
            option
        );
        let rd = fs::read_dir(root).map_err(|e| FsError::from_io("enumerate", root, e))?;

        Ok(Self {
            pattern,
            wanted,
            recursive: option.is_recursive(),
            stack: vec![(root.to_path_buf(), rd)],
            pending: None,
        })
    }

    fn wants(&self, is_dir: bool) -> bool {
        match self.wanted {
            Wanted::Files => !is_dir,
            Wanted::Directories => is_dir,
            Wanted::Both => true,
        }
    }

    fn descend(&mut self, dir: PathBuf) {
        match fs::read_dir(&dir) {
            Ok(rd) => self.stack.push((dir, rd)),
            Err(e) => {
                warn!("[walk] read_dir({:?}) failed: {e}", dir);
                self.pending = Some(FsError::from_io("enumerate", dir, e));
            }
        }
    }
}

impl Iterator for EntryWalker {
    type Item = FsResult<Found>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(err) = self.pending.take() {
                return Some(Err(err));
            }

            let next = {
                let (dir, rd) = self.stack.last_mut()?;
                rd.next()
                    .map(|res| res.map_err(|e| FsError::from_io("enumerate", dir.clone(), e)))
            };

            let entry = match next {
                None => {
                    self.stack.pop();
                    continue;
                }
                Some(Err(e)) => return Some(Err(e)),
                Some(Ok(entry)) => entry,
            };

            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(ft) => ft,
                Err(e) => return Some(Err(FsError::from_io("enumerate", path, e))),
            };

            // A symlink counts as whatever it points at; dangling links are files.
            let is_dir = file_type.is_dir() || (file_type.is_symlink() && path.is_dir());

            if self.recursive && file_type.is_dir() {
                self.descend(path.clone());
            }

            let name = entry.file_name();
            if self.wants(is_dir) && self.pattern.is_match(&name.to_string_lossy()) {
                return Some(Ok(Found { path, is_dir }));
            }
        }
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
