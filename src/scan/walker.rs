//! MediaWalker - lazily yields matching files, depth-first in listing order

use std::fs::{self, DirEntry, ReadDir};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Error, Result};

use super::config::ScanConfig;
use super::filter::SuffixFilter;

/// An open directory listing and the directory it belongs to.
struct OpenDir {
    path: PathBuf,
    entries: ReadDir,
}

enum EntryKind {
    File,
    Dir,
    Other,
}

/// Streaming scan over a directory tree.
///
/// Holds one open listing per directory level. Entries come out in the order
/// the OS lists them; a subdirectory's contents are yielded in place of the
/// subdirectory itself. The first I/O error is yielded once, after which the
/// walker is exhausted.
pub struct MediaWalker {
    filter: SuffixFilter,
    recurse: bool,
    stack: Vec<OpenDir>,
    pending_root: Option<PathBuf>,
}

impl MediaWalker {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            filter: SuffixFilter::new(config.suffixes().clone()),
            recurse: config.recurse(),
            stack: Vec::new(),
            pending_root: Some(config.root().to_path_buf()),
        }
    }

    /// Drain the walker, stopping at the first error.
    pub fn collect_paths(self) -> Result<Vec<PathBuf>> {
        self.collect()
    }

    fn open(&mut self, path: PathBuf) -> Result<()> {
        debug!("scanning {}", path.display());
        let entries = fs::read_dir(&path).map_err(|e| Error::io(&path, e))?;
        self.stack.push(OpenDir { path, entries });
        Ok(())
    }

    fn fail(&mut self, err: Error) -> Option<Result<PathBuf>> {
        self.stack.clear();
        self.pending_root = None;
        Some(Err(err))
    }
}

/// Classify an entry, following symlinks to their target.
///
/// Dangling and looping symlinks are neither files nor directories. Any other
/// failure to read the target's metadata is an error.
fn classify(entry: &DirEntry, path: &Path) -> Result<EntryKind> {
    let file_type = entry.file_type().map_err(|e| Error::io(path, e))?;
    let file_type = if file_type.is_symlink() {
        match fs::metadata(path) {
            Ok(meta) => meta.file_type(),
            Err(e) if is_unresolvable_link(&e) => return Ok(EntryKind::Other),
            Err(e) => return Err(Error::io(path, e)),
        }
    } else {
        file_type
    };

    Ok(if file_type.is_file() {
        EntryKind::File
    } else if file_type.is_dir() {
        EntryKind::Dir
    } else {
        EntryKind::Other
    })
}

/// Errors that mean a symlink points nowhere usable rather than that it could not be read.
fn is_unresolvable_link(err: &io::Error) -> bool {
    matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) || is_link_loop(err)
}

#[cfg(unix)]
fn is_link_loop(err: &io::Error) -> bool {
    err.raw_os_error() == Some(libc::ELOOP)
}

#[cfg(not(unix))]
fn is_link_loop(_: &io::Error) -> bool {
    false
}

impl Iterator for MediaWalker {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.pending_root.take() {
            if let Err(e) = self.open(root) {
                return self.fail(e);
            }
        }

        loop {
            let top = self.stack.last_mut()?;
            let entry = match top.entries.next() {
                Some(Ok(entry)) => entry,
                Some(Err(e)) => {
                    let err = Error::io(&top.path, e);
                    return self.fail(err);
                }
                None => {
                    self.stack.pop();
                    continue;
                }
            };

            let path = entry.path();
            match classify(&entry, &path) {
                Ok(EntryKind::File) if self.filter.is_included(&path) => {
                    trace!("matched {}", path.display());
                    return Some(Ok(path));
                }
                Ok(EntryKind::Dir) if self.recurse => {
                    if let Err(e) = self.open(path) {
                        return self.fail(e);
                    }
                }
                Ok(_) => {}
                Err(e) => return self.fail(e),
            }
        }
    }
}
