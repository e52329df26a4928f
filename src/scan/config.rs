//! Configuration for directory scans

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::suffix::SuffixSet;

/// Validated, immutable scan settings.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    root: PathBuf,
    suffixes: SuffixSet,
    recurse: bool,
}

impl ScanConfig {
    /// Build a configuration rooted at an existing directory.
    ///
    /// The root is made absolute against the current directory without resolving
    /// symlinks, so every path the scan yields is absolute too.
    pub fn new(root: &Path, suffixes: SuffixSet, recurse: bool) -> Result<Self> {
        let root = std::path::absolute(root).map_err(|source| Error::InvalidPath {
            path: root.to_path_buf(),
            source,
        })?;

        match fs::metadata(&root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(Error::NotADirectory(root)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::DirectoryNotFound(root));
            }
            Err(e) if e.kind() == ErrorKind::NotADirectory => {
                return Err(Error::NotADirectory(root));
            }
            Err(e) => return Err(Error::io(root, e)),
        }

        Ok(Self {
            root,
            suffixes,
            recurse,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn suffixes(&self) -> &SuffixSet {
        &self.suffixes
    }

    pub fn recurse(&self) -> bool {
        self.recurse
    }
}
