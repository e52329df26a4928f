//! Error type shared by every stage of a playlist run

use std::io;
use std::path::PathBuf;

/// Errors that end a run. None of them are recovered locally.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("'{}' cannot be made into a path: {source}", path.display())]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("{0:?} cannot be made into a set of suffixes")]
    InvalidSuffixList(String),

    #[error("'{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
