//! Output destinations for playlists

use std::fs::File;
use std::io::{self, BufWriter, StdoutLock, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Where a playlist is written: standard output or a file.
///
/// Both variants are buffered; dropping the sink closes the file.
pub enum OutputSink {
    Stdout(BufWriter<StdoutLock<'static>>),
    File(BufWriter<File>),
}

impl OutputSink {
    /// Bind to stdout when `path` is `None`, otherwise create or truncate the file.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            None => Ok(Self::stdout()),
            Some(path) => {
                let file = File::create(path).map_err(|e| Error::io(path, e))?;
                Ok(Self::File(BufWriter::new(file)))
            }
        }
    }

    pub fn stdout() -> Self {
        Self::Stdout(BufWriter::new(io::stdout().lock()))
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(out) => out.write(buf),
            Self::File(out) => out.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(out) => out.flush(),
            Self::File(out) => out.flush(),
        }
    }
}
