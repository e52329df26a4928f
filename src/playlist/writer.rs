//! Minimal M3U playlist writer

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

pub const M3U_HEADER: &str = "#EXTM3U";

/// Writes the `#EXTM3U` header followed by one path per line.
///
/// No `#EXTINF` lines, no blank lines and no escaping: paths are written as-is.
pub struct PlaylistWriter<W: Write> {
    out: W,
    entries: usize,
}

impl<W: Write> PlaylistWriter<W> {
    /// Wrap `out` and write the header line.
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(out, "{}", M3U_HEADER)?;
        Ok(Self { out, entries: 0 })
    }

    pub fn write_entry(&mut self, path: &Path) -> io::Result<()> {
        write_path(&mut self.out, path)?;
        self.out.write_all(b"\n")?;
        self.entries += 1;
        Ok(())
    }

    /// Flush and hand back the sink together with the number of entries written.
    pub fn finish(mut self) -> io::Result<(W, usize)> {
        self.out.flush()?;
        debug!("wrote {} playlist entries", self.entries);
        Ok((self.out, self.entries))
    }
}

#[cfg(unix)]
fn write_path<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    out.write_all(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn write_path<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    write!(out, "{}", path.display())
}

/// Stream `paths` into a playlist on `out`, stopping at the first error.
///
/// `sink_name` labels write failures (a file path, or "<stdout>").
pub fn write_playlist<W, I>(out: W, sink_name: &Path, paths: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Result<PathBuf>>,
{
    let write_err = |e| Error::io(sink_name, e);
    let mut writer = PlaylistWriter::new(out).map_err(write_err)?;
    for path in paths {
        writer.write_entry(&path?).map_err(write_err)?;
    }
    let (_, entries) = writer.finish().map_err(write_err)?;
    Ok(entries)
}

/// Render a complete playlist in memory.
pub fn generate_m3u(paths: &[PathBuf]) -> String {
    let mut content = format!("{}\n", M3U_HEADER);
    for path in paths {
        content.push_str(&path.to_string_lossy());
        content.push('\n');
    }
    content
}
