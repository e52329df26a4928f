//! M3U playlist output
//!
//! `OutputSink` binds the destination; `PlaylistWriter` renders the header and
//! one absolute path per line as the scan produces them.

mod sink;
mod writer;

pub use sink::OutputSink;
pub use writer::{M3U_HEADER, PlaylistWriter, generate_m3u, write_playlist};
