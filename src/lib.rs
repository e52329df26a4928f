//! mkm3u - Build an M3U playlist from the media files in a directory tree

pub mod error;
pub mod playlist;
pub mod scan;
pub mod suffix;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use playlist::{OutputSink, PlaylistWriter, generate_m3u, write_playlist};
pub use scan::{MediaWalker, ScanConfig, SuffixFilter};
pub use suffix::{NamedSet, SuffixSet, resolve_suffixes};
