//! Directory scanning
//!
//! `MediaWalker` lists a root directory (and optionally every directory below
//! it) and yields the absolute paths of files whose suffix is in the active set.
//! Listings are consumed as they are read, so memory grows with tree depth,
//! not with the number of files.

mod config;
mod filter;
mod walker;

pub use config::ScanConfig;
pub use filter::SuffixFilter;
pub use walker::MediaWalker;
