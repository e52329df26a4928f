//! File filtering for directory scans

use std::path::Path;

use crate::suffix::SuffixSet;

/// Filter that admits regular files carrying one of a set of suffixes.
#[derive(Debug, Clone)]
pub struct SuffixFilter(SuffixSet);

impl SuffixFilter {
    pub fn new(suffixes: SuffixSet) -> Self {
        Self(suffixes)
    }

    /// Check if a file path should be included.
    pub fn is_included(&self, path: &Path) -> bool {
        self.0.matches(path)
    }
}
