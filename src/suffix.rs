//! Suffix sets used to decide which files belong in a playlist
//!
//! A suffix includes its leading dot (".mp4") and is compared case-sensitively.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

pub const VIDEO_SUFFIXES: &[&str] = &[
    ".mkv", ".mp4", ".avi", ".webm", ".wmv", ".mpg", ".flv", ".vob", ".divx", ".asf", ".mov",
    ".mpeg", ".m4v",
];

pub const AUDIO_SUFFIXES: &[&str] = &[".opus", ".mp3", ".wav", ".mka", ".ogg", ".ac3", ".aif"];

pub const IMAGE_SUFFIXES: &[&str] = &[".jpg", ".png", ".jpeg", ".svg", ".jp2", ".gif"];

/// Built-in suffix sets selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamedSet {
    #[default]
    Video,
    Audio,
    Image,
}

impl NamedSet {
    pub fn suffixes(self) -> &'static [&'static str] {
        match self {
            NamedSet::Video => VIDEO_SUFFIXES,
            NamedSet::Audio => AUDIO_SUFFIXES,
            NamedSet::Image => IMAGE_SUFFIXES,
        }
    }

    pub fn to_set(self) -> SuffixSet {
        self.suffixes().iter().copied().collect()
    }
}

/// Set of unique suffixes. Iteration is sorted, membership is exact.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuffixSet(BTreeSet<String>);

impl SuffixSet {
    /// Parse a comma-separated list.
    ///
    /// Items are neither trimmed nor required to start with a dot. An empty item
    /// (from a trailing comma, say) is kept and matches files without a suffix.
    pub fn parse(list: &str) -> Self {
        list.split(',').collect()
    }

    /// Like [`SuffixSet::parse`], for raw command-line input.
    pub fn parse_os(list: &OsStr) -> Result<Self> {
        list.to_str()
            .map(Self::parse)
            .ok_or_else(|| Error::InvalidSuffixList(list.to_string_lossy().into_owned()))
    }

    pub fn contains(&self, suffix: &str) -> bool {
        self.0.contains(suffix)
    }

    /// Check whether the final component of `path` carries one of the suffixes.
    pub fn matches(&self, path: &Path) -> bool {
        self.contains(&file_suffix(path))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SuffixSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for SuffixSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, suffix) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", suffix)?;
        }
        write!(f, "}}")
    }
}

/// Suffix of the final path component, dot included.
///
/// Empty when the name has no dot, when its only dot is the first character
/// (".bashrc"), or when it ends with a dot ("a.").
pub fn file_suffix(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();
    match name.rfind('.') {
        Some(i) if i > 0 && i < name.len() - 1 => name[i..].to_string(),
        _ => String::new(),
    }
}

/// Pick the active suffix set.
///
/// `named` must be in command-line order. An explicit custom list always wins;
/// otherwise the last named selector wins; otherwise video.
pub fn resolve_suffixes(
    custom: Option<SuffixSet>,
    named: impl IntoIterator<Item = NamedSet>,
) -> SuffixSet {
    if let Some(custom) = custom {
        return custom;
    }
    named.into_iter().last().unwrap_or_default().to_set()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_items_verbatim() {
        let set = SuffixSet::parse(".foo, .bar,baz");
        assert_eq!(set.len(), 3);
        assert!(set.contains(".foo"));
        assert!(set.contains(" .bar"));
        assert!(set.contains("baz"));
        assert!(!set.contains(".bar"));
    }

    #[test]
    fn test_parse_dedupes() {
        let set = SuffixSet::parse(".mp3,.mp3,.ogg");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_trailing_comma_matches_extensionless_files() {
        let set = SuffixSet::parse(".txt,");
        assert!(set.contains(""));
        assert!(set.matches(Path::new("/tmp/README")));
        assert!(set.matches(Path::new("/tmp/notes.txt")));
        assert!(!set.matches(Path::new("/tmp/clip.mp4")));
    }

    #[cfg(unix)]
    #[test]
    fn test_parse_os_rejects_non_utf8() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b".mp\xff4");
        assert!(matches!(
            SuffixSet::parse_os(raw),
            Err(Error::InvalidSuffixList(_))
        ));
        assert_eq!(
            SuffixSet::parse_os(OsStr::new(".a,.b")).unwrap(),
            SuffixSet::parse(".a,.b")
        );
    }

    #[test]
    fn test_file_suffix() {
        assert_eq!(file_suffix(Path::new("movie.mp4")), ".mp4");
        assert_eq!(file_suffix(Path::new("/a/b/archive.tar.gz")), ".gz");
        assert_eq!(file_suffix(Path::new("README")), "");
        assert_eq!(file_suffix(Path::new(".bashrc")), "");
        assert_eq!(file_suffix(Path::new("odd.")), "");
        assert_eq!(file_suffix(Path::new("..")), "");
        assert_eq!(file_suffix(Path::new("/")), "");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let set = NamedSet::Video.to_set();
        assert!(set.matches(Path::new("a.mkv")));
        assert!(!set.matches(Path::new("a.MKV")));
    }

    #[test]
    fn test_named_sets() {
        assert_eq!(NamedSet::Video.to_set().len(), 13);
        assert_eq!(NamedSet::Audio.to_set().len(), 7);
        assert_eq!(NamedSet::Image.to_set().len(), 6);
        assert!(NamedSet::Audio.to_set().contains(".opus"));
        assert!(NamedSet::Image.to_set().contains(".jp2"));
    }

    #[test]
    fn test_resolve_defaults_to_video() {
        assert_eq!(resolve_suffixes(None, []), NamedSet::Video.to_set());
    }

    #[test]
    fn test_resolve_last_named_wins() {
        let set = resolve_suffixes(None, [NamedSet::Audio, NamedSet::Image]);
        assert_eq!(set, NamedSet::Image.to_set());
        let set = resolve_suffixes(None, [NamedSet::Image, NamedSet::Audio]);
        assert_eq!(set, NamedSet::Audio.to_set());
    }

    #[test]
    fn test_resolve_custom_always_wins() {
        let custom = SuffixSet::parse(".foo");
        let set = resolve_suffixes(Some(custom.clone()), [NamedSet::Video]);
        assert_eq!(set, custom);
        let set = resolve_suffixes(Some(custom.clone()), [NamedSet::Audio, NamedSet::Video]);
        assert_eq!(set, custom);
    }

    #[test]
    fn test_display_is_sorted() {
        let set = SuffixSet::parse(".ogg,.mp3");
        assert_eq!(set.to_string(), "{.mp3, .ogg}");
    }
}
