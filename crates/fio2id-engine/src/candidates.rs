// Candidate sources for unknown slots.
//
// Each slot has its own ordered list of substitution values: the built-in
// single-letter alphabet, or a wordlist loaded once at startup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use fio2id_core::SlotIndex;
use fio2id_core::slot::SLOT_COUNT;
use tracing::{info, warn};

/// Default substitution values: single lowercase Latin letters without
/// `q`, `w` and `x`.
pub const DEFAULT_ALPHABET: [&str; 23] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "r", "s",
    "t", "u", "v", "y", "z",
];

/// Failure to load a wordlist. Always fatal, raised before any line is read.
#[derive(Debug, thiserror::Error)]
pub enum CandidateSourceError {
    #[error("wordlist {} not found", .path.display())]
    NotFound { path: PathBuf },
    #[error("no access to wordlist {}", .path.display())]
    PermissionDenied { path: PathBuf },
    #[error("wordlist {} is a directory", .path.display())]
    IsDirectory { path: PathBuf },
    #[error("wordlist {} is not valid UTF-8", .path.display())]
    InvalidUtf8 { path: PathBuf },
    #[error("failed to read wordlist {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl CandidateSourceError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::IsADirectory => Self::IsDirectory { path },
            _ => Self::Io { path, source },
        }
    }

    /// Path of the wordlist that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::PermissionDenied { path }
            | Self::IsDirectory { path }
            | Self::InvalidUtf8 { path }
            | Self::Io { path, .. } => path,
        }
    }
}

/// Where a candidate list came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOrigin {
    Alphabet,
    Wordlist(PathBuf),
    Inline,
}

/// An ordered list of substitution values for one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSource {
    origin: CandidateOrigin,
    values: Vec<String>,
}

impl CandidateSource {
    /// The 23-letter default alphabet.
    pub fn default_alphabet() -> Self {
        Self {
            origin: CandidateOrigin::Alphabet,
            values: DEFAULT_ALPHABET.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// An in-memory list, kept in the given order.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            origin: CandidateOrigin::Inline,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a line-based wordlist.
    ///
    /// Trailing whitespace is trimmed and blank lines are skipped; order is
    /// preserved and duplicates are kept.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CandidateSourceError> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(CandidateSourceError::IsDirectory {
                path: path.to_path_buf(),
            });
        }
        let bytes = fs::read(path).map_err(|e| CandidateSourceError::from_io(path, e))?;
        let text = String::from_utf8(bytes).map_err(|_| CandidateSourceError::InvalidUtf8 {
            path: path.to_path_buf(),
        })?;

        let values = parse_wordlist(&text);
        if values.is_empty() {
            warn!(path = %path.display(), "wordlist is empty; lines needing it produce nothing");
        }
        info!(path = %path.display(), candidates = values.len(), "loaded wordlist");

        Ok(Self {
            origin: CandidateOrigin::Wordlist(path.to_path_buf()),
            values,
        })
    }

    pub fn origin(&self) -> &CandidateOrigin {
        &self.origin
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for CandidateSource {
    fn default() -> Self {
        Self::default_alphabet()
    }
}

/// Split wordlist text into candidates.
pub fn parse_wordlist(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// One candidate source per name slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSources {
    slots: [CandidateSource; SLOT_COUNT],
}

impl CandidateSources {
    pub fn new(first: CandidateSource, second: CandidateSource, third: CandidateSource) -> Self {
        Self {
            slots: [first, second, third],
        }
    }

    pub fn for_slot(&self, slot: SlotIndex) -> &CandidateSource {
        &self.slots[slot.offset()]
    }

    pub fn set(&mut self, slot: SlotIndex, source: CandidateSource) {
        self.slots[slot.offset()] = source;
    }

    /// Default alphabet for every slot, replaced by a loaded wordlist where a
    /// path is given.
    pub fn load(paths: &[Option<PathBuf>; SLOT_COUNT]) -> Result<Self, CandidateSourceError> {
        let mut sources = Self::default();
        for slot in SlotIndex::ALL {
            if let Some(path) = &paths[slot.offset()] {
                sources.set(slot, CandidateSource::load(path)?);
            }
        }
        Ok(sources)
    }
}

/// Whether unknown slots are enumerated, and from what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// Unknown markers are left in place and reach the output verbatim.
    Disabled,
    Enabled(CandidateSources),
}

impl Default for Expansion {
    fn default() -> Self {
        Expansion::Enabled(CandidateSources::default())
    }
}
