// Generator configuration.

use std::path::PathBuf;

use fio2id_core::SlotIndex;
use fio2id_core::slot::SLOT_COUNT;
use fio2id_translit::{SchemeId, SchemeSet};

use crate::candidates::{CandidateSourceError, CandidateSources, Expansion};

/// Everything the engine needs for a run.
///
/// Built by the command-line layer; the engine never reads flags or the
/// environment itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Identifier pattern, e.g. `{3}_{1:.1}{2:.1}@example.ru`.
    pub pattern: String,
    /// Enumerate unknown slots. When off, `?` reaches the output verbatim.
    pub expand: bool,
    /// Optional wordlist per slot; the default alphabet is used otherwise.
    pub wordlists: [Option<PathBuf>; SLOT_COUNT],
    /// Schemes to apply, in order. Empty means all 16.
    pub schemes: Vec<SchemeId>,
}

impl GeneratorConfig {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            expand: true,
            wordlists: Default::default(),
            schemes: SchemeId::ALL.to_vec(),
        }
    }

    #[must_use]
    pub fn with_expansion(mut self, enabled: bool) -> Self {
        self.expand = enabled;
        self
    }

    #[must_use]
    pub fn with_wordlist(mut self, slot: SlotIndex, path: impl Into<PathBuf>) -> Self {
        self.wordlists[slot.offset()] = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_schemes(mut self, schemes: Vec<SchemeId>) -> Self {
        self.schemes = schemes;
        self
    }

    /// Load candidate sources. Wordlists are not read when expansion is off.
    pub fn load_expansion(&self) -> Result<Expansion, CandidateSourceError> {
        if !self.expand {
            return Ok(Expansion::Disabled);
        }
        CandidateSources::load(&self.wordlists).map(Expansion::Enabled)
    }

    pub fn scheme_set(&self) -> SchemeSet {
        if self.schemes.is_empty() {
            SchemeSet::all()
        } else {
            SchemeSet::select(&self.schemes)
        }
    }
}
