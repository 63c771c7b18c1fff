// IdentifierGenerator: the five-stage pipeline behind one handle.
//
// Construction does all fallible setup (pattern analysis, wordlist loading)
// so that per-line generation only fails on an internally inconsistent
// pattern. The generator is immutable after construction and can be shared
// across threads when its schemes can.

use fio2id_translit::{Schema, Transliterate};
use tracing::{debug, trace};

use crate::GenerateError;
use crate::candidates::Expansion;
use crate::config::GeneratorConfig;
use crate::expand::{expand_record, expansion_plan, expansion_size};
use crate::format::format_identifiers;
use crate::normalize::normalize_line;
use crate::pattern::{Pattern, describe_slots};
use crate::translit::transliterate_records;

/// Turns name lines into candidate identifiers.
pub struct IdentifierGenerator<T = Schema> {
    pattern: Pattern,
    expansion: Expansion,
    schemes: Vec<T>,
}

impl IdentifierGenerator<Schema> {
    /// Validate the pattern and load candidate sources.
    ///
    /// Pattern errors are reported before wordlist errors.
    pub fn new(config: &GeneratorConfig) -> Result<Self, GenerateError> {
        let pattern = Pattern::parse(&config.pattern).map_err(|source| GenerateError::Pattern {
            pattern: config.pattern.clone(),
            source,
        })?;
        let expansion = config.load_expansion()?;
        let schemes = config.scheme_set().into_vec();

        debug!(
            pattern = %pattern,
            slots = %describe_slots(pattern.referenced()),
            schemes = schemes.len(),
            expand = config.expand,
            "generator ready"
        );
        Ok(Self::with_parts(pattern, expansion, schemes))
    }
}

impl<T: Transliterate> IdentifierGenerator<T> {
    /// Assemble a generator from already-built parts.
    pub fn with_parts(pattern: Pattern, expansion: Expansion, schemes: Vec<T>) -> Self {
        Self {
            pattern,
            expansion,
            schemes,
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn expansion(&self) -> &Expansion {
        &self.expansion
    }

    pub fn schemes(&self) -> &[T] {
        &self.schemes
    }

    /// Identifiers for one input line, sorted and unique. Blank lines give
    /// an empty list.
    pub fn generate(&self, line: &str) -> Result<Vec<String>, GenerateError> {
        if line.trim().is_empty() {
            return Ok(Vec::new());
        }
        let referenced = self.pattern.referenced();

        let record = normalize_line(line, referenced);
        trace!(?record, "normalized");

        let plan = expansion_plan(&record, referenced, &self.expansion);
        let expanded = expand_record(&record, referenced, &self.expansion);
        debug!(
            unknown_slots = plan.len(),
            expected = expansion_size(&plan),
            records = expanded.len(),
            "expanded"
        );

        let variants = transliterate_records(&expanded, &self.schemes);
        debug!(variants = variants.len(), "transliterated");

        let identifiers =
            format_identifiers(&variants, &self.pattern).map_err(|source| GenerateError::Pattern {
                pattern: self.pattern.as_str().to_string(),
                source,
            })?;
        debug!(identifiers = identifiers.len(), "formatted");
        Ok(identifiers)
    }

    /// Run [`generate`](Self::generate) over many lines, in order. Stops at
    /// the first error.
    pub fn generate_all<'a, I>(&self, lines: I) -> Result<Vec<Vec<String>>, GenerateError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines.into_iter().map(|line| self.generate(line)).collect()
    }
}
