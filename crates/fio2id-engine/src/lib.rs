//! Name-to-identifier generation engine.
//!
//! Turns a name line such as `Иван Николаевич Городецкий` into candidate
//! identifiers such as `gorodeckii_in@example.ru` by running five stages in
//! sequence, each consuming the full output of the previous one:
//!
//! 1. [`pattern`] -- parse the pattern and validate the referenced slots
//! 2. [`normalize`] -- split the line into a four-slot record
//! 3. [`expand`] -- enumerate unknown (`?`) slots from [`candidates`]
//! 4. [`translit`] -- fan out over every romanization scheme and sanitize
//! 5. [`format`] -- render identifiers, deduplicate, sort
//!
//! [`generator::IdentifierGenerator`] wires the stages together;
//! [`direct`] provides the pattern-less whole-line transliteration mode.

pub mod candidates;
pub mod config;
pub mod direct;
pub mod expand;
pub mod format;
pub mod generator;
pub mod normalize;
pub mod pattern;
pub mod translit;

pub use candidates::{CandidateSource, CandidateSourceError, CandidateSources, Expansion};
pub use config::GeneratorConfig;
pub use generator::IdentifierGenerator;
pub use pattern::{Pattern, PatternError};

/// Fatal generator errors.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The pattern is malformed or cannot be applied.
    #[error("invalid pattern {pattern:?}")]
    Pattern {
        pattern: String,
        #[source]
        source: PatternError,
    },

    /// A configured wordlist could not be loaded.
    #[error(transparent)]
    CandidateSource(#[from] CandidateSourceError),
}
