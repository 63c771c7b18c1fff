//! End-to-end tests: name lines through the full generator.
//!
//! Run: cargo test -p fio2id-engine --test pipeline

use std::fs;

use fio2id_core::SlotIndex;
use fio2id_engine::{CandidateSourceError, GenerateError, GeneratorConfig, IdentifierGenerator};
use fio2id_translit::SchemeId;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const EMAIL_PATTERN: &str = "{3}_{1:.1}{2:.1}@example.ru";

fn generator(config: GeneratorConfig) -> IdentifierGenerator {
    IdentifierGenerator::new(&config).expect("generator")
}

fn assert_sorted_unique(identifiers: &[String]) {
    for pair in identifiers.windows(2) {
        assert!(pair[0] < pair[1], "{:?} not sorted/unique", identifiers);
    }
}

// ---------------------------------------------------------------------------
// Transliteration fan-out
// ---------------------------------------------------------------------------

#[test]
fn full_name_email_without_expansion() {
    let g = generator(GeneratorConfig::new(EMAIL_PATTERN).with_expansion(false));
    let out = g.generate("Иван Николаевич Городецкий").unwrap();

    assert!(out.contains(&"gorodeckii_in@example.ru".to_string()), "{out:?}");
    assert!(out.contains(&"gorodeckij_in@example.ru".to_string()), "{out:?}");
    assert!(out.contains(&"gorodetsky_in@example.ru".to_string()), "{out:?}");
    assert!(out.iter().all(|id| id.ends_with("_in@example.ru")));
    assert!(out.len() <= SchemeId::ALL.len());
    assert_sorted_unique(&out);
}

#[test]
fn output_is_deterministic() {
    let g = generator(GeneratorConfig::new(EMAIL_PATTERN));
    let first = g.generate("Иван Николаевич Городецкий").unwrap();
    let second = g.generate("Иван Николаевич Городецкий").unwrap();
    assert_eq!(first, second);
}

#[test]
fn scheme_selection_narrows_output() {
    let config = GeneratorConfig::new("{1}.{3}")
        .with_expansion(false)
        .with_schemes(vec![SchemeId::Telegram]);
    let out = generator(config).generate("Иван Николаевич Городецкий").unwrap();
    assert_eq!(out, ["ivan.gorodeckii"]);
}

#[test]
fn latin_names_collapse_to_one_identifier() {
    let g = generator(GeneratorConfig::new("{2}.{1}"));
    assert_eq!(g.generate("Matrosov Anton").unwrap(), ["anton.matrosov"]);
}

#[test]
fn sanitizing_drops_disallowed_characters() {
    let g = generator(GeneratorConfig::new("{1}").with_expansion(false));
    assert_eq!(g.generate("O'Neil").unwrap(), ["oneil"]);
}

// ---------------------------------------------------------------------------
// Unknown slots
// ---------------------------------------------------------------------------

#[test]
fn unknown_slot_expands_to_alphabet() {
    let g = generator(GeneratorConfig::new("{1}{2}{3}"));
    let out = g.generate("Ivanov ? Petrov").unwrap();
    assert_eq!(out.len(), 23);
    assert_eq!(out.first().map(String::as_str), Some("ivanovapetrov"));
    assert_eq!(out.last().map(String::as_str), Some("ivanovzpetrov"));
    assert_sorted_unique(&out);
}

#[test]
fn unknown_slot_passes_through_without_expansion() {
    let g = generator(GeneratorConfig::new("{1}{2}{3}").with_expansion(false));
    assert_eq!(g.generate("Ivanov ? Petrov").unwrap(), ["ivanov?petrov"]);
}

#[test]
fn missing_words_are_expanded() {
    let g = generator(GeneratorConfig::new("{1}.{2}"));
    let out = g.generate("Ivanov").unwrap();
    assert_eq!(out.len(), 23);
    assert!(out.iter().all(|id| id.starts_with("ivanov.")));
}

#[test]
fn line_without_usable_words_renders_literals_only() {
    let g = generator(GeneratorConfig::new(EMAIL_PATTERN));
    assert_eq!(g.generate("? ? ?").unwrap(), ["_@example.ru"]);
}

#[test]
fn blank_line_yields_nothing() {
    let g = generator(GeneratorConfig::new(EMAIL_PATTERN));
    assert!(g.generate("").unwrap().is_empty());
    assert!(g.generate(" \t ").unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Wordlists
// ---------------------------------------------------------------------------

#[test]
fn wordlist_replaces_alphabet_for_its_slot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("names.txt");
    fs::write(&path, "petr\n\nivan  \n").unwrap();

    let config = GeneratorConfig::new("{1}.{2}").with_wordlist(SlotIndex::SECOND, &path);
    let out = generator(config).generate("Ivanov").unwrap();
    assert_eq!(out, ["ivanov.ivan", "ivanov.petr"]);
}

#[test]
fn empty_wordlist_produces_nothing_for_lines_needing_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "\n\n").unwrap();

    let config = GeneratorConfig::new("{1}.{2}").with_wordlist(SlotIndex::SECOND, &path);
    let g = generator(config);
    assert!(g.generate("Ivanov").unwrap().is_empty());
    assert_eq!(g.generate("Ivanov Anton").unwrap(), ["ivanov.anton"]);
}

#[test]
fn directory_as_wordlist_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new("{1}").with_wordlist(SlotIndex::FIRST, dir.path());
    let err = IdentifierGenerator::new(&config).err().expect("error");
    assert!(matches!(
        err,
        GenerateError::CandidateSource(CandidateSourceError::IsDirectory { .. })
    ));
}

#[test]
fn missing_wordlist_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let config = GeneratorConfig::new("{1}").with_wordlist(SlotIndex::THIRD, &path);
    let err = IdentifierGenerator::new(&config).err().expect("error");
    assert!(matches!(
        err,
        GenerateError::CandidateSource(CandidateSourceError::NotFound { .. })
    ));
    assert!(err.to_string().contains("absent.txt"));
}

#[cfg(unix)]
#[test]
fn non_utf8_wordlist_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();
    let config = GeneratorConfig::new("{1}").with_wordlist(SlotIndex::FIRST, &path);
    let err = IdentifierGenerator::new(&config).err().expect("error");
    assert!(matches!(
        err,
        GenerateError::CandidateSource(CandidateSourceError::InvalidUtf8 { .. })
    ));
}

// ---------------------------------------------------------------------------
// Pattern errors
// ---------------------------------------------------------------------------

#[test]
fn invalid_patterns_are_rejected_at_construction() {
    for pattern in ["plain text", "{0}", "{4}", "{first}", "{1", "{1:+}", "{{1}}"] {
        let err = IdentifierGenerator::new(&GeneratorConfig::new(pattern))
            .err()
            .unwrap_or_else(|| panic!("{pattern:?} accepted"));
        assert!(matches!(err, GenerateError::Pattern { .. }), "{pattern:?}: {err}");
    }
}
