// fio2id: Generate identifier candidates from personal names.
//
// Reads names (one per line, surname/given name/patronymic in any order the
// pattern expects) and prints every identifier the pattern yields across all
// transliteration schemes, sorted and without duplicates.
//
// Usage:
//   fio2id -p PATTERN [OPTIONS]
//
// Example:
//   echo "Иван Николаевич Городецкий" | fio2id -p "{3}_{1:.1}{2:.1}@example.ru"

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fio2id_cli::{CommonArgs, OutputSink, fatal, for_each_line, open_input, write_scheme_list};
use fio2id_core::SlotIndex;
use fio2id_engine::{GeneratorConfig, IdentifierGenerator};
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "fio2id",
    version,
    about = "Generate identifier candidates from personal names",
    long_about = "Generate identifier candidates from personal names.\n\n\
                  Each input line holds up to three words. The pattern refers to them as\n\
                  {1}, {2} and {3} using str.format syntax, e.g. {3}_{1:.1}{2:.1}@example.ru.\n\
                  A '?' word, or a missing one, is enumerated from a wordlist or the\n\
                  built-in alphabet unless --no-guess is given."
)]
struct Cli {
    /// Identifier pattern with {1}, {2}, {3} placeholders.
    #[arg(
        short = 'p',
        long = "pattern",
        value_name = "PATTERN",
        required_unless_present = "list_schemes"
    )]
    pattern: Option<String>,

    /// Wordlist for unknown values in slot 1.
    #[arg(long = "f1", value_name = "FILE")]
    f1: Option<PathBuf>,

    /// Wordlist for unknown values in slot 2.
    #[arg(long = "f2", value_name = "FILE")]
    f2: Option<PathBuf>,

    /// Wordlist for unknown values in slot 3.
    #[arg(long = "f3", value_name = "FILE")]
    f3: Option<PathBuf>,

    /// Leave unknown values as '?' instead of enumerating them.
    #[arg(long = "no-guess")]
    no_guess: bool,

    #[command(flatten)]
    common: CommonArgs,
}

impl Cli {
    fn generator_config(&self, pattern: &str) -> GeneratorConfig {
        let mut config = GeneratorConfig::new(pattern)
            .with_expansion(!self.no_guess)
            .with_schemes(self.common.schemes.clone());
        let wordlists = [
            (SlotIndex::FIRST, &self.f1),
            (SlotIndex::SECOND, &self.f2),
            (SlotIndex::THIRD, &self.f3),
        ];
        for (slot, path) in wordlists {
            if let Some(path) = path {
                config = config.with_wordlist(slot, path);
            }
        }
        config
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = fio2id_cli::logging::init_logging(&cli.common.log_config()) {
        fatal(&format!("failed to initialize logging: {err}"));
    }
    if let Err(err) = run(&cli) {
        fatal(&format!("{err:#}"));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.common.list_schemes {
        return write_scheme_list(&mut io::stdout().lock()).context("failed to write to stdout");
    }
    let pattern = cli.pattern.as_deref().context("--pattern is required")?;

    let generator = IdentifierGenerator::new(&cli.generator_config(pattern))?;
    let input = open_input(cli.common.input.as_deref())?;
    let mut sink = OutputSink::stdout(cli.common.output.as_deref())?;

    let mut identifiers = 0usize;
    let lines = for_each_line(input, |line| {
        let generated = generator.generate(line)?;
        identifiers += generated.len();
        sink.write_results(line, &generated, cli.common.json)
    })?;
    sink.finish()?;

    info!(lines, identifiers, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_is_required_without_list_schemes() {
        assert!(Cli::try_parse_from(["fio2id"]).is_err());
        assert!(Cli::try_parse_from(["fio2id", "--list-schemes"]).is_ok());
    }

    #[test]
    fn wordlists_map_to_their_slots() {
        let cli = Cli::try_parse_from(["fio2id", "-p", "{1}", "--f2", "b.txt", "--no-guess"])
            .unwrap();
        let config = cli.generator_config("{1}");
        assert!(!config.expand);
        assert_eq!(config.wordlists[0], None);
        assert_eq!(config.wordlists[1], Some(PathBuf::from("b.txt")));
        assert_eq!(config.wordlists[2], None);
    }
}
