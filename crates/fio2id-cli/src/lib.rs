// fio2id-cli: shared plumbing for the command-line tools.
//
// Both binaries read names line by line from a file or stdin, write one
// result per line to stdout (and optionally to a copy file), and log to
// stderr.

pub mod logging;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::Args;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use fio2id_translit::{SchemeId, SchemeSet};
use serde::Serialize;

use crate::logging::{LogConfig, LogFormat};

/// Flags shared by every fio2id binary.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Read names from FILE instead of stdin.
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Also write results to FILE (created or truncated).
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Restrict to a transliteration scheme; repeat for more. Default: all.
    #[arg(short = 's', long = "scheme", value_name = "NAME")]
    pub schemes: Vec<SchemeId>,

    /// Emit one JSON object per input line.
    #[arg(long)]
    pub json: bool,

    /// Print the available schemes and exit.
    #[arg(long = "list-schemes")]
    pub list_schemes: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q to silence).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "compact")]
    pub log_format: LogFormat,
}

impl CommonArgs {
    /// Logging configuration; an explicit `-v`/`-q` beats `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        self.log_config_for(io::stderr().is_terminal())
    }

    /// Colour only when stderr is a terminal and the format is not JSON.
    fn log_config_for(&self, stderr_is_terminal: bool) -> LogConfig {
        LogConfig::default()
            .with_level_filter(self.verbosity.tracing_level_filter())
            .with_env_filter(!self.verbosity.is_present())
            .with_format(self.log_format)
            .with_ansi(stderr_is_terminal && self.log_format != LogFormat::Json)
    }

    /// Selected schemes, or all of them when none were named.
    pub fn scheme_set(&self) -> SchemeSet {
        if self.schemes.is_empty() {
            SchemeSet::all()
        } else {
            SchemeSet::select(&self.schemes)
        }
    }
}

/// One input line and its results, as written by `--json`.
#[derive(Debug, Serialize)]
pub struct LineRecord<'a> {
    pub line: &'a str,
    pub identifiers: &'a [String],
}

/// Open the input: a file when given, stdin otherwise.
pub fn open_input(path: Option<&Path>) -> anyhow::Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open input file {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Call `f` for every non-blank line, in order, with trailing whitespace
/// removed. Stops at the first error.
pub fn for_each_line<R, F>(reader: R, mut f: F) -> anyhow::Result<usize>
where
    R: BufRead,
    F: FnMut(&str) -> anyhow::Result<()>,
{
    let mut processed = 0;
    for (number, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read input line {}", number + 1))?;
        let line = line.trim_end();
        if line.trim_start().is_empty() {
            continue;
        }
        f(line)?;
        processed += 1;
    }
    Ok(processed)
}

/// Result writer: every line goes to the primary writer and, when
/// configured, to a copy file.
pub struct OutputSink<W: Write> {
    primary: BufWriter<W>,
    copy: Option<(PathBuf, BufWriter<File>)>,
}

impl OutputSink<io::Stdout> {
    pub fn stdout(copy: Option<&Path>) -> anyhow::Result<Self> {
        Self::new(io::stdout(), copy)
    }
}

impl<W: Write> OutputSink<W> {
    pub fn new(primary: W, copy: Option<&Path>) -> anyhow::Result<Self> {
        let copy = match copy {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("cannot create output file {}", path.display()))?;
                Some((path.to_path_buf(), BufWriter::new(file)))
            }
            None => None,
        };
        Ok(Self {
            primary: BufWriter::new(primary),
            copy,
        })
    }

    pub fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.primary, "{line}").context("failed to write to stdout")?;
        if let Some((path, file)) = &mut self.copy {
            writeln!(file, "{line}")
                .with_context(|| format!("failed to write to {}", path.display()))?;
        }
        Ok(())
    }

    /// Write a line's results: one per line, or a single JSON object.
    pub fn write_results(
        &mut self,
        line: &str,
        identifiers: &[String],
        json: bool,
    ) -> anyhow::Result<()> {
        if json {
            let record = LineRecord { line, identifiers };
            let encoded = serde_json::to_string(&record).context("failed to encode JSON")?;
            return self.write_line(&encoded);
        }
        for identifier in identifiers {
            self.write_line(identifier)?;
        }
        Ok(())
    }

    /// Flush both destinations and hand back the primary writer.
    pub fn finish(self) -> anyhow::Result<W> {
        if let Some((path, mut file)) = self.copy {
            file.flush()
                .with_context(|| format!("failed to write to {}", path.display()))?;
        }
        self.primary
            .into_inner()
            .map_err(|e| e.into_error())
            .context("failed to write to stdout")
    }
}

/// Write the scheme table shown by `--list-schemes`.
pub fn write_scheme_list<W: Write>(out: &mut W) -> io::Result<()> {
    for id in SchemeId::ALL {
        writeln!(out, "{:<16}{}", id.name(), id.description())?;
    }
    Ok(())
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        common: CommonArgs,
    }

    fn parse(args: &[&str]) -> CommonArgs {
        TestCli::try_parse_from(std::iter::once("test").chain(args.iter().copied()))
            .unwrap()
            .common
    }

    #[test]
    fn schemes_are_repeatable_and_validated() {
        let args = parse(&["-s", "telegram", "--scheme", "gost-779-alt"]);
        assert_eq!(args.schemes, [SchemeId::Telegram, SchemeId::Gost779Alt]);
        assert_eq!(args.scheme_set().len(), 2);

        let err = TestCli::try_parse_from(["test", "-s", "klingon"]).err().unwrap();
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn no_scheme_means_all() {
        assert_eq!(parse(&[]).scheme_set().len(), 16);
    }

    #[test]
    fn verbosity_disables_env_filter() {
        assert!(parse(&[]).log_config().use_env_filter);
        assert!(!parse(&["-v"]).log_config().use_env_filter);
    }

    #[test]
    fn colour_follows_terminal_and_format() {
        assert!(parse(&[]).log_config_for(true).with_ansi);
        assert!(!parse(&[]).log_config_for(false).with_ansi);
        assert!(!parse(&["--log-format", "json"]).log_config_for(true).with_ansi);
    }

    #[test]
    fn for_each_line_skips_blank_lines() {
        let input = "Иван Петров  \n\n   \nAnna\n";
        let mut seen = Vec::new();
        let count = for_each_line(input.as_bytes(), |line| {
            seen.push(line.to_string());
            Ok(())
        })
        .unwrap();
        assert_eq!(count, 2);
        assert_eq!(seen, ["Иван Петров", "Anna"]);
    }

    #[test]
    fn for_each_line_stops_at_first_error() {
        let mut calls = 0;
        let result = for_each_line("a\nb\n".as_bytes(), |_| {
            calls += 1;
            anyhow::bail!("boom")
        });
        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[test]
    fn sink_tees_to_copy_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let mut sink = OutputSink::new(Vec::new(), Some(&path)).unwrap();
        let identifiers = ["a".to_string(), "b".to_string()];
        sink.write_results("x", &identifiers, false).unwrap();
        let primary = sink.finish().unwrap();

        assert_eq!(String::from_utf8(primary).unwrap(), "a\nb\n");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb\n");
    }

    #[test]
    fn sink_writes_json_records() {
        let mut sink = OutputSink::new(Vec::new(), None).unwrap();
        sink.write_results("Иван", &["ivan".to_string()], true).unwrap();
        let out = String::from_utf8(sink.finish().unwrap()).unwrap();
        assert_eq!(out, "{\"line\":\"Иван\",\"identifiers\":[\"ivan\"]}\n");
    }

    #[test]
    fn missing_input_file_names_the_path() {
        let err = open_input(Some(Path::new("/no/such/names.txt"))).err().unwrap();
        assert!(err.to_string().contains("/no/such/names.txt"));
    }

    #[test]
    fn scheme_list_has_every_scheme() {
        let mut out = Vec::new();
        write_scheme_list(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 16);
        assert!(text.lines().any(|l| l.starts_with("wikipedia")));
    }
}
