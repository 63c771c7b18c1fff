// fio2id-translit: Transliterate whole lines with every scheme.
//
// Prints each distinct romanization of every input line, in scheme order.
// No pattern, no sanitizing, no lowercasing.
//
// Usage:
//   fio2id-translit [OPTIONS] [TEXT...]

use std::io;

use anyhow::Context;
use clap::Parser;
use fio2id_cli::{CommonArgs, OutputSink, fatal, for_each_line, open_input, write_scheme_list};
use fio2id_engine::direct::transliterate_line;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "fio2id-translit",
    version,
    about = "Transliterate Cyrillic text with every supported scheme"
)]
struct Cli {
    /// Text to transliterate; read from --file or stdin when absent.
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    #[command(flatten)]
    common: CommonArgs,
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

    let schemes = cli.common.scheme_set();
    let mut sink = OutputSink::stdout(cli.common.output.as_deref())?;
    let mut process = |line: &str| {
        let variants = transliterate_line(line, schemes.as_slice());
        sink.write_results(line, &variants, cli.common.json)
    };

    let lines = if cli.text.is_empty() {
        for_each_line(open_input(cli.common.input.as_deref())?, &mut process)?
    } else {
        for text in &cli.text {
            process(text)?;
        }
        cli.text.len()
    };
    sink.finish()?;

    info!(lines, schemes = schemes.len(), "done");
    Ok(())
}
