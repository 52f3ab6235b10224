use std::{path::PathBuf, process::ExitCode};

use anyhow::{anyhow, Context as _};
use clap::Parser;
use topsis::{parse_impacts, parse_weights, RankMethod};
use tracing_subscriber::EnvFilter;

/// Rank the alternatives of a delimited file with TOPSIS and write them back with `Topsis Score`
/// and `Rank` columns appended.
#[derive(Debug, Parser)]
#[command(name = "topsis", version)]
struct Cli {
    /// Input file: a header row, then one alternative per row (label, then criterion values).
    input: PathBuf,
    /// Comma-separated criterion weights, e.g. "1,1,2,1".
    #[arg(allow_hyphen_values = true)]
    weights: String,
    /// Comma-separated criterion impacts, "+" or "-", e.g. "+,+,-,+".
    #[arg(allow_hyphen_values = true)]
    impacts: String,
    /// Output file.
    output: PathBuf,
    /// Field delimiter of the input and output files.
    #[arg(long, default_value_t = ',')]
    delimiter: char,
    /// How alternatives with equal scores share ranks: competition (1224), modified (1334) or
    /// dense (1223).
    #[arg(long, default_value = "competition")]
    ties: RankMethod,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("topsis=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(rows) => {
            tracing::info!(rows, output = %cli.output.display(), "ranked alternatives");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Validate every input, score the table and write the result. Returns the number of ranked
/// alternatives.
fn run(cli: &Cli) -> anyhow::Result<usize> {
    let options = topsis_csv::Options {
        delimiter: delimiter_byte(cli.delimiter)?,
    };
    let weights = parse_weights(&cli.weights).context("invalid weights")?;
    let impacts = parse_impacts(&cli.impacts).context("invalid impacts")?;
    let table = topsis_csv::read_table_path(&cli.input, &options)
        .with_context(|| format!("cannot read {}", cli.input.display()))?;
    tracing::debug!(
        alternatives = table.len(),
        criteria = table.criteria().len(),
        "loaded table"
    );

    let ranked = topsis::score(&table, &weights, &impacts, cli.ties)?;
    topsis_csv::write_ranked_path(&cli.output, &ranked, &options)
        .with_context(|| format!("cannot write {}", cli.output.display()))?;
    Ok(ranked.table.len())
}

fn delimiter_byte(delimiter: char) -> anyhow::Result<u8> {
    u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| anyhow!("delimiter {delimiter:?} must be a single ASCII character"))
}
