use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use n26_ynab::{run, Config};

/// Convert an N26 CSV export into a CSV file YNAB can import.
#[derive(Debug, Parser)]
#[command(name = "n26-ynab", version)]
struct Cli {
    /// Path to N26 CSV file
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Path to generated YNAB CSV (defaults to <input>_ynab.csv next to the input)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Log every stage of the conversion
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config::new(cli.input, cli.output)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match run(&cli.into()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
