use clap::{ArgAction, Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Level, debug};

mod error;

use error::AppResult;
use rn_graph::AdjacencyReport;

#[derive(Parser, Debug)]
#[command(name = "rn-cli", version)]
#[command(about = "Build a road network and print its adjacency list", long_about = None)]
struct Cli {
    /// Path to the network description (CITIES / ROADS sections)
    input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Shorthand for --format json
    #[arg(long, conflicts_with = "format")]
    json: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Log errors only
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl Cli {
    fn format(&self) -> Format {
        if self.json { Format::Json } else { self.format }
    }

    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(usage_status(&err));
        }
    };

    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let result = run(&cli, &mut io::stdout().lock());
    ExitCode::from(exit_status(result, &mut io::stderr().lock()))
}

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

/// `--help` and `--version` succeed; every other argument error fails.
fn usage_status(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

/// Write the diagnostic for a failed run and pick the process exit status.
fn exit_status(result: AppResult<()>, err_out: &mut impl Write) -> u8 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            let _ = writeln!(err_out, "error: {err}");
            EXIT_FAILURE
        }
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> AppResult<()> {
    debug!(input = %cli.input.display(), format = ?cli.format(), "loading network");
    let network = rn_parse::parse_file(&cli.input)?;

    match cli.format() {
        Format::Text => {
            for line in network.adjacency_lines()? {
                writeln!(out, "{line}")?;
            }
        }
        Format::Json => {
            let report = AdjacencyReport::new(&network.graph, &network.order)?;
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
