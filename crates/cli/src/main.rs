//! Demand-paging simulator CLI.

use clap::Parser;
use log::LevelFilter;
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use memsim::report::format_resolution;
use memsim::sim::loader;
use memsim::{PolicyKind, SimConfig, SimError, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "memSim",
    author,
    version,
    about = "Virtual memory translation simulator",
    long_about = None,
)]
struct Cli {
    /// File with one logical address (0-65535) per line.
    reference_file: PathBuf,

    /// Number of physical frames.
    #[arg(value_parser = clap::value_parser!(u16).range(1..=256))]
    frames: Option<u16>,

    /// Page replacement algorithm.
    #[arg(value_enum, ignore_case = true)]
    pra: Option<PolicyKind>,

    /// Backing store image (65536 bytes).
    #[arg(long)]
    backing_store: Option<PathBuf>,

    /// JSON config file; positional arguments override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code()
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn build_config(cli: &Cli) -> Result<SimConfig, SimError> {
    let mut config = match &cli.config {
        Some(path) => SimConfig::from_json_file(path)?,
        None => SimConfig::default(),
    };
    if let Some(path) = &cli.backing_store {
        config.backing_store = path.clone();
    }
    if let Some(frames) = cli.frames {
        config.frames = frames as usize;
    }
    if let Some(pra) = cli.pra {
        config.policy = pra;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> Result<(), SimError> {
    let config = build_config(&cli)?;
    let mut sim = Simulator::from_config(&config)?;
    let trace = loader::load_trace(&cli.reference_file)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut write_err = None;
    sim.run_with(&trace, |res| {
        if write_err.is_none() {
            if let Err(e) = writeln!(out, "{}", format_resolution(res)) {
                write_err = Some(e);
            }
        }
    });

    let stats = sim.stats();
    let tail = if cli.json {
        stats.to_json().to_string()
    } else {
        stats.summary()
    };
    let result = match write_err {
        Some(e) => Err(e),
        None => writeln!(out, "{}", tail).and_then(|_| out.flush()),
    };
    finish_output(result)
}

/// A closed stdout (e.g. piped into `head`) ends the run quietly; any other
/// write failure is an error.
fn finish_output(result: io::Result<()>) -> Result<(), SimError> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            log::debug!("stdout closed: {}", e);
            Ok(())
        }
        Err(e) => Err(SimError::io("<stdout>", e)),
    }
}
