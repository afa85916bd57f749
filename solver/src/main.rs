use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use inundate::parse::{parse_puzzle, SAMPLE_PUZZLE};
use inundate::solver::DEFAULT_MAX_STEPS;
use inundate::{ColorCode, Outcome, Puzzle, SolverConfig};

#[derive(Parser)]
#[command(name = "inundate-solver")]
#[command(about = "Find a short winning move sequence for a flood-fill puzzle")]
struct Cli {
    /// Puzzle file; one row per line, cells separated by commas, blank cells absent. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Deepest search step; sequences of up to this many moves plus one are tried.
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Solve the built-in sample puzzle instead of reading input.
    #[arg(long, conflicts_with = "input")]
    sample: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn read_input(cli: &Cli) -> Result<String> {
    if cli.sample {
        return Ok(SAMPLE_PUZZLE.to_owned());
    }

    match &cli.input {
        Some(path) => fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = SolverConfig::with_max_steps(cli.max_steps)?;
    let puzzle: Puzzle<ColorCode> = parse_puzzle(&read_input(&cli)?).context("failed to parse puzzle")?;
    info!("read {} cells", puzzle.len());
    print!("{}", puzzle);

    match puzzle.solve(&config) {
        Outcome::Found(steps) => {
            println!("solved in {} moves: {}", steps.len(), steps.iter().map(ColorCode::to_string).collect::<Vec<_>>().join(" "));
            print!("{}", puzzle.play(&steps));
            Ok(ExitCode::SUCCESS)
        }
        Outcome::NotFound { .. } => {
            println!("no solution within {} moves", config.max_steps() + 1);
            Ok(ExitCode::FAILURE)
        }
    }
}
