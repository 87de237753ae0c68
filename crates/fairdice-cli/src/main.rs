//! Fairdice terminal front-end.
//!
//! Usage: fairdice 2,2,4,4,9,9 6,8,1,1,8,6 7,5,3,7,5,3
//!
//! Each argument defines one dice as comma-separated non-negative face
//! values; at least three dice of equal face count are required.

mod analytics;
mod terminal;

use anyhow::Result;
use clap::Parser;
use fairdice_core::{parse_dice_pool, OsEntropy, Round, RoundOutcome};
use std::process::ExitCode;
use terminal::Terminal;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "fairdice")]
#[command(about = "Provably fair non-transitive dice game")]
struct Args {
    /// Dice definitions, e.g. 2,2,4,4,9,9 (at least three, equal face counts)
    #[arg(required = true, num_args = 1..)]
    dice: Vec<String>,
}

fn main() -> ExitCode {
    // Game output goes to stdout; keep the log stream on stderr.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let pool = parse_dice_pool(&args.dice)?;
    let terminal = Terminal::new(pool.clone());
    let round = Round::new(pool, OsEntropy, terminal)?;
    info!(round = %round.id(), "round assembled");

    match round.play()? {
        RoundOutcome::Aborted => info!("round aborted by exit request"),
        outcome => info!(%outcome, "round finished"),
    }
    Ok(())
}
