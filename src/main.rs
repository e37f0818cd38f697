//! Command-line draughts solver.
//!
//! Reads a starting position in grid notation, plays the game out with
//! fixed-depth alpha-beta search for both sides, and writes one board per
//! ply to the output file.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use draughts_engine::board::{Board, SearchState, DEFAULT_TT_ENTRIES};
use draughts_engine::game::play_out;

#[derive(Parser, Debug)]
#[command(
    name = "draughts_engine",
    about = "Depth-bounded alpha-beta solver for English draughts positions"
)]
struct Args {
    /// Input file containing the starting board in grid notation
    #[arg(long)]
    inputfile: PathBuf,

    /// Output file receiving one board per ply
    #[arg(long)]
    outputfile: PathBuf,

    /// Search depth in plies
    #[arg(long, default_value_t = 9)]
    depth: u32,

    /// Stop after this many plies even without a terminal position
    #[arg(long, default_value_t = 256)]
    max_plies: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = fs::read_to_string(&args.inputfile)
        .with_context(|| format!("reading {}", args.inputfile.display()))?;
    let board = Board::from_grid(&text)
        .with_context(|| format!("parsing {}", args.inputfile.display()))?;

    let mut state = SearchState::new(DEFAULT_TT_ENTRIES);
    let record = play_out(board, args.depth, args.max_plies, &mut state);

    fs::write(&args.outputfile, record.to_text())
        .with_context(|| format!("writing {}", args.outputfile.display()))?;
    Ok(())
}
