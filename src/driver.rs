//! Morris engine - Driver Module
//!
//! This module wraps the search core for command-line use: it reads a
//! 21-character board from a file, runs the requested search, prints the
//! three-line report and writes the chosen board back out. Searching for
//! black is done by flipping colors around the white-side machinery.

use crate::board::Board;
use crate::evaluation::Evaluator;
use crate::move_generator::MoveGenerator;
use crate::search::{Algorithm, SearchEngine};
use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use std::fs;
use std::path::PathBuf;

/// Nine Men's Morris move search
#[derive(Parser, Debug)]
#[command(name = "morris", version, about)]
pub struct Args {
    /// File holding the 21-character board to search from
    pub input: PathBuf,

    /// File the chosen board is written to
    pub output: PathBuf,

    /// Search depth in plies
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub depth: u32,

    /// Tree-search strategy
    #[arg(long, value_enum, default_value_t = SearchKind::AlphaBeta)]
    pub algorithm: SearchKind,

    /// Game phase; selects the move generator and the default evaluator
    #[arg(long, value_enum, default_value_t = Phase::Opening)]
    pub phase: Phase,

    /// Use the weighted improved evaluator instead of the phase default
    #[arg(long)]
    pub improved: bool,

    /// Search for black instead of white
    #[arg(long)]
    pub black: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SearchKind {
    Minimax,
    AlphaBeta,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Phase {
    Opening,
    Midgame,
}

/// Outcome of one driver run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub board: Board,
    pub positions_evaluated: u64,
    pub value: i32,
}

impl Report {
    /// The three output lines, trailing periods included
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Board Position: {}", self.board),
            format!(
                "Positions evaluated by static estimation: {}.",
                self.positions_evaluated
            ),
            format!("MINIMAX estimate: {}.", self.value),
        ]
    }

    pub fn print(&self) {
        for line in self.lines() {
            println!("{line}");
        }
    }
}

/// Read the board, search, and write the chosen successor
pub fn run(args: &Args) -> Result<Report> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read board file {}", args.input.display()))?;
    let board: Board = text.trim().parse()?;

    let report = search_position(&board, args)?;

    fs::write(&args.output, report.board.to_string())
        .with_context(|| format!("cannot write board file {}", args.output.display()))?;
    Ok(report)
}

/// Run the configured search on a parsed board
pub fn search_position(board: &Board, args: &Args) -> Result<Report> {
    let generator = match args.phase {
        Phase::Opening => MoveGenerator::Placement,
        Phase::Midgame => MoveGenerator::SlideOrFly,
    };
    let evaluator = if args.improved {
        Evaluator::Improved
    } else {
        match args.phase {
            Phase::Opening => Evaluator::Opening,
            Phase::Midgame => Evaluator::MidgameEndgame,
        }
    };
    let algorithm = match args.algorithm {
        SearchKind::Minimax => Algorithm::Minimax,
        SearchKind::AlphaBeta => Algorithm::AlphaBeta,
    };
    info!(
        "searching {:?}/{:?}/{:?} to depth {} for {}",
        generator,
        evaluator,
        algorithm,
        args.depth,
        if args.black { "black" } else { "white" }
    );

    let mut engine = SearchEngine::new(generator, evaluator, algorithm);

    // Black searches run the white machinery on a color-flipped board and
    // negate the reported value; the leaf counter is unaffected.
    let root = if args.black { board.flipped() } else { *board };
    let result = engine.search(&root, args.depth, true);

    let Some(chosen) = result.best else {
        bail!("no move found after searching to depth {}", args.depth);
    };
    let (chosen, value) = if args.black {
        (chosen.flipped(), -result.value)
    } else {
        (chosen, result.value)
    };

    Ok(Report {
        board: chosen,
        positions_evaluated: engine.positions_evaluated,
        value,
    })
}
