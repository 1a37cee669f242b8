//! Morris engine - command-line entry point
//!
//! Reads a Nine Men's Morris board from a file, searches to the requested
//! depth, prints the chosen board, the number of static evaluations and
//! the search estimate, and writes the chosen board to the output file.
//!
//! Usage:
//!     morris <INPUT> <OUTPUT> <DEPTH> [--algorithm <A>] [--phase <P>]
//!            [--improved] [--black]

use anyhow::Result;
use clap::Parser;
use morris_engine::driver::{self, Args};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let report = driver::run(&args)?;
    report.print();
    Ok(())
}
