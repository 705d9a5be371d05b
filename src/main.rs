//! # radiostat
//!
//! Command-line front end for the cyclic voltammetry lab.
//!
//! ## Usage
//!
//! ```bash
//! # Analyze a recorded trace
//! radiostat analyze output/cv_data_20250301_142501.txt
//!
//! # Analyze the newest trace in ./output, showing the computed efficiency
//! radiostat analyze --show-ce
//!
//! # Record and analyze a run on the simulated cell
//! radiostat demo --stripping-efficiency 0.9
//!
//! # Record a student's answer
//! radiostat responses set test1_calculated_ce 87.5
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity
    cli::init_logging(cli.verbosity());

    cli::dispatch(cli)
}
