use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod analyze;
mod config;
mod demo;
mod params;
mod responses;

pub use config::Config;

/// radiostat - Cyclic Voltammetry Lab Toolkit
#[derive(Parser)]
#[command(name = "radiostat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Integrate oxidation/reduction charge of a CV trace
    Analyze {
        /// Trace file (defaults to the newest trace in the output directory)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Print the full analysis as JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Include the computed coulombic efficiency in the summary
        #[arg(long)]
        show_ce: bool,

        /// Fraction of the peak current a sample must exceed to be integrated
        #[arg(short = 't', long)]
        threshold: Option<f64>,

        /// Directory searched for the newest trace
        #[arg(short = 'o', long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Record a CV run on a simulated cell and analyze it
    Demo {
        /// Directory the trace is written to
        #[arg(short = 'o', long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Fraction of plated charge the simulated cell recovers on stripping
        #[arg(short = 'e', long, default_value_t = 0.85)]
        stripping_efficiency: f64,
    },

    /// Print the device settings and waveform parameters as JSON
    Params,

    /// Show or record student responses
    Responses {
        /// Responses file (defaults to <output dir>/student_responses.json)
        #[arg(short = 'f', long, value_name = "FILE")]
        file: Option<PathBuf>,

        #[command(subcommand)]
        action: ResponsesAction,
    },
}

#[derive(Subcommand)]
enum ResponsesAction {
    /// List recorded responses
    Show,

    /// Record a response, e.g. `set test1_calculated_ce 87.5`
    Set {
        /// Response key
        key: String,

        /// Response text
        value: String,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze {
            file,
            json,
            show_ce,
            threshold,
            output_dir,
        } => analyze::run(&config, file, json, show_ce, threshold, output_dir),
        Commands::Demo {
            output_dir,
            stripping_efficiency,
        } => demo::run(&config, output_dir, stripping_efficiency),
        Commands::Params => params::run(&config),
        Commands::Responses { file, action } => match action {
            ResponsesAction::Show => responses::show(&config, file),
            ResponsesAction::Set { key, value } => responses::set(&config, file, &key, &value),
        },
    }
}
