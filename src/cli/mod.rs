//! Command-line arguments and configuration

pub mod config;

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// zettl - a terminal notebook for short text notes
#[derive(Parser, Debug)]
#[command(name = "zettl", version, about, long_about = None)]
pub struct Cli {
    /// Database file (overrides config file)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Log file (overrides config file)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
