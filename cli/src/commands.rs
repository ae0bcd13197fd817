pub mod check;
pub mod scan;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sixgrep")]
#[command(about = "Finds IPv6 literals in free-form text.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan files (stdin when none are given) for IPv6 literals
    #[command(alias = "s")]
    Scan {
        /// Files to scan
        paths: Vec<PathBuf>,
        /// Only report literals with an embedded IPv4 quad
        #[arg(long)]
        ipv4_only: bool,
        /// Print match totals per input instead of the matches
        #[arg(long, short = 'c')]
        count: bool,
    },
    /// Validate whole strings as standalone literals
    #[command(alias = "k")]
    Check {
        /// Literals to validate
        #[arg(required = true)]
        literals: Vec<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
