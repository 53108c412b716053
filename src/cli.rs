use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phrasemap")]
#[command(about = "Find the most frequent repeated phrases in a document", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract repeated phrases from a document
    Analyze {
        /// Document to analyze (reads stdin when omitted or "-")
        path: Option<PathBuf>,

        /// Output format (defaults to the config file value, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (skips .phrasemap.toml discovery)
        #[arg(short, long, env = "PHRASEMAP_CONFIG")]
        config: Option<PathBuf>,

        /// Shortest phrase length in words
        #[arg(long = "min-len")]
        min_len: Option<usize>,

        /// Longest phrase length in words
        #[arg(long = "max-len")]
        max_len: Option<usize>,

        /// Minimum occurrences for a phrase to count as repeated
        #[arg(long = "min-occurrences", visible_alias = "min-count")]
        min_occurrences: Option<usize>,

        /// Show only the top N phrases
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Count sentences in parallel
        #[arg(long = "parallel")]
        parallel: bool,

        /// Disable colored terminal output
        #[arg(long = "plain")]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize a .phrasemap.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
