//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Patent claim analyzer: parse numbered claims and reconstruct their dependency forest
#[derive(Parser, Debug)]
#[command(name = "claimtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Fail on references to missing claims instead of recording them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Collapse duplicate references within one claim into one edge
    #[arg(long, global = true)]
    pub dedup: bool,

    /// Explicit config file (default: $XDG_CONFIG_HOME/claimtree/claimtree.toml)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the claim dependency forest
    Tree {
        /// Claims file (text or .json array), or '-' for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Indented outline instead of box-drawing branches
        #[arg(long)]
        plain: bool,
    },

    /// List independent claims (the roots of the forest)
    Roots {
        /// Claims file (text or .json array), or '-' for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// List claims no other claim depends on
    Leaves {
        /// Claims file (text or .json array), or '-' for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Show the depth of each claim tree
    Depth {
        /// Claims file (text or .json array), or '-' for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Dump each claim's references as JSON
    Refs {
        /// Claims file (text or .json array), or '-' for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
