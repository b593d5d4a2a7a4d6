//! Command line arguments for the `wordladder` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// wordladder - shortest single-letter-edit ladders through a fixed vocabulary
#[derive(Parser, Debug, Clone)]
#[command(name = "wordladder")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LadderArgs {
    /// Word list file, one word per line (falls back to $WORDLADDER_WORDLIST,
    /// then the sample vocabulary)
    #[arg(short, long, global = true)]
    pub wordlist: Option<PathBuf>,

    /// Do not treat adding or removing "'s" as a single step
    #[arg(long, global = true)]
    pub no_possessives: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl LadderArgs {
    /// Effective verbosity: 0 quiet, 1 default, 2+ more detail.
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Shortest ladder length between two words
    Distance(DistanceArgs),

    /// Vocabulary words one step away from each word
    Neighbors(NeighborsArgs),

    /// Raw one-step candidates of a word, ignoring the vocabulary
    Candidates(CandidatesArgs),

    /// Groups of mutually reachable words
    Components,

    /// Words whose removal disconnects part of the vocabulary
    Bridges,

    /// Every word reachable from a start word, with all shortest ladders
    Paths(PathsArgs),

    /// Distance matrix, edges and components as JSON
    Matrix(MatrixArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DistanceArgs {
    pub from: String,
    pub to: String,

    /// Also print one shortest ladder
    #[arg(short, long)]
    pub path: bool,

    /// Print every shortest ladder
    #[arg(short, long, conflicts_with = "path")]
    pub all: bool,
}

#[derive(Args, Debug, Clone)]
pub struct NeighborsArgs {
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct CandidatesArgs {
    pub word: String,
}

#[derive(Args, Debug, Clone)]
pub struct PathsArgs {
    pub start: String,

    /// Maximum number of steps from the start word
    #[arg(short = 'm', long, default_value_t = 2)]
    pub max_depth: u32,
}

#[derive(Args, Debug, Clone)]
pub struct MatrixArgs {
    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,

    /// Emit a dense numeric matrix with unreachable pairs set to CAP
    #[arg(long, value_name = "CAP")]
    pub cap: Option<f64>,
}
