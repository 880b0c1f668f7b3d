//! CLI argument definitions using clap
//!
//! - parley ask questions.json    # Show a dialog, print the answers as JSON
//! - parley ask -                 # Same, reading the questions from stdin
//! - parley platform              # Show platform and presenter resolution
//! - parley schema                # Print the ask_user_question tool schema

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "parley")]
#[command(about = "Parley - ask a human structured questions through a native dialog")]
#[command(version)]
pub struct Cli {
    /// Path to a configuration file (json, toml or yaml)
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Presenter executable to use instead of the platform binary
    #[arg(long, global = true)]
    pub presenter: Option<PathBuf>,

    /// Directory holding the per-platform presenter binaries
    #[arg(long, global = true)]
    pub bin_dir: Option<PathBuf>,

    /// Do not play a sound before the dialog appears
    #[arg(long, global = true)]
    pub no_sound: bool,

    /// Enable verbose (debug) logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask the questions in FILE (or stdin with "-") and print the result
    Ask {
        /// Question batch: `{"questions": [...]}` or a bare array
        #[arg(value_name = "FILE")]
        input: String,
    },

    /// Show the detected platform and the presenter it resolves to
    Platform,

    /// Print the JSON schema of the ask_user_question tool
    Schema,
}
