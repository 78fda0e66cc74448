//! # colgraph CLI Module
//!
//! ## Available Commands
//!
//! - `load` - Load a dataset and print counts
//! - `stats` - Show counts, column lengths and the alignment check
//! - `vertices` - List every vertex
//! - `edges` - List every edge
//! - `neighbors` - List the outgoing edges of one vertex

mod commands;

use crate::error::CliError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// colgraph - schema-typed columnar property graph
///
/// Loads a TOML dataset into an in-memory graph and inspects it.
#[derive(Parser, Debug)]
#[command(name = "colgraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a dataset and print vertex and edge counts
    Load {
        /// Path to the dataset file (TOML)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Show counts, per-column lengths and the alignment check
    Stats {
        /// Path to the dataset file (TOML)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List every vertex in index order
    Vertices {
        /// Path to the dataset file (TOML)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List every edge in index order
    Edges {
        /// Path to the dataset file (TOML)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List the outgoing edges of a vertex
    Neighbors {
        /// Path to the dataset file (TOML)
        #[arg(short, long)]
        file: PathBuf,

        /// User id of the source vertex
        #[arg(long)]
        vertex: String,
    },
}

impl Cli {
    /// Default log filter for the verbosity flags.
    pub fn default_filter(&self) -> &'static str {
        if self.quiet {
            "colgraph=error"
        } else if self.verbose {
            "colgraph=debug,colgraph_core=debug"
        } else {
            "colgraph=info"
        }
    }
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), CliError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Commands::Load { file } => cmd_load(&file, json_mode),
        Commands::Stats { file } => cmd_stats(&file, json_mode),
        Commands::Vertices { file } => cmd_vertices(&file, json_mode),
        Commands::Edges { file } => cmd_edges(&file, json_mode),
        Commands::Neighbors { file, vertex } => cmd_neighbors(&file, &vertex, json_mode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_neighbors_with_global_flags() {
        let cli = Cli::try_parse_from([
            "colgraph",
            "neighbors",
            "-f",
            "data.toml",
            "--vertex",
            "a",
            "--json-mode",
        ])
        .expect("parse");

        assert!(cli.json_mode);
        assert!(matches!(
            cli.command,
            Commands::Neighbors { ref file, ref vertex }
                if file == &PathBuf::from("data.toml") && vertex == "a"
        ));
    }

    #[test]
    fn quiet_wins_over_verbose() {
        let cli = Cli::try_parse_from(["colgraph", "-v", "-q", "load", "-f", "x.toml"])
            .expect("parse");
        assert_eq!(cli.default_filter(), "colgraph=error");
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["colgraph"]).is_err());
    }
}
