//! CLI module for Dossier
//!
//! Provides command-line interface parsing and handling for the dossier-server binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod output;

use clap::{Parser, Subcommand};

/// Dossier - Automated Research Brief Server
///
/// Turns a free-text query into a structured research brief by planning
/// sub-tasks, retrieving evidence, and synthesizing a summary.
#[derive(Parser, Debug)]
#[command(
    name = "dossier-server",
    version,
    about = "Dossier - Automated research brief server",
    long_about = "Turns a free-text research query into a structured brief: the query is\n\
                  decomposed into sub-tasks, each sub-task is resolved against web search,\n\
                  evidence is deduplicated into references, and a language model synthesizes\n\
                  a summary.\n\n\
                  Run without arguments to start the HTTP server, or use 'research' to run\n\
                  a single query from the terminal.",
    after_help = "EXAMPLES:\n    \
                  dossier-server                                  # Start the HTTP server\n    \
                  dossier-server research \"rust async runtimes\"   # One-shot research brief\n    \
                  dossier-server research --json \"rust adoption\"  # Structured JSON output"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server (the default when no subcommand is given)
    Serve,

    /// Run a single research query and print the brief
    Research {
        /// The research query
        query: String,

        /// Print the structured result as JSON instead of the rendered brief
        #[arg(long)]
        json: bool,

        /// Search results per sub-task (1-5)
        #[arg(long)]
        max_results: Option<usize>,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_server() {
        let cli = Cli::try_parse_from(["dossier-server"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_research_subcommand_parses_query_and_flags() {
        let cli = Cli::try_parse_from([
            "dossier-server",
            "research",
            "--json",
            "--max-results",
            "4",
            "rust adoption",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Research {
                query,
                json,
                max_results,
            }) => {
                assert_eq!(query, "rust adoption");
                assert!(json);
                assert_eq!(max_results, Some(4));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_research_requires_a_query() {
        assert!(Cli::try_parse_from(["dossier-server", "research"]).is_err());
    }

    #[test]
    fn test_global_flags_apply_after_subcommand() {
        let cli =
            Cli::try_parse_from(["dossier-server", "serve", "--verbose", "--no-color"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Some(Commands::Serve)));
    }
}
