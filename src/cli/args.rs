//! Command line argument parsing for the Sahayak CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Sahayak - a keyword-driven advisor for rural welfare schemes
#[derive(Parser, Debug, Clone)]
#[command(name = "sahayak")]
#[command(about = "A keyword-driven advisor for Indian rural welfare schemes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SahayakArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Scheme catalog file (JSON)
    #[arg(long, value_name = "SCHEMES_FILE", default_value = "data/schemes.json")]
    pub schemes: PathBuf,

    /// Village catalog file (JSON)
    #[arg(long, value_name = "VILLAGES_FILE", default_value = "data/villages.json")]
    pub villages: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SahayakArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Answer a single free-text question
    Ask(AskArgs),

    /// Start an interactive chat session
    Chat(ChatArgs),

    /// Recommend schemes for a village
    Recommend(RecommendArgs),

    /// List the loaded schemes
    Schemes(SchemesArgs),

    /// List the loaded villages
    Villages(VillagesArgs),
}

/// Arguments for answering a single question
#[derive(Parser, Debug, Clone)]
pub struct AskArgs {
    /// The question to answer
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Village id to use as the selected village
    #[arg(long, value_name = "VILLAGE_ID")]
    pub village: Option<String>,
}

/// Arguments for the interactive chat session
#[derive(Parser, Debug, Clone)]
pub struct ChatArgs {
    /// Village id to select before the session starts
    #[arg(long, value_name = "VILLAGE_ID")]
    pub village: Option<String>,
}

/// Arguments for per-village recommendations
#[derive(Parser, Debug, Clone)]
pub struct RecommendArgs {
    /// Village id to recommend for
    #[arg(value_name = "VILLAGE_ID")]
    pub village: String,

    /// Maximum number of schemes to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for listing schemes
#[derive(Parser, Debug, Clone)]
pub struct SchemesArgs {
    /// Only show schemes of this category
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<String>,
}

/// Arguments for listing villages
#[derive(Parser, Debug, Clone)]
pub struct VillagesArgs {}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let mut args = SahayakArgs::parse_from(["sahayak", "ask", "hello"]);
        assert_eq!(args.verbosity(), 1);

        args.verbose = 2;
        assert_eq!(args.verbosity(), 2);

        args.quiet = true;
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_ask_command_parsing() {
        let args =
            SahayakArgs::parse_from(["sahayak", "ask", "which schemes", "--village", "khandwa"]);

        match args.command {
            Command::Ask(ask) => {
                assert_eq!(ask.query, "which schemes");
                assert_eq!(ask.village.as_deref(), Some("khandwa"));
            }
            _ => panic!("Expected ask command"),
        }
    }

    #[test]
    fn test_default_catalog_paths() {
        let args = SahayakArgs::parse_from(["sahayak", "villages"]);
        assert_eq!(args.schemes, PathBuf::from("data/schemes.json"));
        assert_eq!(args.villages, PathBuf::from("data/villages.json"));
    }
}
