//! Command-line interface for repos

mod commands;

pub use commands::*;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// repos - batch categorized clone tool for GitHub repositories
///
/// Clone the repositories listed in your manifest into per-category
/// directories, and audit the local tree against the manifest.
#[derive(Parser, Debug)]
#[command(name = "repos")]
#[command(author, version, about, long_about = crate::LONG_DESCRIPTION)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "REPOS_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clone missing repositories into their category directories
    Clone(CloneArgs),

    /// Check local clones against the manifest
    Check(CheckArgs),
}

/// Arguments for the clone command
#[derive(Parser, Debug, Clone)]
pub struct CloneArgs {
    /// Only process this category
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the check command
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Only check this category
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Pretty)]
    pub format: ReportFormat,
}

/// Check output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable colored output
    Pretty,
    /// JSON output
    Json,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_clone_flags() {
        let cli = Cli::parse_from(["repos", "clone", "--category", "tools", "-y"]);
        match cli.command {
            Commands::Clone(args) => {
                assert_eq!(args.category.as_deref(), Some("tools"));
                assert!(args.yes);
            }
            _ => panic!("expected clone subcommand"),
        }
    }

    #[test]
    fn test_parse_check_format() {
        let cli = Cli::parse_from(["repos", "check", "--format", "json"]);
        match cli.command {
            Commands::Check(args) => assert_eq!(args.format, ReportFormat::Json),
            _ => panic!("expected check subcommand"),
        }
    }
}
