//! repos - batch categorized clone tool for GitHub repositories
//!
//! Main entry point for the repos CLI application.

use std::process::ExitCode;

use console::style;
use tracing_subscriber::EnvFilter;

use repos::cli::{self, Cli, Commands};
use repos::config::Config;
use repos::error::Result;

/// Application banner
const BANNER: &str = r#"
  ██████╗ ███████╗██████╗  ██████╗ ███████╗
  ██╔══██╗██╔════╝██╔══██╗██╔═══██╗██╔════╝
  ██████╔╝█████╗  ██████╔╝██║   ██║███████╗
  ██╔══██╗██╔══╝  ██╔═══╝ ██║   ██║╚════██║
  ██║  ██║███████╗██║     ╚██████╔╝███████║
  ╚═╝  ╚═╝╚══════╝╚═╝      ╚═════╝ ╚══════╝
"#;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Set up logging from CLI flags and configuration
///
/// `RUST_LOG` wins over everything; otherwise `--verbose`/`--quiet`
/// override the configured level.
fn setup_logging(cli: &Cli, config: &Config) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        config.logging.level.as_str()
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Main application logic
fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    setup_logging(&cli, &config);

    if !config.logging.color {
        console::set_colors_enabled(false);
    }

    // Show banner before the heavy command (not in quiet mode)
    if !cli.quiet {
        if let Commands::Clone(_) = &cli.command {
            println!("{}", style(BANNER).cyan());
            println!(
                "  {} v{}\n",
                style("repos").bold(),
                style(repos::VERSION).dim()
            );
        }
    }

    // Dispatch to the appropriate command handler
    match &cli.command {
        Commands::Clone(args) => cli::execute_clone(args, &config, cli.quiet),
        Commands::Check(args) => cli::execute_check(args, &config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner() {
        // The banner is ASCII art; check that it's not empty and has the
        // expected structure
        assert!(!BANNER.trim().is_empty());
        assert!(BANNER.lines().count() >= 6);
    }
}
