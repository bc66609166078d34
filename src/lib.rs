//! repos - batch categorized clone tool for GitHub repositories
//!
//! `repos` reads a TOML manifest that classifies GitHub repositories into
//! categories, clones the missing ones into `<root>/<category>/<name>`,
//! and audits the local tree against the manifest. All git work goes
//! through the system `git` binary, one repository at a time.
//!
//! # Quick Start
//!
//! ```bash
//! # Clone everything listed in the manifest
//! repos clone
//!
//! # Restrict to one category
//! repos clone --category tools
//!
//! # Audit local clones
//! repos check
//!
//! # Machine-readable report
//! repos check --format json
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod checker;
pub mod cli;
pub mod cloner;
pub mod config;
/// Long-description resolution for the package metadata (shared with the
/// build script)
pub mod description;
pub mod error;
pub mod git;
pub mod manifest;
pub mod models;

// Re-export commonly used types
pub use error::{ReposError, Result};
pub use models::{CheckEntry, CheckReport, RepoSpec, RepoState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Long description embedded at build time: the contents of README.md when
/// the file exists, otherwise a fixed fallback string
pub const LONG_DESCRIPTION: &str =
    include_str!(concat!(env!("OUT_DIR"), "/long_description.md"));

/// Check all configured repositories and return the report
///
/// # Arguments
///
/// * `config_path` - Explicit configuration file, or `None` for the
///   default location
///
/// # Returns
///
/// The full check report, including the untracked-directory scan
pub fn check(config_path: Option<&std::path::Path>) -> Result<CheckReport> {
    let config = config::Config::load(config_path)?;
    let manifest = manifest::Manifest::resolve(&config)?;
    let git = git::Git::new()?;

    checker::Checker::new(&git).check(&manifest.root, &manifest.specs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "1.0.0");
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "repos");
    }

    #[test]
    fn test_long_description_not_empty() {
        assert!(!LONG_DESCRIPTION.trim().is_empty());
    }
}
