//! Thin wrapper over the system git binary
//!
//! All git transport goes through subprocesses; the tool carries no network
//! client of its own and performs no retries.

use std::path::Path;
use std::process::Command;

use crate::error::{ReposError, Result};

/// Handle to the system git executable
pub struct Git;

impl Git {
    /// Probe that git is available on PATH
    pub fn new() -> Result<Self> {
        let output = Command::new("git")
            .arg("--version")
            .output()
            .map_err(|_| ReposError::GitUnavailable)?;

        if !output.status.success() {
            return Err(ReposError::GitUnavailable);
        }

        tracing::debug!(
            "using {}",
            String::from_utf8_lossy(&output.stdout).trim()
        );
        Ok(Self)
    }

    /// Clone a repository into the given destination
    pub fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        tracing::debug!("git clone {} {}", url, dest.display());

        let output = Command::new("git")
            .arg("clone")
            .arg(url)
            .arg(dest)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ReposError::git(format!(
                "clone {}: {}",
                url,
                stderr.trim()
            )));
        }
        Ok(())
    }

    /// Whether the directory looks like a git repository
    pub fn is_repo(dir: &Path) -> bool {
        dir.join(".git").exists()
    }

    /// Whether the working tree has uncommitted changes
    pub fn is_dirty(&self, dir: &Path) -> Result<bool> {
        let out = self.run(dir, &["status", "--porcelain"])?;
        Ok(!out.trim().is_empty())
    }

    /// Current branch name
    pub fn current_branch(&self, dir: &Path) -> Result<String> {
        let out = self.run(dir, &["rev-parse", "--abbrev-ref", "HEAD"])?;
        Ok(out.trim().to_string())
    }

    /// URL of the `origin` remote, if one is configured
    pub fn remote_url(&self, dir: &Path) -> Result<Option<String>> {
        let output = Command::new("git")
            .args(["remote", "get-url", "origin"])
            .current_dir(dir)
            .output()?;

        if !output.status.success() {
            return Ok(None);
        }
        Ok(Some(
            String::from_utf8_lossy(&output.stdout).trim().to_string(),
        ))
    }

    /// Run a git subcommand in a directory and capture stdout
    fn run(&self, dir: &Path, args: &[&str]) -> Result<String> {
        tracing::debug!("git {} (in {})", args.join(" "), dir.display());

        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ReposError::git(format!(
                "{}: {}",
                args.join(" "),
                stderr.trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Normalize a remote URL so that equivalent spellings compare equal
///
/// `https://github.com/o/n.git`, `git@github.com:o/n` and
/// `ssh://git@github.com/o/n` all normalize to `github.com/o/n`.
pub fn normalize_remote(url: &str) -> String {
    let url = url.trim();
    let url = url.strip_suffix(".git").unwrap_or(url);
    let url = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .or_else(|| url.strip_prefix("ssh://"))
        .unwrap_or(url);
    let url = url.strip_prefix("git@").unwrap_or(url);
    url.replacen(':', "/", 1).trim_end_matches('/').to_string()
}
