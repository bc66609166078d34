//! Repository state checking and report rendering

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use console::style;
use walkdir::WalkDir;

use crate::error::Result;
use crate::git::{self, Git};
use crate::models::{CheckEntry, CheckReport, RepoSpec, RepoState};

/// Checker inspecting managed clones against the manifest
pub struct Checker<'a> {
    git: &'a Git,
}

impl<'a> Checker<'a> {
    /// Create a new checker
    pub fn new(git: &'a Git) -> Self {
        Self { git }
    }

    /// Check the given specs, optionally scanning the root for untracked
    /// directories
    pub fn check(
        &self,
        root: &Path,
        specs: &[RepoSpec],
        scan_untracked: bool,
    ) -> Result<CheckReport> {
        let mut entries = Vec::with_capacity(specs.len());
        for spec in specs {
            entries.push(self.entry(spec)?);
        }

        let untracked = if scan_untracked {
            untracked_dirs(root, specs)?
        } else {
            Vec::new()
        };

        Ok(CheckReport {
            generated_at: chrono::Local::now().to_rfc3339(),
            root: root.to_path_buf(),
            entries,
            untracked,
        })
    }

    /// Determine the state of one repository
    ///
    /// git is only consulted once the destination exists and carries a
    /// `.git` directory.
    fn entry(&self, spec: &RepoSpec) -> Result<CheckEntry> {
        if !spec.dest.exists() {
            return Ok(make_entry(spec, RepoState::Missing, None, None));
        }

        if !Git::is_repo(&spec.dest) {
            return Ok(make_entry(spec, RepoState::NotARepo, None, None));
        }

        let branch = self.git.current_branch(&spec.dest).ok();

        match self.git.remote_url(&spec.dest)? {
            None => Ok(make_entry(
                spec,
                RepoState::WrongRemote,
                branch,
                Some("no 'origin' remote".to_string()),
            )),
            Some(actual) if git::normalize_remote(&actual) != git::normalize_remote(&spec.url) => {
                Ok(make_entry(spec, RepoState::WrongRemote, branch, Some(actual)))
            }
            Some(_) => {
                let state = if self.git.is_dirty(&spec.dest)? {
                    RepoState::Dirty
                } else {
                    RepoState::Clean
                };
                Ok(make_entry(spec, state, branch, None))
            }
        }
    }
}

fn make_entry(
    spec: &RepoSpec,
    state: RepoState,
    branch: Option<String>,
    detail: Option<String>,
) -> CheckEntry {
    CheckEntry {
        name: spec.name.clone(),
        category: spec.category.clone(),
        state,
        branch,
        detail,
    }
}

/// Find category/name directories under the root that no spec claims
fn untracked_dirs(root: &Path, specs: &[RepoSpec]) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let managed: HashSet<&Path> = specs.iter().map(|s| s.dest.as_path()).collect();
    let mut found = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        if managed.contains(entry.path()) {
            continue;
        }

        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };
        // Hidden directories at either level are not drift
        if rel
            .components()
            .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
        {
            continue;
        }

        found.push(rel.to_path_buf());
    }

    Ok(found)
}

/// Print a report as aligned, colored lines
pub fn print_pretty(report: &CheckReport) {
    let width = report
        .entries
        .iter()
        .map(|e| e.category.len() + e.name.len() + 1)
        .max()
        .unwrap_or(0);

    for entry in &report.entries {
        let badge = format!("[{}]", entry.state.label());
        let badge = match entry.state {
            RepoState::Clean => style(format!("{badge:<9}")).green(),
            RepoState::Dirty => style(format!("{badge:<9}")).yellow(),
            RepoState::Missing | RepoState::NotARepo => style(format!("{badge:<9}")).red(),
            RepoState::WrongRemote => style(format!("{badge:<9}")).magenta(),
        };

        let path = format!("{}/{}", entry.category, entry.name);
        let context = match (&entry.detail, &entry.branch) {
            (Some(detail), _) => detail.clone(),
            (None, Some(branch)) => branch.clone(),
            (None, None) => String::new(),
        };

        println!("{} {:<width$}  {}", badge, path, style(context).dim());
    }

    if !report.untracked.is_empty() {
        println!("\n{}", style("Untracked directories:").bold());
        for dir in &report.untracked {
            println!("  {}", dir.display());
        }
    }

    let failing = report.failing();
    let total = report.entries.len();
    if failing == 0 {
        println!("\n{} all {} repositories clean", style("✓").green().bold(), total);
    } else {
        println!(
            "\n{} {} of {} repositories need attention",
            style("✗").red().bold(),
            failing,
            total
        );
    }
}

/// Render a report as pretty-printed JSON
pub fn render_json(report: &CheckReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
