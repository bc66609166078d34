//! Batch clone engine

use crate::git::Git;
use crate::models::RepoSpec;

/// Result of processing one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloneOutcome {
    /// Freshly cloned
    Cloned,
    /// Already present on disk, left untouched
    Skipped,
    /// The clone failed
    Failed(String),
}

/// Work plan for a clone run
#[derive(Debug)]
pub struct ClonePlan {
    /// Repositories that still need cloning
    pub to_clone: Vec<RepoSpec>,
    /// Number of repositories already present on disk
    pub present: usize,
}

/// Split specs into missing and already-present
pub fn plan(specs: &[RepoSpec]) -> ClonePlan {
    let mut to_clone = Vec::new();
    let mut present = 0;

    for spec in specs {
        if spec.dest.exists() {
            present += 1;
        } else {
            to_clone.push(spec.clone());
        }
    }

    ClonePlan { to_clone, present }
}

/// Clone engine driving the git subprocess layer
pub struct Cloner<'a> {
    git: &'a Git,
}

impl<'a> Cloner<'a> {
    /// Create a new cloner
    pub fn new(git: &'a Git) -> Self {
        Self { git }
    }

    /// Clone a single repository into its category directory
    ///
    /// Failures are reported as an outcome rather than an error so the
    /// batch can keep going.
    pub fn clone_one(&self, spec: &RepoSpec) -> CloneOutcome {
        if spec.dest.exists() {
            return CloneOutcome::Skipped;
        }

        if let Some(parent) = spec.dest.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                return CloneOutcome::Failed(err.to_string());
            }
        }

        match self.git.clone_repo(&spec.url, &spec.dest) {
            Ok(()) => CloneOutcome::Cloned,
            Err(err) => CloneOutcome::Failed(err.to_string()),
        }
    }
}
