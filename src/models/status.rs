//! Check result representation

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// State of one managed repository on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepoState {
    /// Cloned, correct remote, clean working tree
    Clean,
    /// Uncommitted changes in the working tree
    Dirty,
    /// Destination directory does not exist
    Missing,
    /// Destination exists but is not a git repository
    NotARepo,
    /// `origin` points somewhere other than the manifest URL
    WrongRemote,
}

impl RepoState {
    /// Short badge text for pretty output
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Dirty => "dirty",
            Self::Missing => "missing",
            Self::NotARepo => "no-repo",
            Self::WrongRemote => "remote",
        }
    }

    /// Whether this state passes a check
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Clean)
    }
}

/// Check result for one repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckEntry {
    /// Repository name
    pub name: String,
    /// Category it is classified under
    pub category: String,
    /// Observed state
    pub state: RepoState,
    /// Current branch, when the repository is present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Extra context, e.g. the actual remote URL on a mismatch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Full report produced by `repos check`
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckReport {
    /// When the report was generated (RFC 3339)
    pub generated_at: String,
    /// Clone root the check ran against
    pub root: PathBuf,
    /// One entry per manifest repository
    pub entries: Vec<CheckEntry>,
    /// Directories under the root that no manifest entry claims
    pub untracked: Vec<PathBuf>,
}

impl CheckReport {
    /// Number of entries that did not come back clean
    pub fn failing(&self) -> usize {
        self.entries.iter().filter(|e| !e.state.is_ok()).count()
    }

    /// Whether every manifest entry is clean
    pub fn is_ok(&self) -> bool {
        self.failing() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_labels() {
        assert_eq!(RepoState::Clean.label(), "clean");
        assert_eq!(RepoState::NotARepo.label(), "no-repo");
        assert!(RepoState::Clean.is_ok());
        assert!(!RepoState::Missing.is_ok());
    }

    #[test]
    fn test_state_serializes_kebab_case() {
        let json = serde_json::to_string(&RepoState::WrongRemote).unwrap();
        assert_eq!(json, "\"wrong-remote\"");
    }

    #[test]
    fn test_report_failing() {
        let report = CheckReport {
            generated_at: "2024-01-01T00:00:00+00:00".to_string(),
            root: PathBuf::from("/tmp/repos"),
            entries: vec![
                CheckEntry {
                    name: "a".into(),
                    category: "c".into(),
                    state: RepoState::Clean,
                    branch: Some("main".into()),
                    detail: None,
                },
                CheckEntry {
                    name: "b".into(),
                    category: "c".into(),
                    state: RepoState::Missing,
                    branch: None,
                    detail: None,
                },
            ],
            untracked: Vec::new(),
        };

        assert_eq!(report.failing(), 1);
        assert!(!report.is_ok());
    }
}
