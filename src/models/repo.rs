//! Repository spec resolution
//!
//! Manifest entries are either GitHub slugs (`owner/name`) or full clone
//! URLs. Both resolve to a [`RepoSpec`] carrying the clone URL and the
//! destination directory `<root>/<category>/<name>`.

use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ReposError, Result};

lazy_static! {
    static ref SLUG_RE: Regex =
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*/[A-Za-z0-9][A-Za-z0-9._-]*$").unwrap();
}

/// A single repository resolved from the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSpec {
    /// Directory name, derived from the slug or URL
    pub name: String,
    /// Clone URL
    pub url: String,
    /// Category the repository is classified under
    pub category: String,
    /// Destination directory: `<root>/<category>/<name>`
    pub dest: PathBuf,
}

impl RepoSpec {
    /// Resolve a manifest entry into a spec
    pub fn parse(entry: &str, category: &str, root: &Path) -> Result<Self> {
        let entry = entry.trim();

        let (name, url) = if is_url(entry) {
            (name_from_url(entry)?, entry.to_string())
        } else if SLUG_RE.is_match(entry) {
            let name = entry.split('/').nth(1).unwrap().to_string();
            (name, format!("https://github.com/{entry}.git"))
        } else {
            return Err(ReposError::invalid_repo(format!(
                "'{entry}' is neither an owner/name slug nor a clone URL"
            )));
        };

        let dest = root.join(category).join(&name);
        Ok(Self {
            name,
            url,
            category: category.to_string(),
            dest,
        })
    }
}

fn is_url(entry: &str) -> bool {
    entry.starts_with("https://")
        || entry.starts_with("http://")
        || entry.starts_with("ssh://")
        || entry.starts_with("git@")
}

/// Derive the directory name from a clone URL
fn name_from_url(url: &str) -> Result<String> {
    let tail = url
        .trim_end_matches('/')
        .rsplit(|c| c == '/' || c == ':')
        .next()
        .unwrap_or("");
    let name = tail.strip_suffix(".git").unwrap_or(tail);

    if name.is_empty() {
        return Err(ReposError::invalid_repo(format!(
            "cannot derive a repository name from '{url}'"
        )));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> PathBuf {
        PathBuf::from("/tmp/repos")
    }

    #[test]
    fn test_parse_slug() {
        let spec = RepoSpec::parse("rust-lang/rust", "languages", &root()).unwrap();
        assert_eq!(spec.name, "rust");
        assert_eq!(spec.url, "https://github.com/rust-lang/rust.git");
        assert_eq!(spec.dest, PathBuf::from("/tmp/repos/languages/rust"));
    }

    #[test]
    fn test_parse_https_url() {
        let spec = RepoSpec::parse("https://github.com/sharkdp/fd.git", "tools", &root()).unwrap();
        assert_eq!(spec.name, "fd");
        assert_eq!(spec.url, "https://github.com/sharkdp/fd.git");
        assert_eq!(spec.dest, PathBuf::from("/tmp/repos/tools/fd"));
    }

    #[test]
    fn test_parse_ssh_url() {
        let spec = RepoSpec::parse("git@github.com:octocat/hello-world.git", "misc", &root()).unwrap();
        assert_eq!(spec.name, "hello-world");
        assert_eq!(spec.url, "git@github.com:octocat/hello-world.git");
    }

    #[test]
    fn test_invalid_entries() {
        assert!(RepoSpec::parse("not-a-slug", "misc", &root()).is_err());
        assert!(RepoSpec::parse("too/many/parts", "misc", &root()).is_err());
        assert!(RepoSpec::parse("/leading", "misc", &root()).is_err());
    }
}
