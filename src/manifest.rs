//! Manifest resolution and validation

use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{ReposError, Result};
use crate::models::RepoSpec;

/// The resolved repository manifest
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Clone root directory
    pub root: PathBuf,
    /// Category names, in configuration order
    pub categories: Vec<String>,
    /// All resolved repository specs
    pub specs: Vec<RepoSpec>,
}

impl Manifest {
    /// Resolve and validate the manifest from the configuration
    ///
    /// Duplicate repository names are rejected: the destination directory
    /// is derived from the name, so classification must be unambiguous.
    pub fn resolve(config: &Config) -> Result<Self> {
        let root = config.root();
        let mut categories = Vec::new();
        let mut specs = Vec::new();
        let mut seen: HashMap<String, String> = HashMap::new();

        for (category, cat) in &config.categories {
            categories.push(category.clone());

            for entry in &cat.repos {
                let spec = RepoSpec::parse(entry, category, &root)?;

                if let Some(previous) = seen.get(&spec.name) {
                    return Err(ReposError::manifest(format!(
                        "repository '{}' is listed more than once ('{}' and '{}')",
                        spec.name, previous, category
                    )));
                }
                seen.insert(spec.name.clone(), category.clone());
                specs.push(spec);
            }
        }

        if specs.is_empty() {
            return Err(ReposError::manifest(
                "no repositories configured; add a [categories.<name>] section",
            ));
        }

        Ok(Self {
            root,
            categories,
            specs,
        })
    }

    /// Specs restricted to one category, or all of them
    pub fn filtered(&self, category: Option<&str>) -> Result<Vec<RepoSpec>> {
        match category {
            None => Ok(self.specs.clone()),
            Some(name) => {
                if !self.categories.iter().any(|c| c == name) {
                    return Err(ReposError::UnknownCategory(name.to_string()));
                }
                Ok(self
                    .specs
                    .iter()
                    .filter(|s| s.category == name)
                    .cloned()
                    .collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(raw: &str) -> Config {
        toml::from_str(raw).unwrap()
    }

    #[test]
    fn test_resolve() {
        let manifest = Manifest::resolve(&config(
            r#"
            [general]
            root = "/srv/code"

            [categories.languages]
            repos = ["rust-lang/rust"]

            [categories.tools]
            repos = ["BurntSushi/ripgrep", "sharkdp/fd"]
            "#,
        ))
        .unwrap();

        assert_eq!(manifest.root, PathBuf::from("/srv/code"));
        assert_eq!(manifest.categories, vec!["languages", "tools"]);
        assert_eq!(manifest.specs.len(), 3);
        assert_eq!(
            manifest.specs[0].dest,
            PathBuf::from("/srv/code/languages/rust")
        );
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = Manifest::resolve(&config(
            r#"
            [categories.a]
            repos = ["one/tool"]

            [categories.b]
            repos = ["another/tool"]
            "#,
        ));

        assert!(matches!(result, Err(ReposError::Manifest(_))));
    }

    #[test]
    fn test_empty_manifest_rejected() {
        assert!(matches!(
            Manifest::resolve(&config("")),
            Err(ReposError::Manifest(_))
        ));
    }

    #[test]
    fn test_filtered() {
        let manifest = Manifest::resolve(&config(
            r#"
            [general]
            root = "/srv/code"

            [categories.tools]
            repos = ["BurntSushi/ripgrep", "sharkdp/fd"]

            [categories.languages]
            repos = ["rust-lang/rust"]
            "#,
        ))
        .unwrap();

        assert_eq!(manifest.filtered(None).unwrap().len(), 3);
        assert_eq!(manifest.filtered(Some("tools")).unwrap().len(), 2);
        assert!(matches!(
            manifest.filtered(Some("games")),
            Err(ReposError::UnknownCategory(_))
        ));
    }
}
