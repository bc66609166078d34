//! Configuration management for repos
//!
//! A single TOML file carries both the tool settings and the repository
//! manifest:
//!
//! ```toml
//! [general]
//! root = "~/code"
//!
//! [categories.languages]
//! repos = ["rust-lang/rust", "python/cpython"]
//!
//! [categories.tools]
//! repos = ["BurntSushi/ripgrep", "https://github.com/sharkdp/fd.git"]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ReposError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Repository manifest, grouped by category
    #[serde(default)]
    pub categories: BTreeMap<String, CategoryConfig>,
}

/// General configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Root directory clones are placed under (default: ~/repos)
    pub root: Option<PathBuf>,
    /// Automatically accept prompts
    #[serde(default)]
    pub auto_yes: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_level")]
    pub level: String,
    /// Enable colored output
    #[serde(default = "default_color")]
    pub color: bool,
}

/// One category of the repository manifest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryConfig {
    /// Repository entries: `owner/name` slugs or full clone URLs
    #[serde(default)]
    pub repos: Vec<String>,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_color() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            root: None,
            auto_yes: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ReposError::config("Could not find config directory"))?;
        Ok(config_dir.join("repos").join("repos.toml"))
    }

    /// Load configuration from an explicit path, or the default location
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ReposError::file_not_found(p));
                }
                p.to_path_buf()
            }
            None => {
                let default = Self::config_path()?;
                if !default.exists() {
                    return Err(ReposError::config(format!(
                        "No configuration file found at '{}'. Create it with a \
                         [categories.<name>] section listing repositories.",
                        default.display()
                    )));
                }
                default
            }
        };

        tracing::debug!("loading configuration from {}", path.display());
        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the clone root directory
    pub fn root(&self) -> PathBuf {
        match &self.general.root {
            Some(root) => expand_tilde(root),
            None => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("repos"),
        }
    }
}

/// Expand a leading `~` to the user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    let Some(s) = path.to_str() else {
        return path.to_path_buf();
    };

    if s == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = s.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.general.root.is_none());
        assert!(!config.general.auto_yes);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.color);
        assert!(config.categories.is_empty());
    }

    #[test]
    fn test_parse_full() {
        let config: Config = toml::from_str(
            r#"
            [general]
            root = "/srv/mirror"
            auto_yes = true

            [logging]
            level = "debug"
            color = false

            [categories.tools]
            repos = ["BurntSushi/ripgrep"]
            "#,
        )
        .unwrap();

        assert_eq!(config.root(), PathBuf::from("/srv/mirror"));
        assert!(config.general.auto_yes);
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.color);
        assert_eq!(config.categories["tools"].repos, vec!["BurntSushi/ripgrep"]);
    }

    #[test]
    fn test_expand_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/code")), home.join("code"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
        assert_eq!(expand_tilde(Path::new("/abs/code")), PathBuf::from("/abs/code"));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repos.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[categories.misc]\nrepos = [\"octocat/hello-world\"]").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.categories["misc"].repos.len(), 1);

        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(Some(&missing)),
            Err(ReposError::FileNotFound { .. })
        ));
    }
}
