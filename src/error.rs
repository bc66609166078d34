//! Error types for repos

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for repos operations
#[derive(Error, Debug)]
pub enum ReposError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid manifest: {0}")]
    Manifest(String),

    #[error("Invalid repository entry: {0}")]
    InvalidRepo(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("git command failed: {0}")]
    Git(String),

    #[error("git executable not found on PATH")]
    GitUnavailable,

    #[error("{failed} of {total} repositories failed to clone")]
    CloneFailed { failed: usize, total: usize },

    #[error("{failing} repositories need attention")]
    CheckFailed { failing: usize },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for repos operations
pub type Result<T> = std::result::Result<T, ReposError>;

impl ReposError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new manifest error
    pub fn manifest(msg: impl Into<String>) -> Self {
        Self::Manifest(msg.into())
    }

    /// Create a new git error
    pub fn git(msg: impl Into<String>) -> Self {
        Self::Git(msg.into())
    }

    /// Create an invalid repository entry error
    pub fn invalid_repo(msg: impl Into<String>) -> Self {
        Self::InvalidRepo(msg.into())
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}
