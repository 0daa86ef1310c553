//! Error types for stylecache
//!
//! All modules use `StyleCacheResult<T>` as their return type.
//! Per-artifact staging failures are not raised through this type; they are
//! collected into the stage report so sibling entries keep processing.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for stylecache operations
pub type StyleCacheResult<T> = Result<T, StyleCacheError>;

/// All errors that can occur in stylecache
#[derive(Error, Debug)]
pub enum StyleCacheError {
    // Cache errors
    #[error("Failed to create cache directory {path}: {source}")]
    CacheDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write load-path manifest {path}: {source}")]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write public-folder marker {path}: {source}")]
    MarkerWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {path} to {destination}: {source}")]
    CopyFailed {
        path: PathBuf,
        destination: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Sass compiler not found: {binary}")]
    SassNotFound { binary: String },

    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command execution error: {command}, stderr: {stderr}")]
    CommandExecution { command: String, stderr: String },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl StyleCacheError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Create a command execution error
    pub fn command_exec(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::CommandExecution {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::SassNotFound { .. } => {
                Some("Install Dart Sass: https://sass-lang.com/install or npm install -g sass")
            }
            Self::ConfigInvalid { .. } => Some("Run: stylecache init --force"),
            _ => None,
        }
    }
}
