//! External Sass compiler invocation
//!
//! Shells out to the Dart Sass CLI rather than linking a compiler in-process.
//! The binary is configurable so projects can point at a locally installed
//! `sass` (e.g. `node_modules/.bin/sass`).

use crate::error::{StyleCacheError, StyleCacheResult};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Default Sass CLI binary name, resolved via PATH
pub const DEFAULT_SASS_BINARY: &str = "sass";

/// Handle to the command-line Sass compiler
#[derive(Debug, Clone)]
pub struct SassCompiler {
    binary: PathBuf,
}

impl SassCompiler {
    /// Create a compiler handle using the default binary
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from(DEFAULT_SASS_BINARY),
        }
    }

    /// Create a compiler handle for a specific binary
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Get the configured binary path
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Check if the compiler is invocable
    pub async fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Compile one SCSS/SASS source to a CSS destination
    ///
    /// Source maps are disabled; each load path is passed as a `--load-path`
    /// flag for import resolution.
    pub async fn compile(
        &self,
        source: &Path,
        destination: &Path,
        load_paths: &[PathBuf],
    ) -> StyleCacheResult<()> {
        let mut args: Vec<String> = vec![
            source.display().to_string(),
            destination.display().to_string(),
            "--no-source-map".to_string(),
        ];
        for load_path in load_paths {
            args.push("--load-path".to_string());
            args.push(load_path.display().to_string());
        }

        let mut cmd = Command::new(&self.binary);
        cmd.args(&args).stdout(Stdio::piped()).stderr(Stdio::piped());

        let command_line = format!("{} {}", self.binary.display(), args.join(" "));
        debug!("Executing: {}", command_line);

        let output = cmd.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StyleCacheError::SassNotFound {
                    binary: self.binary.display().to_string(),
                }
            } else {
                StyleCacheError::command_failed(command_line.clone(), e)
            }
        })?;

        if output.status.success() {
            debug!("Compiled {} -> {}", source.display(), destination.display());
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(StyleCacheError::command_exec(command_line, stderr))
        }
    }
}

impl Default for SassCompiler {
    fn default() -> Self {
        Self::new()
    }
}
