//! Staging operation: options in, cache artifacts out
//!
//! `Stager` bundles the context one staging run needs (cache root, project
//! root, compiler handle) so nothing lives in process-wide state and
//! concurrent runs can be isolated by giving each its own cache root.
//!
//! Staging never checks whether an artifact is already present or fresh:
//! source contents can change without the cache knowing, so every call
//! restages every configured entry and the report says what happened.

use crate::cache::{ArtifactKind, ArtifactOutcome, ArtifactStatus, CacheDir};
use crate::error::{StyleCacheError, StyleCacheResult};
use crate::sass::SassCompiler;
use futures_util::future::join_all;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// Options for one staging run
#[derive(Debug, Clone, Default)]
pub struct StageOptions {
    /// External stylesheets to stage, relative to the project root
    pub external_css: Vec<PathBuf>,
    /// Static-assets folder recorded for the transform step
    pub public_folder: Option<String>,
    /// Sass import search paths, relative to the project root
    pub sass_load_paths: Vec<PathBuf>,
}

/// Result of one staging run, one outcome per configured entry
#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    /// Per-entry outcomes, in input order
    pub artifacts: Vec<ArtifactOutcome>,
    /// Whether the load-path manifest was written
    pub manifest_written: bool,
    /// Whether the public-folder marker was written
    pub public_marker_written: bool,
}

impl StageReport {
    /// Whether any entry failed to stage
    pub fn has_failures(&self) -> bool {
        self.artifacts.iter().any(|a| !a.status.is_staged())
    }

    /// Number of entries that failed to stage
    pub fn failed_count(&self) -> usize {
        self.artifacts
            .iter()
            .filter(|a| !a.status.is_staged())
            .count()
    }
}

/// Staging context: cache root, project root, and compiler
#[derive(Debug, Clone)]
pub struct Stager {
    cache: CacheDir,
    project_root: PathBuf,
    sass: SassCompiler,
}

impl Stager {
    /// Create a stager with the default Sass compiler
    pub fn new(cache: CacheDir, project_root: impl Into<PathBuf>) -> Self {
        Self {
            cache,
            project_root: project_root.into(),
            sass: SassCompiler::new(),
        }
    }

    /// Replace the compiler handle
    pub fn with_compiler(mut self, sass: SassCompiler) -> Self {
        self.sass = sass;
        self
    }

    /// Get the cache directory handle
    pub fn cache(&self) -> &CacheDir {
        &self.cache
    }

    /// Run the staging operation
    ///
    /// Ensures the cache root exists, persists the load-path manifest (when
    /// load paths are configured), stages every external stylesheet, and
    /// writes the public-folder marker (when configured). Returns after all
    /// artifacts have been written or failed; per-entry failures land in the
    /// report and do not abort sibling entries. The error channel is for
    /// setup failures only: cache-dir creation, manifest write, marker write.
    pub async fn stage(&self, options: &StageOptions) -> StyleCacheResult<StageReport> {
        self.cache.ensure().await?;

        let load_paths = self.resolve_load_paths(&options.sass_load_paths);

        let manifest_written = if load_paths.is_empty() {
            false
        } else {
            self.write_manifest(&load_paths).await?;
            true
        };

        let artifacts = join_all(
            options
                .external_css
                .iter()
                .map(|entry| self.stage_entry(entry, &load_paths)),
        )
        .await;

        let public_marker_written = match &options.public_folder {
            Some(folder) => {
                self.write_public_marker(folder).await?;
                true
            }
            None => false,
        };

        let report = StageReport {
            artifacts,
            manifest_written,
            public_marker_written,
        };

        info!(
            "Staged {} artifact(s), {} failed",
            report.artifacts.len(),
            report.failed_count()
        );
        Ok(report)
    }

    /// Resolve configured load paths against the project root
    fn resolve_load_paths(&self, load_paths: &[PathBuf]) -> Vec<PathBuf> {
        load_paths
            .iter()
            .map(|p| self.project_root.join(p))
            .collect()
    }

    /// Persist resolved load paths as a JSON array for the transform step
    async fn write_manifest(&self, load_paths: &[PathBuf]) -> StyleCacheResult<()> {
        let manifest_path = self.cache.manifest_path();
        let content = serde_json::to_string(load_paths)?;

        fs::write(&manifest_path, content)
            .await
            .map_err(|e| StyleCacheError::ManifestWrite {
                path: manifest_path.clone(),
                source: e,
            })?;

        debug!("Wrote load-path manifest: {}", manifest_path.display());
        Ok(())
    }

    /// Record the public folder path, overwriting any previous content
    async fn write_public_marker(&self, public_folder: &str) -> StyleCacheResult<()> {
        let marker_path = self.cache.marker_path();

        fs::write(&marker_path, public_folder)
            .await
            .map_err(|e| StyleCacheError::MarkerWrite {
                path: marker_path.clone(),
                source: e,
            })?;

        debug!("Wrote public-folder marker: {}", marker_path.display());
        Ok(())
    }

    /// Stage one entry, capturing failure into the outcome
    async fn stage_entry(&self, entry: &Path, load_paths: &[PathBuf]) -> ArtifactOutcome {
        let kind = ArtifactKind::of(entry);
        let destination = self.cache.artifact_path(entry);
        let source = self.project_root.join(entry);

        let result = match kind {
            ArtifactKind::Sass => self.sass.compile(&source, &destination, load_paths).await,
            ArtifactKind::Css => self.copy_artifact(&source, &destination).await,
        };

        let status = match result {
            Ok(()) => ArtifactStatus::Staged,
            Err(e) => {
                warn!("Failed to stage {}: {}", entry.display(), e);
                ArtifactStatus::Failed(e.to_string())
            }
        };

        ArtifactOutcome {
            source: entry.to_path_buf(),
            destination,
            kind,
            status,
        }
    }

    /// Copy a plain CSS source byte-for-byte into the cache
    async fn copy_artifact(&self, source: &Path, destination: &Path) -> StyleCacheResult<()> {
        fs::copy(source, destination)
            .await
            .map_err(|e| StyleCacheError::CopyFailed {
                path: source.to_path_buf(),
                destination: destination.to_path_buf(),
                source: e,
            })?;

        debug!("Copied {} -> {}", source.display(), destination.display());
        Ok(())
    }
}
