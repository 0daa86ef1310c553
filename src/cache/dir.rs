//! Cache root handling
//!
//! `CacheDir` is an explicit handle to the cache root, passed into the
//! stager rather than kept as process-wide state. Callers that need
//! isolation (parallel test-runner workers, tests) hand each invocation its
//! own root.

use crate::cache::artifact::destination_basename;
use crate::error::{StyleCacheError, StyleCacheResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Default cache root, relative to the project root
pub const DEFAULT_CACHE_DIR: &str = ".cache/stylecache";

/// Fixed basename of the JSON manifest holding resolved Sass load paths
pub const SASS_LOAD_PATHS_CONFIG: &str = "cache-sass-load-paths.config";

/// Fixed basename of the marker file holding the public folder path
pub const PUBLIC_FOLDER_CONFIG: &str = "cache-public.config";

/// Handle to the preview cache root
#[derive(Debug, Clone)]
pub struct CacheDir {
    root: PathBuf,
}

impl CacheDir {
    /// Create a handle for the given root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a handle for the default root under a project directory
    pub fn default_in(project_root: &Path) -> Self {
        Self::new(project_root.join(DEFAULT_CACHE_DIR))
    }

    /// Get the cache root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ensure the cache root exists (recursive, idempotent)
    pub async fn ensure(&self) -> StyleCacheResult<()> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StyleCacheError::CacheDirCreate {
                path: self.root.clone(),
                source: e,
            })?;
        debug!("Cache directory ready: {}", self.root.display());
        Ok(())
    }

    /// Path of the Sass load-path manifest
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(SASS_LOAD_PATHS_CONFIG)
    }

    /// Path of the public-folder marker
    pub fn marker_path(&self) -> PathBuf {
        self.root.join(PUBLIC_FOLDER_CONFIG)
    }

    /// Destination path for one external stylesheet source
    pub fn artifact_path(&self, source: &Path) -> PathBuf {
        self.root.join(destination_basename(source))
    }
}
