//! Artifact naming and per-entry staging outcomes

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Separator replacement keeping mangled basenames flat and collision-free
const PATH_DELIMITER: &str = "___";

/// Prefix distinguishing staged artifacts from other cache files
const ARTIFACT_PREFIX: &str = "cache-";

/// How a source entry is turned into its artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Plain CSS, copied byte-for-byte
    Css,
    /// SCSS/SASS source, compiled to CSS
    Sass,
}

impl ArtifactKind {
    /// Classify a source path by extension
    pub fn of(source: &Path) -> Self {
        match source.extension().and_then(|e| e.to_str()) {
            Some("scss") | Some("sass") => Self::Sass,
            _ => Self::Css,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css => write!(f, "css"),
            Self::Sass => write!(f, "sass"),
        }
    }
}

/// Compute the cache basename for a source path
///
/// Path separators become `___` and the result is prefixed with `cache-`,
/// so `src/common/styles.css` maps to `cache-src___common___styles.css`.
/// Sass sources get a `.css` suffix since the artifact is the compiled
/// output. Injective over paths that don't already contain the delimiter.
pub fn destination_basename(source: &Path) -> String {
    let mangled = source
        .to_string_lossy()
        .replace(['/', '\\'], PATH_DELIMITER);

    let mangled = match ArtifactKind::of(source) {
        ArtifactKind::Sass => {
            let stem = mangled
                .strip_suffix(".scss")
                .or_else(|| mangled.strip_suffix(".sass"))
                .unwrap_or(&mangled);
            format!("{stem}.css")
        }
        ArtifactKind::Css => mangled,
    };

    format!("{ARTIFACT_PREFIX}{mangled}")
}

/// Terminal state of one staged entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactStatus {
    /// Artifact written to the cache
    Staged,
    /// Staging failed; the reason is the stringified error
    Failed(String),
}

impl ArtifactStatus {
    /// Whether the artifact was written successfully
    pub fn is_staged(&self) -> bool {
        matches!(self, Self::Staged)
    }
}

/// Outcome of staging one external stylesheet entry
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactOutcome {
    /// Source path as configured
    pub source: PathBuf,
    /// Destination path under the cache root
    pub destination: PathBuf,
    /// Copy or compile
    pub kind: ArtifactKind,
    /// Staged or failed
    pub status: ArtifactStatus,
}
