//! Preview cache layout and artifact naming
//!
//! The cache root holds one flat directory of derived files: a `cache-`
//! prefixed artifact per external stylesheet, a JSON manifest of resolved
//! Sass load paths, and a marker file recording the public folder. The
//! downstream DOM transform step reads all of these at render time.
//!
//! # Naming
//!
//! Artifact basenames are a deterministic mangle of the source path: every
//! path separator becomes `___`, prefixed with `cache-`. Two distinct source
//! paths never collide as long as neither contains `___` in a segment.
//!
//! | Source | Artifact |
//! |--------|----------|
//! | `src/common/styles.css` | `cache-src___common___styles.css` |
//! | `src/common/styles.scss` | `cache-src___common___styles.css` (compiled) |

pub mod artifact;
pub mod dir;

pub use artifact::{destination_basename, ArtifactKind, ArtifactOutcome, ArtifactStatus};
pub use dir::{CacheDir, DEFAULT_CACHE_DIR, PUBLIC_FOLDER_CONFIG, SASS_LOAD_PATHS_CONFIG};
