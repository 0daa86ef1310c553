//! stylecache - Stylesheet staging cache for DOM test previews
//!
//! Stages external CSS and Sass/SCSS sources into a preview cache directory,
//! along with a Sass load-path manifest and a public-folder marker, for a
//! separate DOM transform step to consume at test-render time.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod sass;
pub mod stage;
pub mod ui;

pub use error::{StyleCacheError, StyleCacheResult};
pub use stage::{StageOptions, StageReport, Stager};
