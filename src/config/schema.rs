//! Configuration schema for stylecache
//!
//! Global configuration lives at `~/.config/stylecache/config.toml`; a
//! project-local `stylecache.toml` overrides it field by field (list fields
//! replace, they do not append).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Stylesheet inputs
    pub styles: StylesConfig,

    /// Sass compiler settings
    pub sass: SassConfig,

    /// Cache location settings
    pub cache: CacheConfig,
}

impl Config {
    /// Merge a project-local config over this one
    ///
    /// Local scalar fields win when set; local list fields win when
    /// non-empty.
    pub fn merged_with(mut self, local: Config) -> Config {
        if !local.styles.external_css.is_empty() {
            self.styles.external_css = local.styles.external_css;
        }
        if local.styles.public_folder.is_some() {
            self.styles.public_folder = local.styles.public_folder;
        }
        if local.sass.binary.is_some() {
            self.sass.binary = local.sass.binary;
        }
        if !local.sass.load_paths.is_empty() {
            self.sass.load_paths = local.sass.load_paths;
        }
        if local.cache.dir.is_some() {
            self.cache.dir = local.cache.dir;
        }
        self
    }
}

/// Stylesheet input settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StylesConfig {
    /// External stylesheets to stage, relative to the project root
    pub external_css: Vec<PathBuf>,

    /// Static-assets folder recorded for the transform step
    pub public_folder: Option<String>,
}

/// Sass compiler settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SassConfig {
    /// Compiler binary (defaults to `sass` on PATH)
    pub binary: Option<PathBuf>,

    /// Import search paths, relative to the project root
    pub load_paths: Vec<PathBuf>,
}

/// Cache location settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache root override (defaults to `.cache/stylecache` in the project)
    pub dir: Option<PathBuf>,
}
