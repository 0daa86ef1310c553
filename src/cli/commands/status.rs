//! Status command - show cache directory contents

use crate::cache::{CacheDir, PUBLIC_FOLDER_CONFIG, SASS_LOAD_PATHS_CONFIG};
use crate::cli::args::{OutputFormat, StatusArgs};
use crate::config::Config;
use crate::error::{StyleCacheError, StyleCacheResult};
use crate::ui;
use serde::Serialize;
use std::path::PathBuf;
use tokio::fs;

/// Inventory of the cache root
#[derive(Debug, Serialize)]
struct CacheStatus {
    root: PathBuf,
    exists: bool,
    artifacts: Vec<String>,
    load_paths: Option<Vec<PathBuf>>,
    public_folder: Option<String>,
}

/// Execute the status command
pub async fn execute(args: StatusArgs, config: &Config) -> StyleCacheResult<()> {
    let project_root = std::env::current_dir()
        .map_err(|e| StyleCacheError::io("getting current directory", e))?;

    let cache = match args.cache_dir.or_else(|| config.cache.dir.clone()) {
        Some(dir) => CacheDir::new(project_root.join(dir)),
        None => CacheDir::default_in(&project_root),
    };

    let status = inspect(&cache).await?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&status)?),
        OutputFormat::Plain => {
            for artifact in &status.artifacts {
                println!("{artifact}");
            }
        }
        OutputFormat::Table => {
            ui::section(&format!("Cache: {}", status.root.display()));
            if !status.exists {
                ui::key_value("state", "not created (run: stylecache stage)");
                return Ok(());
            }
            ui::key_value("artifacts", &status.artifacts.len().to_string());
            for artifact in &status.artifacts {
                println!("    {artifact}");
            }
            if let Some(paths) = &status.load_paths {
                ui::key_value("load paths", &paths.len().to_string());
            }
            if let Some(folder) = &status.public_folder {
                ui::key_value("public folder", folder);
            }
        }
    }

    Ok(())
}

async fn inspect(cache: &CacheDir) -> StyleCacheResult<CacheStatus> {
    if !cache.root().is_dir() {
        return Ok(CacheStatus {
            root: cache.root().to_path_buf(),
            exists: false,
            artifacts: vec![],
            load_paths: None,
            public_folder: None,
        });
    }

    let mut artifacts = Vec::new();
    let mut entries = fs::read_dir(cache.root())
        .await
        .map_err(|e| StyleCacheError::io(format!("reading {}", cache.root().display()), e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| StyleCacheError::io(format!("reading {}", cache.root().display()), e))?
    {
        let name = entry.file_name().to_string_lossy().to_string();
        // Metadata files are reported separately below
        if name != SASS_LOAD_PATHS_CONFIG && name != PUBLIC_FOLDER_CONFIG {
            artifacts.push(name);
        }
    }
    artifacts.sort();

    let load_paths = match fs::read_to_string(cache.manifest_path()).await {
        Ok(content) => Some(serde_json::from_str(&content)?),
        Err(_) => None,
    };

    let public_folder = fs::read_to_string(cache.marker_path()).await.ok();

    Ok(CacheStatus {
        root: cache.root().to_path_buf(),
        exists: true,
        artifacts,
        load_paths,
        public_folder,
    })
}
