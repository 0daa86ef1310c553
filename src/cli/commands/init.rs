//! Init command - create project-local stylecache.toml

use crate::cli::args::InitArgs;
use crate::config::LOCAL_CONFIG_FILE;
use crate::error::{StyleCacheError, StyleCacheResult};
use crate::ui;
use std::path::Path;
use tokio::fs;

/// Template for project-local config
const INIT_TEMPLATE: &str = r#"# stylecache project configuration
# Settings here override your global config (~/.config/stylecache/config.toml)

[styles]
# external_css = ["src/common/styles.scss", "vendor/reset.css"]
# public_folder = "public"

[sass]
# binary = "node_modules/.bin/sass"
# load_paths = ["styles", "vendor/scss"]

[cache]
# dir = ".cache/stylecache"
"#;

/// Execute the init command
pub async fn execute(args: InitArgs) -> StyleCacheResult<()> {
    let target_dir = match args.path {
        Some(ref p) => p.clone(),
        None => std::env::current_dir()
            .map_err(|e| StyleCacheError::io("getting current directory", e))?,
    };

    let config_path = target_dir.join(LOCAL_CONFIG_FILE);

    if config_path.exists() && !args.force {
        return Err(StyleCacheError::User(format!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        )));
    }

    ensure_dir(&target_dir).await?;

    fs::write(&config_path, INIT_TEMPLATE)
        .await
        .map_err(|e| StyleCacheError::io(format!("writing {}", config_path.display()), e))?;

    ui::step_ok_detail(
        "Created project config",
        &config_path.display().to_string(),
    );

    Ok(())
}

async fn ensure_dir(dir: &Path) -> StyleCacheResult<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .await
            .map_err(|e| StyleCacheError::io(format!("creating directory {}", dir.display()), e))?;
    }
    Ok(())
}
