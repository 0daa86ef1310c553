//! Stage command - run the staging operation

use crate::cache::{ArtifactStatus, CacheDir};
use crate::cli::args::{OutputFormat, StageArgs};
use crate::config::Config;
use crate::error::{StyleCacheError, StyleCacheResult};
use crate::sass::SassCompiler;
use crate::stage::{StageOptions, StageReport, Stager};
use crate::ui;

/// Execute the stage command
pub async fn execute(args: StageArgs, config: &Config) -> StyleCacheResult<()> {
    let project_root = std::env::current_dir()
        .map_err(|e| StyleCacheError::io("getting current directory", e))?;

    let options = StageOptions {
        external_css: pick_list(args.css, &config.styles.external_css),
        public_folder: args
            .public_folder
            .or_else(|| config.styles.public_folder.clone()),
        sass_load_paths: pick_list(args.load_path, &config.sass.load_paths),
    };

    let cache = match args.cache_dir.or_else(|| config.cache.dir.clone()) {
        Some(dir) => CacheDir::new(project_root.join(dir)),
        None => CacheDir::default_in(&project_root),
    };

    let compiler = match args.sass_bin.or_else(|| config.sass.binary.clone()) {
        Some(binary) => SassCompiler::with_binary(binary),
        None => SassCompiler::new(),
    };

    let stager = Stager::new(cache, project_root).with_compiler(compiler);
    let report = stager.stage(&options).await?;

    print_report(&report, stager.cache(), args.format)?;

    if report.has_failures() {
        return Err(StyleCacheError::User(format!(
            "{} of {} artifact(s) failed to stage",
            report.failed_count(),
            report.artifacts.len()
        )));
    }

    Ok(())
}

/// Flag values override config values; an empty flag list means "not given"
fn pick_list<T: Clone>(flag: Vec<T>, config: &[T]) -> Vec<T> {
    if flag.is_empty() {
        config.to_vec()
    } else {
        flag
    }
}

fn print_report(
    report: &StageReport,
    cache: &CacheDir,
    format: OutputFormat,
) -> StyleCacheResult<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Plain => {
            for artifact in &report.artifacts {
                let state = if artifact.status.is_staged() {
                    "staged"
                } else {
                    "failed"
                };
                println!("{}\t{}", state, artifact.destination.display());
            }
        }
        OutputFormat::Table => {
            ui::section(&format!("Cache: {}", cache.root().display()));
            for artifact in &report.artifacts {
                match &artifact.status {
                    ArtifactStatus::Staged => ui::step_ok_detail(
                        &artifact.source.display().to_string(),
                        &artifact.destination.display().to_string(),
                    ),
                    ArtifactStatus::Failed(reason) => {
                        ui::step_error_detail(&artifact.source.display().to_string(), reason)
                    }
                }
            }
            if report.manifest_written {
                ui::step_ok("Sass load-path manifest written");
            }
            if report.public_marker_written {
                ui::step_ok("Public-folder marker written");
            }
            if report.artifacts.is_empty()
                && !report.manifest_written
                && !report.public_marker_written
            {
                ui::step_ok("Nothing to stage, cache directory ready");
            }
        }
    }
    Ok(())
}
