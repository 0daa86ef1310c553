//! Integration tests for stylecache

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn stylecache() -> Command {
        cargo_bin_cmd!("stylecache")
    }

    /// Command rooted in a temp project, isolated from any user config
    fn stylecache_in(project: &Path) -> Command {
        let mut cmd = stylecache();
        cmd.current_dir(project)
            .arg("--no-local")
            .arg("--config")
            .arg(project.join("no-such-config.toml"));
        cmd
    }

    fn cache_root(project: &Path) -> PathBuf {
        project.join(".cache/stylecache")
    }

    #[cfg(unix)]
    fn write_fake_sass(project: &Path) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = project.join("fake-sass");
        std::fs::write(&path, "#!/bin/sh\ncp \"$1\" \"$2\"\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn help_displays() {
        stylecache()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Stylesheet staging cache"));
    }

    #[test]
    fn version_displays() {
        stylecache()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("stylecache"));
    }

    #[test]
    fn init_creates_project_config() {
        let temp = TempDir::new().unwrap();

        stylecache()
            .current_dir(temp.path())
            .arg("init")
            .assert()
            .success();

        let content = std::fs::read_to_string(temp.path().join("stylecache.toml")).unwrap();
        assert!(content.contains("[styles]"));

        // Second run without --force refuses to overwrite
        stylecache()
            .current_dir(temp.path())
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn stage_copies_css_byte_for_byte() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("src/common")).unwrap();
        std::fs::write(
            temp.path().join("src/common/styles.css"),
            ".a { margin: 0; }\n",
        )
        .unwrap();

        stylecache_in(temp.path())
            .args(["stage", "--css", "src/common/styles.css"])
            .assert()
            .success();

        let artifact = cache_root(temp.path()).join("cache-src___common___styles.css");
        assert_eq!(
            std::fs::read_to_string(artifact).unwrap(),
            ".a { margin: 0; }\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn stage_compiles_scss_to_mangled_css_name() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("src/common")).unwrap();
        std::fs::write(
            temp.path().join("src/common/styles.scss"),
            "body { color: red; }\n",
        )
        .unwrap();
        write_fake_sass(temp.path());

        stylecache_in(temp.path())
            .args([
                "stage",
                "--css",
                "src/common/styles.scss",
                "--sass-bin",
                "./fake-sass",
            ])
            .assert()
            .success();

        assert!(cache_root(temp.path())
            .join("cache-src___common___styles.css")
            .exists());
    }

    #[test]
    fn stage_writes_manifest_and_marker() {
        let temp = TempDir::new().unwrap();

        stylecache_in(temp.path())
            .args([
                "stage",
                "--load-path",
                "styles",
                "--load-path",
                "vendor/scss",
                "--public-folder",
                "public",
            ])
            .assert()
            .success();

        let manifest =
            std::fs::read_to_string(cache_root(temp.path()).join("cache-sass-load-paths.config"))
                .unwrap();
        let paths: Vec<PathBuf> = serde_json::from_str(&manifest).unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths[0].is_absolute());
        assert!(paths[0].ends_with("styles"));
        assert!(paths[1].ends_with("vendor/scss"));

        let marker =
            std::fs::read_to_string(cache_root(temp.path()).join("cache-public.config")).unwrap();
        assert_eq!(marker, "public");
    }

    #[test]
    fn stage_with_empty_options_only_creates_cache_dir() {
        let temp = TempDir::new().unwrap();

        stylecache_in(temp.path()).arg("stage").assert().success();

        let root = cache_root(temp.path());
        assert!(root.is_dir());
        assert_eq!(std::fs::read_dir(&root).unwrap().count(), 0);
    }

    #[test]
    fn stage_missing_source_exits_nonzero() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("good.css"), "ok").unwrap();

        stylecache_in(temp.path())
            .args(["stage", "--css", "missing.css", "--css", "good.css"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("1 of 2 artifact(s) failed"));

        // The sibling entry was still staged
        assert!(cache_root(temp.path()).join("cache-good.css").exists());
    }

    #[test]
    fn stage_json_report() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("styles.css"), "ok").unwrap();

        let output = stylecache_in(temp.path())
            .args(["stage", "--css", "styles.css", "--format", "json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(report["artifacts"][0]["status"], "staged");
        assert_eq!(report["manifest_written"], false);
    }

    #[test]
    fn stage_reads_local_config() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("styles.css"), "from config").unwrap();
        std::fs::write(
            temp.path().join("stylecache.toml"),
            "[styles]\nexternal_css = [\"styles.css\"]\n",
        )
        .unwrap();

        // No --no-local: the project-local config supplies the entry
        stylecache()
            .current_dir(temp.path())
            .arg("--config")
            .arg(temp.path().join("no-such-config.toml"))
            .arg("stage")
            .assert()
            .success();

        assert!(cache_root(temp.path()).join("cache-styles.css").exists());
    }

    #[test]
    fn status_lists_staged_artifacts() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("styles.css"), "ok").unwrap();

        stylecache_in(temp.path())
            .args(["stage", "--css", "styles.css", "--public-folder", "public"])
            .assert()
            .success();

        stylecache_in(temp.path())
            .args(["status", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("cache-styles.css"));

        stylecache_in(temp.path())
            .args(["status", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"public_folder\": \"public\""));
    }

    #[test]
    fn status_on_missing_cache() {
        let temp = TempDir::new().unwrap();

        stylecache_in(temp.path())
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("not created"));
    }

    #[test]
    fn completions_generate() {
        stylecache()
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("stylecache"));
    }
}
