//! Loading-focused tests for configuration
//!
//! File reading, lenient fallbacks, and project config lookup order.

#[cfg(test)]
mod loading_tests {
    use std::fs;
    use std::path::Path;

    use crate::config::{
        find_project_config, global_config_path, load_config_file, load_global_config,
        load_project_config, load_yaml_file, project_config_candidates, Layout, LoadOutcome,
        RawConfig, PROJECT_CONFIG_FILE,
    };
    use crate::vcs::{FixedRoot, NoVcs};
    use crate::{Error, Result};

    fn temp() -> Result<tempfile::TempDir> {
        tempfile::tempdir().map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))
    }

    #[test]
    fn test_missing_file_is_missing() {
        let outcome = load_config_file(Path::new("/nonexistent/path/to/config.yaml"));
        assert!(matches!(outcome, LoadOutcome::Missing));
        assert_eq!(outcome.into_config(), RawConfig::default());
    }

    #[test]
    fn test_empty_file_is_empty_config() -> Result<()> {
        let dir = temp()?;
        let path = dir.path().join("tmux-bro.yaml");
        fs::write(&path, "")?;

        assert_eq!(load_yaml_file(&path)?, RawConfig::default());
        assert!(load_config_file(&path).is_loaded());
        Ok(())
    }

    #[test]
    fn test_null_document_is_empty_config() -> Result<()> {
        let dir = temp()?;
        let path = dir.path().join("tmux-bro.yaml");
        fs::write(&path, "~\n")?;

        assert_eq!(load_yaml_file(&path)?, RawConfig::default());
        Ok(())
    }

    #[test]
    fn test_valid_yaml() -> Result<()> {
        let dir = temp()?;
        let path = dir.path().join("tmux-bro.yaml");
        fs::write(
            &path,
            "layout: tiled\nmain_pane_width: 60%\nprojects_dir: ~/code\ndev_command: make dev\n",
        )?;

        let config = load_yaml_file(&path)?;
        assert_eq!(config.layout, Some(Layout::Tiled));
        assert_eq!(config.main_pane_width.as_deref(), Some("60%"));
        assert_eq!(config.projects_dir.as_deref(), Some("~/code"));
        assert_eq!(config.dev_command.as_deref(), Some("make dev"));
        Ok(())
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() -> Result<()> {
        let dir = temp()?;
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "layout: [unclosed\n  : :")?;

        let result = load_yaml_file(&path);
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("parse"));
            assert_eq!(e.exit_code(), 1);
        }
        Ok(())
    }

    #[test]
    fn test_malformed_yaml_is_treated_as_absent() -> Result<()> {
        let dir = temp()?;
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "packages: 42\n")?;

        let outcome = load_config_file(&path);
        assert!(matches!(outcome, LoadOutcome::Invalid(_)));
        assert_eq!(outcome.into_config(), RawConfig::default());
        Ok(())
    }

    #[test]
    fn test_directory_instead_of_file() -> Result<()> {
        let dir = temp()?;
        let result = load_yaml_file(dir.path());
        assert!(result.is_err());
        assert!(matches!(
            load_config_file(dir.path()),
            LoadOutcome::Invalid(_)
        ));
        Ok(())
    }

    #[test]
    fn test_global_config_without_path() {
        assert_eq!(load_global_config(None), RawConfig::default());
    }

    #[test]
    fn test_global_config_path_shape() {
        if let Some(path) = global_config_path() {
            assert!(path.ends_with(".config/tmux-bro.yaml"));
        }
    }

    #[test]
    fn test_candidates_without_vcs() {
        let dir = Path::new("/work/app");
        assert_eq!(
            project_config_candidates(dir, None),
            vec![dir.join(PROJECT_CONFIG_FILE)]
        );
    }

    #[test]
    fn test_candidates_with_distinct_vcs_root() {
        let dir = Path::new("/work/repo/packages/app");
        let root = Path::new("/work/repo");
        assert_eq!(
            project_config_candidates(dir, Some(root)),
            vec![root.join(PROJECT_CONFIG_FILE), dir.join(PROJECT_CONFIG_FILE)]
        );
    }

    #[test]
    fn test_candidates_when_dir_is_vcs_root() {
        let dir = Path::new("/work/repo");
        assert_eq!(
            project_config_candidates(dir, Some(dir)),
            vec![dir.join(PROJECT_CONFIG_FILE)]
        );
    }

    #[test]
    fn test_vcs_root_config_wins_over_directory_config() -> Result<()> {
        let repo = temp()?;
        let pkg = repo.path().join("packages/app");
        fs::create_dir_all(&pkg)?;
        fs::write(repo.path().join(PROJECT_CONFIG_FILE), "layout: tiled\n")?;
        fs::write(pkg.join(PROJECT_CONFIG_FILE), "layout: even-vertical\n")?;

        let locator = FixedRoot(repo.path().to_path_buf());
        assert_eq!(
            find_project_config(&pkg, &locator),
            Some(repo.path().join(PROJECT_CONFIG_FILE))
        );
        assert_eq!(
            load_project_config(&pkg, &locator).layout,
            Some(Layout::Tiled)
        );
        Ok(())
    }

    #[test]
    fn test_directory_config_used_when_vcs_root_has_none() -> Result<()> {
        let repo = temp()?;
        let pkg = repo.path().join("app");
        fs::create_dir_all(&pkg)?;
        fs::write(pkg.join(PROJECT_CONFIG_FILE), "dev_command: cargo watch\n")?;

        let locator = FixedRoot(repo.path().to_path_buf());
        assert_eq!(
            load_project_config(&pkg, &locator).dev_command.as_deref(),
            Some("cargo watch")
        );
        Ok(())
    }

    #[test]
    fn test_directory_config_without_vcs() -> Result<()> {
        let dir = temp()?;
        fs::write(dir.path().join(PROJECT_CONFIG_FILE), "layout: main-horizontal\n")?;

        assert_eq!(
            load_project_config(dir.path(), &NoVcs).layout,
            Some(Layout::MainHorizontal)
        );
        Ok(())
    }

    #[test]
    fn test_malformed_root_config_does_not_fall_back() -> Result<()> {
        let repo = temp()?;
        let pkg = repo.path().join("app");
        fs::create_dir_all(&pkg)?;
        fs::write(repo.path().join(PROJECT_CONFIG_FILE), "layout: [oops")?;
        fs::write(pkg.join(PROJECT_CONFIG_FILE), "layout: tiled\n")?;

        let locator = FixedRoot(repo.path().to_path_buf());
        assert_eq!(load_project_config(&pkg, &locator), RawConfig::default());
        Ok(())
    }
}
