//! Layering tests: defaults → global → project → package override.

#[cfg(test)]
mod resolve_tests {
    use std::collections::BTreeMap;
    use std::fs;

    use crate::config::{
        ConfigLayers, ConfigResolver, EffectiveConfig, Layout, PackageConfig, RawConfig,
        PROJECT_CONFIG_FILE,
    };
    use crate::vcs::NoVcs;
    use crate::{Error, Result};

    fn with_packages(dev_command: Option<&str>, packages: &[(&str, &str)]) -> RawConfig {
        RawConfig {
            dev_command: dev_command.map(ToString::to_string),
            packages: packages
                .iter()
                .map(|(name, cmd)| {
                    (
                        (*name).to_string(),
                        PackageConfig {
                            dev_command: Some((*cmd).to_string()),
                        },
                    )
                })
                .collect::<BTreeMap<_, _>>(),
            ..RawConfig::default()
        }
    }

    #[test]
    fn test_no_layers_gives_defaults() {
        let effective = ConfigLayers::default().effective();
        assert_eq!(effective, EffectiveConfig::default());
        assert_eq!(effective.layout, Layout::MainVertical);
        assert_eq!(effective.main_pane_width, "50%");
        assert_eq!(effective.main_pane_height, "50%");
        assert_eq!(effective.dev_command, None);
    }

    #[test]
    fn test_global_overrides_defaults() {
        let global = RawConfig {
            layout: Some(Layout::EvenHorizontal),
            main_pane_height: Some("30%".to_string()),
            ..RawConfig::default()
        };
        let effective = ConfigLayers::new(global, RawConfig::default()).effective();
        assert_eq!(effective.layout, Layout::EvenHorizontal);
        assert_eq!(effective.main_pane_height, "30%");
        assert_eq!(effective.main_pane_width, "50%");
    }

    #[test]
    fn test_project_overrides_global_key_by_key() {
        let global = RawConfig {
            layout: Some(Layout::Tiled),
            main_pane_width: Some("40%".to_string()),
            dev_command: Some("global dev".to_string()),
            ..RawConfig::default()
        };
        let project = RawConfig {
            main_pane_width: Some("65%".to_string()),
            ..RawConfig::default()
        };
        let effective = ConfigLayers::new(global, project).effective();
        assert_eq!(effective.layout, Layout::Tiled);
        assert_eq!(effective.main_pane_width, "65%");
        assert_eq!(effective.dev_command.as_deref(), Some("global dev"));
    }

    #[test]
    fn test_package_override_beats_project_default() {
        let project = with_packages(Some("npm start"), &[("pkg1", "vite --port 3001")]);
        let layers = ConfigLayers::new(RawConfig::default(), project);

        assert_eq!(
            layers.dev_command_for(Some("pkg1")).as_deref(),
            Some("vite --port 3001")
        );
        assert_eq!(
            layers.dev_command_for(Some("pkg2")).as_deref(),
            Some("npm start")
        );
        assert_eq!(layers.dev_command_for(None).as_deref(), Some("npm start"));
    }

    #[test]
    fn test_package_without_dev_command_falls_back() {
        let mut project = with_packages(Some("make dev"), &[]);
        project
            .packages
            .insert("docs".to_string(), PackageConfig::default());
        let layers = ConfigLayers::new(RawConfig::default(), project);

        assert_eq!(
            layers.dev_command_for(Some("docs")).as_deref(),
            Some("make dev")
        );
    }

    #[test]
    fn test_global_packages_are_ignored() {
        let global = with_packages(None, &[("pkg1", "from global")]);
        let layers = ConfigLayers::new(global, RawConfig::default());
        assert_eq!(layers.dev_command_for(Some("pkg1")), None);
    }

    #[test]
    fn test_merge_prefers_other_and_keeps_gaps() {
        let base = RawConfig {
            layout: Some(Layout::Tiled),
            projects_dir: Some("~/src".to_string()),
            ..RawConfig::default()
        };
        let over = RawConfig {
            layout: Some(Layout::MainHorizontal),
            ..RawConfig::default()
        };
        let merged = base.merge(over);
        assert_eq!(merged.layout, Some(Layout::MainHorizontal));
        assert_eq!(merged.projects_dir.as_deref(), Some("~/src"));
    }

    #[test]
    fn test_resolver_reads_project_file_per_directory() -> Result<()> {
        let dir = tempfile::tempdir()
            .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
        let with_config = dir.path().join("a");
        let without_config = dir.path().join("b");
        fs::create_dir_all(&with_config)?;
        fs::create_dir_all(&without_config)?;
        fs::write(
            with_config.join(PROJECT_CONFIG_FILE),
            "layout: main-horizontal\nmain_pane_height: 75%\n",
        )?;

        let global = RawConfig {
            main_pane_height: Some("20%".to_string()),
            ..RawConfig::default()
        };
        let resolver = ConfigResolver::new(global, &NoVcs);

        let a = resolver.resolve(&with_config, None);
        assert_eq!(a.layout, Layout::MainHorizontal);
        assert_eq!(a.main_pane_height, "75%");

        let b = resolver.resolve(&without_config, None);
        assert_eq!(b.layout, Layout::MainVertical);
        assert_eq!(b.main_pane_height, "20%");
        Ok(())
    }
}
