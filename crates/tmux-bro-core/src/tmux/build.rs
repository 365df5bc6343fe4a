//! Session synthesis - Functional Core
//!
//! Turns a directory into a [`SessionDescriptor`]. Only reads the filesystem
//! (manifests, lock files, config files); never talks to tmux.

use std::path::Path;

use tracing::debug;

use super::context::SynthesisContext;
use super::descriptor::{window_options, SessionDescriptor, Window};
use super::panes::build_panes;
use crate::config::{ConfigResolver, EffectiveConfig};
use crate::workspace::{detect_package_manager, detect_workspace, has_dev_script, PackageManagerKind};

/// Build the session for `directory` using the running process's environment.
pub fn build_session_config(directory: &Path) -> SessionDescriptor {
    build_session_config_with(directory, &SynthesisContext::from_env())
}

/// Build the session for `directory` with explicit inputs.
///
/// A workspace root yields one named window per member, in declaration order.
/// Any other directory yields a single unnamed window.
pub fn build_session_config_with(directory: &Path, ctx: &SynthesisContext) -> SessionDescriptor {
    let resolver = ConfigResolver::load(ctx.global_config(), ctx.vcs());
    let root_layers = resolver.layers_for(directory);

    let windows = match detect_workspace(directory) {
        Some(members) => members
            .iter()
            .map(|member| {
                let name = base_name(member);
                let settings = resolver.resolve(member, None);
                let plan = WindowPlan {
                    dir: member,
                    dev_command: root_layers.dev_command_for(Some(name.as_str())),
                    package_manager: detect_package_manager(member),
                };
                plan.into_window(Some(name), &settings, &ctx.editor)
            })
            .collect(),
        None => {
            let settings = root_layers.effective();
            let plan = WindowPlan {
                dir: directory,
                dev_command: settings.dev_command.clone(),
                package_manager: detect_package_manager(directory),
            };
            vec![plan.into_window(None, &settings, &ctx.editor)]
        }
    };

    SessionDescriptor {
        session_name: session_name_for(directory),
        windows,
    }
}

struct WindowPlan<'a> {
    dir: &'a Path,
    dev_command: Option<String>,
    package_manager: PackageManagerKind,
}

impl WindowPlan<'_> {
    /// The command for the dev pane, `None` when the window gets no dev pane.
    ///
    /// A configured command wins. An empty configured command still asks for a
    /// dev pane but runs the manager's default, as does a bare `dev` script.
    fn dev_command(&self) -> Option<String> {
        match self.dev_command.as_deref() {
            Some(command) if !command.trim().is_empty() => Some(command.to_string()),
            Some(_) => Some(self.package_manager.dev_command()),
            None => has_dev_script(self.dir).then(|| self.package_manager.dev_command()),
        }
    }

    fn into_window(self, name: Option<String>, settings: &EffectiveConfig, editor: &str) -> Window {
        let dev_command = self.dev_command();
        debug!(
            dir = %self.dir.display(),
            package_manager = %self.package_manager,
            dev = dev_command.as_deref().unwrap_or("-"),
            layout = %settings.layout,
            "window planned"
        );

        Window {
            name,
            layout: settings.layout.clone(),
            start_directory: self.dir.to_path_buf(),
            options: window_options(settings),
            panes: build_panes(self.dir, editor, dev_command.as_deref()),
        }
    }
}

/// Name of the session for `directory`: its base name, never a package name.
pub fn session_name_for(directory: &Path) -> String {
    base_name(directory)
}

/// Last path component, resolving `.`/`..` through the filesystem when needed.
fn base_name(path: &Path) -> String {
    path.file_name()
        .map(ToOwned::to_owned)
        .or_else(|| {
            path.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(ToOwned::to_owned))
        })
        .map_or_else(
            || path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
}
