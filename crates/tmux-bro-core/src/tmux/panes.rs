//! Pane command lists: editor, optional dev process, and a trailing shell.

use std::path::{Path, PathBuf};

use super::descriptor::Pane;

/// Location of a Python virtualenv activation script under a package.
pub fn venv_activate_path(dir: &Path) -> Option<PathBuf> {
    let path = dir.join("venv").join("bin").join("activate");
    path.is_file().then_some(path)
}

fn activation(venv: Option<&Path>) -> Vec<String> {
    venv.map(|path| format!("source {}", path.display()))
        .into_iter()
        .collect()
}

pub fn editor_pane(venv: Option<&Path>, editor: &str) -> Pane {
    let mut commands = activation(venv);
    commands.push(editor.to_string());
    Pane::new(commands)
}

pub fn dev_pane(venv: Option<&Path>, dev_command: &str) -> Pane {
    let mut commands = activation(venv);
    commands.push(dev_command.to_string());
    Pane::new(commands)
}

pub fn shell_pane(venv: Option<&Path>) -> Pane {
    Pane::new(activation(venv))
}

/// Editor first, dev pane second when present, shell last.
pub fn build_panes(dir: &Path, editor: &str, dev_command: Option<&str>) -> Vec<Pane> {
    let venv = venv_activate_path(dir);
    let venv = venv.as_deref();

    let mut panes = vec![editor_pane(venv, editor)];
    if let Some(command) = dev_command {
        panes.push(dev_pane(venv, command));
    }
    panes.push(shell_pane(venv));
    panes
}
