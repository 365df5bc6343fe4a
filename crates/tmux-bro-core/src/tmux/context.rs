//! Inputs to session synthesis that would otherwise come from ambient state.

use std::path::{Path, PathBuf};

use crate::config::global_config_path;
use crate::vcs::{GitRoot, NoVcs, VcsRootLocator};

pub const DEFAULT_EDITOR: &str = "vim";

/// Editor command, global config location and VCS lookup for one synthesis run.
pub struct SynthesisContext {
    pub editor: String,
    pub global_config: Option<PathBuf>,
    vcs: Box<dyn VcsRootLocator>,
}

impl SynthesisContext {
    /// A context with the given editor, no global config and no VCS lookup.
    pub fn new(editor: impl Into<String>) -> Self {
        Self {
            editor: editor.into(),
            global_config: None,
            vcs: Box::new(NoVcs),
        }
    }

    /// Read `EDITOR`, the per-user config path and git from the running process.
    pub fn from_env() -> Self {
        Self {
            editor: editor_or_default(std::env::var("EDITOR").ok()),
            global_config: global_config_path(),
            vcs: Box::new(GitRoot),
        }
    }

    #[must_use]
    pub fn with_editor(mut self, editor: impl Into<String>) -> Self {
        self.editor = editor.into();
        self
    }

    #[must_use]
    pub fn with_global_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.global_config = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_vcs(mut self, vcs: impl VcsRootLocator + 'static) -> Self {
        self.vcs = Box::new(vcs);
        self
    }

    pub fn global_config(&self) -> Option<&Path> {
        self.global_config.as_deref()
    }

    pub fn vcs(&self) -> &dyn VcsRootLocator {
        self.vcs.as_ref()
    }
}

impl Default for SynthesisContext {
    fn default() -> Self {
        Self::new(DEFAULT_EDITOR)
    }
}

impl std::fmt::Debug for SynthesisContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynthesisContext")
            .field("editor", &self.editor)
            .field("global_config", &self.global_config)
            .finish_non_exhaustive()
    }
}

/// Empty or unset `EDITOR` means vim.
fn editor_or_default(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}
