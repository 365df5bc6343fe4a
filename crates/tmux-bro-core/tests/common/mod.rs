//! Common test utilities and relaxed clippy settings for tmux-bro-core integration tests
//!
//! Fixture trees are built under a temp dir; every helper returns `Result`.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    // Test code ergonomics
    clippy::too_many_lines,
    // Format string ergonomics for tests
    clippy::uninlined_format_args,
    // Documentation relaxations for test-only code
    clippy::doc_markdown,
    clippy::missing_errors_doc,
    // Test-specific patterns
    clippy::needless_raw_string_hashes,
)]
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tmux_bro_core::{Error, Result, SynthesisContext};

/// A project tree rooted in a temp dir that lives as long as the fixture.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir()
            .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `contents` to `relative`, creating parent directories.
    pub fn file(&self, relative: &str, contents: &str) -> Result<&Self> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
        Ok(self)
    }

    pub fn dir(&self, relative: &str) -> Result<&Self> {
        fs::create_dir_all(self.path(relative))?;
        Ok(self)
    }

    /// A package with a `dev` script.
    pub fn package_with_dev(&self, relative: &str) -> Result<&Self> {
        self.file(
            &format!("{relative}/package.json"),
            r#"{"name": "pkg", "scripts": {"dev": "vite"}}"#,
        )
    }

    /// A package without scripts.
    pub fn package_without_dev(&self, relative: &str) -> Result<&Self> {
        self.file(&format!("{relative}/package.json"), r#"{"name": "pkg"}"#)
    }

    pub fn venv(&self, relative: &str) -> Result<PathBuf> {
        let prefix = if relative.is_empty() {
            String::new()
        } else {
            format!("{relative}/")
        };
        self.file(&format!("{prefix}venv/bin/activate"), "")?;
        Ok(self.path(&format!("{prefix}venv/bin/activate")))
    }
}

/// Synthesis context with no global config, no VCS and `vim` as the editor.
pub fn isolated_context() -> SynthesisContext {
    SynthesisContext::new("vim")
}
