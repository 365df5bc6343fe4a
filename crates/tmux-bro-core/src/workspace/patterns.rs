//! Member pattern resolution shared by the pnpm and npm probes.
//!
//! A pattern is either a literal relative path or a glob. Patterns starting
//! with `!` exclude already matched members. Output order follows pattern order,
//! with glob matches sorted within each pattern.

use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::debug;

const WILDCARDS: [char; 3] = ['*', '?', '['];

/// Whether a pattern needs filesystem glob expansion.
pub fn has_wildcard(pattern: &str) -> bool {
    pattern.contains(WILDCARDS)
}

/// Resolve workspace member patterns relative to `root` into existing directories.
///
/// Literal patterns are kept only when they name a directory. Glob patterns are
/// expanded and filtered to directories. Duplicates keep their first position.
pub fn resolve_patterns<S: AsRef<str>>(root: &Path, patterns: &[S]) -> Vec<PathBuf> {
    let (excludes, includes): (Vec<&str>, Vec<&str>) = patterns
        .iter()
        .map(AsRef::as_ref)
        .map(str::trim)
        .filter(|pattern| !pattern.is_empty())
        .partition(|pattern| pattern.starts_with('!'));

    let mut members: Vec<PathBuf> = Vec::new();
    for pattern in includes {
        for dir in expand_pattern(root, pattern) {
            if !members.contains(&dir) {
                members.push(dir);
            }
        }
    }

    let exclusions: Vec<Pattern> = excludes
        .iter()
        .filter_map(|raw| {
            let body = raw.trim_start_matches('!').trim_start_matches("./");
            Pattern::new(body)
                .map_err(|e| debug!(pattern = raw, error = %e, "ignoring invalid exclusion"))
                .ok()
        })
        .collect();

    if exclusions.is_empty() {
        return members;
    }

    members
        .into_iter()
        .filter(|dir| {
            dir.strip_prefix(root)
                .map(|relative| !exclusions.iter().any(|p| p.matches_path(relative)))
                .unwrap_or(true)
        })
        .collect()
}

fn expand_pattern(root: &Path, pattern: &str) -> Vec<PathBuf> {
    let relative = pattern.trim_start_matches("./");

    if !has_wildcard(relative) {
        let dir = normalize(&root.join(relative));
        return if dir.is_dir() { vec![dir] } else { Vec::new() };
    }

    let escaped_root = Pattern::escape(&root.to_string_lossy());
    let full = Path::new(&escaped_root).join(relative);
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    match glob::glob_with(&full.to_string_lossy(), options) {
        Ok(paths) => paths
            .filter_map(std::result::Result::ok)
            .filter(|path| path.is_dir())
            .map(|path| normalize(&path))
            .collect(),
        Err(e) => {
            debug!(pattern, error = %e, "ignoring invalid workspace pattern");
            Vec::new()
        }
    }
}

/// Drop `.` components and trailing separators so literal and globbed members
/// render the same way.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}
