//! `package.json` script probing.

use std::path::Path;

use serde_json::Value;

use super::probes::PACKAGE_JSON;
use crate::{Error, Result};

/// Read and parse `package.json` in `dir`.
pub fn read_package_json(dir: &Path) -> Result<Value> {
    let path = dir.join(PACKAGE_JSON);
    let content = std::fs::read_to_string(&path)
        .map_err(|e| Error::io_error(format!("Failed to read {}: {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| Error::parse_error(format!("Failed to parse {}: {e}", path.display())))
}

/// Whether `package.json` in `dir` declares `scripts.dev`.
///
/// Missing or unparseable manifests count as no dev script.
pub fn has_dev_script(dir: &Path) -> bool {
    read_package_json(dir).is_ok_and(|manifest| {
        manifest
            .get("scripts")
            .and_then(Value::as_object)
            .is_some_and(|scripts| scripts.contains_key("dev"))
    })
}
