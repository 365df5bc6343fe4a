//! Configuration type definitions
//!
//! This module contains the configuration structures without behavior.
//! [`RawConfig`] mirrors one YAML file; [`EffectiveConfig`] is the layered
//! result for one directory.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// FILE CONFIGURATION
// ═══════════════════════════════════════════════════════════════════════════

/// One parsed config file (global or project). Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RawConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub main_pane_width: Option<String>,
    #[serde(
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub main_pane_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_command: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub packages: BTreeMap<String, PackageConfig>,
}

/// Per-package overrides, keyed by package directory base name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PackageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_command: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════════
// RESOLVED CONFIGURATION
// ═══════════════════════════════════════════════════════════════════════════

/// Settings in effect for one directory after layering.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub layout: Layout,
    pub main_pane_width: String,
    pub main_pane_height: String,
    pub dev_command: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════════
// LAYOUT
// ═══════════════════════════════════════════════════════════════════════════

/// tmux window layout name.
///
/// Unrecognised names are carried through verbatim so custom layout strings
/// still reach tmux.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Layout {
    MainVertical,
    MainHorizontal,
    EvenVertical,
    EvenHorizontal,
    Tiled,
    Other(String),
}

/// Which main-pane size options a layout uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneSizing {
    Width,
    Height,
    Both,
}

impl Layout {
    pub fn as_str(&self) -> &str {
        match self {
            Self::MainVertical => "main-vertical",
            Self::MainHorizontal => "main-horizontal",
            Self::EvenVertical => "even-vertical",
            Self::EvenHorizontal => "even-horizontal",
            Self::Tiled => "tiled",
            Self::Other(name) => name.as_str(),
        }
    }

    pub const fn sizing(&self) -> PaneSizing {
        match self {
            Self::MainVertical | Self::EvenVertical => PaneSizing::Width,
            Self::MainHorizontal | Self::EvenHorizontal => PaneSizing::Height,
            Self::Tiled | Self::Other(_) => PaneSizing::Both,
        }
    }
}

impl From<String> for Layout {
    fn from(name: String) -> Self {
        match name.as_str() {
            "main-vertical" => Self::MainVertical,
            "main-horizontal" => Self::MainHorizontal,
            "even-vertical" => Self::EvenVertical,
            "even-horizontal" => Self::EvenHorizontal,
            "tiled" => Self::Tiled,
            _ => Self::Other(name),
        }
    }
}

impl From<&str> for Layout {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<Layout> for String {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accept `60%`, `60` or `60.5` for size keys; YAML users rarely quote numbers.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
    }))
}
