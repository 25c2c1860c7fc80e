//! The `ato.yaml` project descriptor

use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the project descriptor at the workspace root
pub const DESCRIPTOR_FILE: &str = "ato.yaml";

/// Parsed `ato.yaml`. Only `builds` drives behaviour; the rest is carried
/// along so the descriptor can be inspected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AtoYaml {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ato_version: Option<String>,
    /// Build configurations keyed by build name, in document order
    #[serde(default)]
    pub builds: IndexMap<String, BuildConfig>,
    #[serde(default)]
    pub dependencies: Vec<serde_yaml::Value>,
}

/// One entry of the `builds` mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    pub entry: String,
}

impl AtoYaml {
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn path_in(workspace_root: &Path) -> PathBuf {
        workspace_root.join(DESCRIPTOR_FILE)
    }

    pub fn load(workspace_root: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(Self::path_in(workspace_root))?;
        Self::parse(&contents)
    }

    /// Composed `name-entry` labels, one per build, in document order
    pub fn labels(&self) -> Vec<String> {
        self.builds
            .iter()
            .map(|(name, build)| compose_label(name, &build.entry))
            .collect()
    }
}

/// Put the build name in the displayed label so it can be recovered later
/// without reading the descriptor again.
pub fn compose_label(name: &str, entry: &str) -> String {
    format!("{name}-{entry}")
}

/// Build name encoded in a label: everything before the first `-`.
pub fn build_name_of(label: &str) -> Option<&str> {
    let name = label.split('-').next().unwrap_or_default();
    if name.is_empty() { None } else { Some(name) }
}
