use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// File, at the workspace root, that carries state between invocations
pub const STATE_FILE: &str = ".ato-runner.json";

/// Selector state shared by one-shot invocations in the same workspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SessionState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_target: Option<String>,
}

impl SessionState {
    pub fn path_in(workspace_root: &Path) -> PathBuf {
        workspace_root.join(STATE_FILE)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load the state for a workspace. The file is only a convenience, so
    /// anything unreadable starts a fresh state.
    pub fn load_or_default(workspace_root: &Path) -> Self {
        let path = Self::path_in(workspace_root);
        match Self::load_from_file(&path) {
            Ok(state) => state,
            Err(crate::Error::IoError(e)) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
