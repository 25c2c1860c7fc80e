use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const SETTINGS_DIR: &str = ".vscode";
pub const SETTINGS_FILE: &str = "settings.json";

/// Key holding the interpreter activation command, as a one-element list
pub const INTERPRETER_KEY: &str = "atopile.interpreter";

/// Workspace-scoped settings, shared with the editor extension.
///
/// Only [`INTERPRETER_KEY`] is interpreted; every other key is kept as-is
/// and written back untouched.
#[derive(Debug, Clone)]
pub struct WorkspaceSettings {
    path: PathBuf,
    values: Map<String, Value>,
    /// False when the file exists but could not be parsed
    writable: bool,
}

impl WorkspaceSettings {
    pub fn path_in(workspace_root: &Path) -> PathBuf {
        workspace_root.join(SETTINGS_DIR).join(SETTINGS_FILE)
    }

    pub fn load(workspace_root: &Path) -> Result<Self> {
        let path = Self::path_in(workspace_root);

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No workspace settings at {}", path.display());
                return Ok(Self {
                    path,
                    values: Map::new(),
                    writable: true,
                });
            }
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(Self {
                path,
                values: Map::new(),
                writable: true,
            });
        }

        match serde_json::from_str::<Map<String, Value>>(&contents) {
            Ok(values) => Ok(Self {
                path,
                values,
                writable: true,
            }),
            Err(e) => {
                warn!(
                    "Could not parse {} ({}); settings will be read as unset and not saved",
                    path.display(),
                    e
                );
                Ok(Self {
                    path,
                    values: Map::new(),
                    writable: false,
                })
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored interpreter activation command, if one is set
    pub fn interpreter(&self) -> Option<&str> {
        let command = match self.values.get(INTERPRETER_KEY)? {
            Value::Array(items) => items.first()?.as_str()?,
            Value::String(command) => command.as_str(),
            _ => return None,
        };
        if command.is_empty() { None } else { Some(command) }
    }

    /// Trim and persist an interpreter activation command. Returns the value
    /// that was stored, or `None` when nothing was left after trimming.
    pub fn set_interpreter(&mut self, command: &str) -> Result<Option<String>> {
        let command = command.trim();
        if command.is_empty() {
            return Ok(None);
        }

        if !self.writable {
            return Err(Error::SettingsError(format!(
                "Refusing to overwrite unparseable settings file {}",
                self.path.display()
            )));
        }

        self.values.insert(
            INTERPRETER_KEY.to_string(),
            Value::Array(vec![Value::String(command.to_string())]),
        );
        self.save()?;
        Ok(Some(command.to_string()))
    }

    fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, contents)?;
        debug!("Saved workspace settings to {}", self.path.display());
        Ok(())
    }
}
