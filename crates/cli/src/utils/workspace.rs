use anyhow::{Context, Result};
use ato_runner_core::descriptor::DESCRIPTOR_FILE;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Pick the workspace root: an explicit directory wins, otherwise the
/// nearest ancestor of the current directory that holds an `ato.yaml`,
/// otherwise the current directory itself.
pub fn resolve_workspace_root(cwd: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = cwd {
        return dir
            .canonicalize()
            .with_context(|| format!("Failed to resolve workspace {}", dir.display()));
    }

    let current = env::current_dir().context("Failed to get current directory")?;
    let root = find_workspace_root(&current).unwrap_or(current);
    debug!("Using workspace root {}", root.display());
    Ok(root)
}

pub fn find_workspace_root(start_path: &Path) -> Option<PathBuf> {
    let mut current = start_path;

    loop {
        if current.join(DESCRIPTOR_FILE).is_file() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}
