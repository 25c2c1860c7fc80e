//! Configuration management for ato-runner

mod session_state;
mod workspace_settings;

// Re-export main types
pub use session_state::{SessionState, STATE_FILE};
pub use workspace_settings::{WorkspaceSettings, INTERPRETER_KEY, SETTINGS_DIR, SETTINGS_FILE};
