//! ato-runner - editor-style commands for the ato build tool
//!
//! This crate provides functionality to:
//! - Read build targets from a project's `ato.yaml`
//! - Keep track of the selected build target
//! - Compose `ato` command lines and type them into terminal sessions
pub mod command;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod host;
pub mod registry;
pub mod session;
pub mod targets;

// Re-export commonly used types and traits
pub use error::{Error, Result};

// Re-export main API components
pub use command::AtoCommand;
pub use config::{SessionState, WorkspaceSettings};
pub use descriptor::AtoYaml;
pub use host::{Prompter, Terminal, TerminalFactory, TerminalKind, TerminalSpec};
pub use registry::CommandId;
pub use session::{ActionOutcome, Session};
pub use targets::{BuildTargets, LoadOutcome};
