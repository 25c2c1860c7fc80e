//! Host interfaces
//!
//! The session never talks to a terminal emulator or a user directly; it
//! goes through these traits so the same actions can be driven by the CLI,
//! an editor bridge, or a test double.

pub mod prompt;
pub mod terminal;

pub use prompt::{ConsolePrompter, Prompter};
pub use terminal::{EchoTerminal, ShellTerminal, Terminal, TerminalFactory, TerminalKind, TerminalSpec};
