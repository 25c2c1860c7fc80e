//! ato command-line composition

pub mod ato_command;

pub use ato_command::{AtoCommand, ATO_PROGRAM};
