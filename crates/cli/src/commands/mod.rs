pub mod actions;
pub mod status;
pub mod targets;

pub use actions::run_action;
pub use status::status_command;
pub use targets::targets_command;
