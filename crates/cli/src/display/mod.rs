pub mod formatter;

pub use formatter::{print_status_bar, print_targets};
