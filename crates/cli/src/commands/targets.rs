use anyhow::Result;
use ato_runner_core::{LoadOutcome, Session};
use std::path::Path;

use crate::display::print_targets;

pub fn targets_command(root: &Path) -> Result<()> {
    let mut session = Session::open(root)?;
    // reloading moves the selector to the first target, so remember it first
    let selected = session.targets().selected().map(str::to_string);

    match session.reload_targets() {
        LoadOutcome::Loaded(_) => {
            print_targets(session.targets().targets(), selected.as_deref());
        }
        LoadOutcome::Missing => {
            println!("ℹ️  No ato.yaml in {}", root.display());
        }
        LoadOutcome::Invalid(reason) => {
            println!("⚠️  Could not read ato.yaml: {reason}");
        }
    }
    Ok(())
}
