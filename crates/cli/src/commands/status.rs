use anyhow::Result;
use ato_runner_core::Session;
use std::path::Path;

use crate::display::print_status_bar;

pub fn status_command(root: &Path) -> Result<()> {
    let session = Session::open(root)?;

    println!("📍 Workspace: {}", root.display());
    match session.settings().interpreter() {
        Some(command) => println!("🐍 Interpreter: {command}"),
        None => println!("🐍 Interpreter: (not set)"),
    }
    println!();
    print_status_bar(session.targets().selected());
    Ok(())
}
