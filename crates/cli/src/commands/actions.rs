use anyhow::{Context, Result};
use ato_runner_core::host::ConsolePrompter;
use ato_runner_core::{ActionOutcome, CommandId, Session, TerminalKind};
use std::path::Path;
use tracing::debug;

use crate::prompt::PresetPrompter;

/// Run one registered action against the workspace at `root`.
///
/// `preset` answers the action's first prompt, so scripts can skip the
/// interactive question.
pub fn run_action(
    root: &Path,
    command: CommandId,
    preset: Option<String>,
    dry_run: bool,
) -> Result<()> {
    debug!("Running {} in {}", command, root.display());

    let mut session = Session::open(root)
        .with_context(|| format!("Failed to open workspace {}", root.display()))?;
    let mut prompter = PresetPrompter::new(preset, ConsolePrompter::stdio());
    let mut terminals = if dry_run {
        TerminalKind::Echo
    } else {
        TerminalKind::Shell
    };

    let outcome = session
        .dispatch(command, &mut prompter, &mut terminals)
        .with_context(|| format!("Failed to run {command}"))?;

    match outcome {
        ActionOutcome::Sent { terminal, .. } => {
            debug!("Finished '{}'", terminal);
        }
        ActionOutcome::Updated(value) => match command {
            CommandId::ChooseBuildTarget => println!("🎯 Build target: {value}"),
            CommandId::SetInterpreter => println!("🐍 Interpreter: {value}"),
            _ => println!("✅ {value}"),
        },
        ActionOutcome::Cancelled => {
            eprintln!("ℹ️  Cancelled");
        }
    }

    Ok(())
}
