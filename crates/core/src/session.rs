//! The action dispatcher
//!
//! A [`Session`] owns everything one workspace needs: its root, its
//! settings and the build-target selector. Hosts call one method per
//! triggered command, handing in how to prompt and how to open terminals.

use crate::command::AtoCommand;
use crate::config::{SessionState, WorkspaceSettings};
use crate::error::Result;
use crate::host::{Prompter, TerminalFactory, TerminalSpec};
use crate::registry::CommandId;
use crate::targets::{BuildTargets, LoadOutcome};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const INTERPRETER_PLACEHOLDER: &str = "Terminal command to activate the Python virtual environment";
pub const COMPONENT_PLACEHOLDER: &str = "JLCPCB Component ID";
pub const PACKAGE_PLACEHOLDER: &str = "Package name";

pub const CREATE_TERMINAL: &str = "ato Create";
pub const BUILD_TERMINAL: &str = "ato Build";
pub const INSTALL_TERMINAL: &str = "ato Install";

/// Result of one triggered action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Lines were typed into a new terminal
    Sent { terminal: String, lines: Vec<String> },
    /// A setting or the selector was updated
    Updated(String),
    /// The user cancelled a prompt
    Cancelled,
}

#[derive(Debug)]
pub struct Session {
    workspace_root: PathBuf,
    settings: WorkspaceSettings,
    targets: BuildTargets,
}

impl Session {
    /// Open a workspace. Targets are always reloaded and the first one is
    /// selected; a label saved by an earlier invocation replaces it only
    /// while `ato.yaml` still offers that label. A stale label is dropped.
    pub fn open(workspace_root: impl Into<PathBuf>) -> Result<Self> {
        let workspace_root = workspace_root.into();
        let settings = WorkspaceSettings::load(&workspace_root)?;
        let state = SessionState::load_or_default(&workspace_root);

        let mut targets = BuildTargets::new();
        targets.load(&workspace_root);
        if let Some(saved) = state.build_target.as_deref() {
            if !targets.restore(saved) {
                debug!("Dropping saved build target {} that ato.yaml no longer offers", saved);
                let path = SessionState::path_in(&workspace_root);
                if let Err(e) = SessionState::default().save_to_file(&path) {
                    warn!("Could not clear {}: {}", path.display(), e);
                }
            }
        }
        debug!(
            "Opened session in {} (build target: {:?})",
            workspace_root.display(),
            targets.selected()
        );

        Ok(Self {
            workspace_root,
            settings,
            targets,
        })
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn settings(&self) -> &WorkspaceSettings {
        &self.settings
    }

    pub fn targets(&self) -> &BuildTargets {
        &self.targets
    }

    /// Re-read the descriptor without prompting
    pub fn reload_targets(&mut self) -> LoadOutcome {
        self.targets.load(&self.workspace_root)
    }

    /// Run the action registered under `command`
    pub fn dispatch(
        &mut self,
        command: CommandId,
        prompter: &mut dyn Prompter,
        terminals: &mut dyn TerminalFactory,
    ) -> Result<ActionOutcome> {
        debug!("Dispatching {}", command);
        match command {
            CommandId::Create => self.create(prompter, terminals),
            CommandId::Build => self.build(prompter, terminals),
            CommandId::InstallComponent => self.install_component(prompter, terminals),
            CommandId::InstallPackage => self.install_package(prompter, terminals),
            CommandId::SetInterpreter => self.set_interpreter(prompter),
            CommandId::ChooseBuildTarget => self.choose_build_target(prompter),
        }
    }

    pub fn create(
        &mut self,
        prompter: &mut dyn Prompter,
        terminals: &mut dyn TerminalFactory,
    ) -> Result<ActionOutcome> {
        self.run_in_terminal(CREATE_TERMINAL, AtoCommand::create(), prompter, terminals)
    }

    /// Build the target named by the selector, or everything if none is set
    pub fn build(
        &mut self,
        prompter: &mut dyn Prompter,
        terminals: &mut dyn TerminalFactory,
    ) -> Result<ActionOutcome> {
        let command = AtoCommand::build(self.targets.build_name());
        self.run_in_terminal(BUILD_TERMINAL, command, prompter, terminals)
    }

    pub fn install_component(
        &mut self,
        prompter: &mut dyn Prompter,
        terminals: &mut dyn TerminalFactory,
    ) -> Result<ActionOutcome> {
        let Some(component) = ask(prompter, COMPONENT_PLACEHOLDER)? else {
            return Ok(ActionOutcome::Cancelled);
        };
        let command = AtoCommand::install_jlcpcb(&component);
        self.run_in_terminal(INSTALL_TERMINAL, command, prompter, terminals)
    }

    pub fn install_package(
        &mut self,
        prompter: &mut dyn Prompter,
        terminals: &mut dyn TerminalFactory,
    ) -> Result<ActionOutcome> {
        let Some(package) = ask(prompter, PACKAGE_PLACEHOLDER)? else {
            return Ok(ActionOutcome::Cancelled);
        };
        let command = AtoCommand::install_package(&package);
        self.run_in_terminal(INSTALL_TERMINAL, command, prompter, terminals)
    }

    /// Ask for the interpreter activation command and save it
    pub fn set_interpreter(&mut self, prompter: &mut dyn Prompter) -> Result<ActionOutcome> {
        match self.prompt_interpreter(prompter)? {
            Some(command) => Ok(ActionOutcome::Updated(command)),
            None => Ok(ActionOutcome::Cancelled),
        }
    }

    /// Reload the targets and let the user pick one. The pick is remembered
    /// for later invocations in the same workspace.
    pub fn choose_build_target(&mut self, prompter: &mut dyn Prompter) -> Result<ActionOutcome> {
        match self.targets.choose(&self.workspace_root, prompter)? {
            Some(label) => {
                let state = SessionState {
                    build_target: Some(label.clone()),
                };
                state.save_to_file(&SessionState::path_in(&self.workspace_root))?;
                info!("Build target set to {}", label);
                Ok(ActionOutcome::Updated(label))
            }
            None => Ok(ActionOutcome::Cancelled),
        }
    }

    fn prompt_interpreter(&mut self, prompter: &mut dyn Prompter) -> Result<Option<String>> {
        match prompter.input_box(INTERPRETER_PLACEHOLDER)? {
            Some(answer) => self.settings.set_interpreter(&answer),
            None => Ok(None),
        }
    }

    /// The stored activation command, prompting for it on first use
    fn resolve_interpreter(&mut self, prompter: &mut dyn Prompter) -> Result<Option<String>> {
        if let Some(command) = self.settings.interpreter() {
            return Ok(Some(command.to_string()));
        }
        debug!("No interpreter activation command set, asking");
        self.prompt_interpreter(prompter)
    }

    fn run_in_terminal(
        &mut self,
        name: &str,
        command: AtoCommand,
        prompter: &mut dyn Prompter,
        terminals: &mut dyn TerminalFactory,
    ) -> Result<ActionOutcome> {
        let Some(activate) = self.resolve_interpreter(prompter)? else {
            return Ok(ActionOutcome::Cancelled);
        };
        let lines = vec![activate, command.to_shell_command()];

        let spec = TerminalSpec::new(name, &self.workspace_root);
        let mut terminal = terminals.create_terminal(&spec)?;
        for line in &lines {
            terminal.send_text(line)?;
        }
        terminal.show()?;
        info!("Sent to '{}': {}", name, lines[1]);

        Ok(ActionOutcome::Sent {
            terminal: name.to_string(),
            lines,
        })
    }
}

/// Prompt for a value; a blank answer counts as cancelling
fn ask(prompter: &mut dyn Prompter, placeholder: &str) -> Result<Option<String>> {
    Ok(prompter
        .input_box(placeholder)?
        .map(|answer| answer.trim().to_string())
        .filter(|answer| !answer.is_empty()))
}
