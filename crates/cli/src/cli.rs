use anyhow::Result;
use ato_runner_core::CommandId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{run_action, status_command, targets_command};
use crate::utils::resolve_workspace_root;

#[derive(Parser, Debug)]
#[command(name = "ato-runner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug                Enable debug logging\n    ATO_RUNNER_WORKSPACE=<dir>    Workspace root when --cwd is not given")]
pub struct Cli {
    /// Workspace root (defaults to the nearest directory holding an ato.yaml)
    #[arg(short = 'C', long, global = true, env = "ATO_RUNNER_WORKSPACE")]
    pub cwd: Option<PathBuf>,

    /// Print the terminal lines instead of running them
    #[arg(short, long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a project or build (ato create)
    #[command(visible_alias = "c")]
    Create,
    /// Build the selected target (ato build)
    #[command(visible_alias = "b")]
    Build,
    /// Install a JLCPCB component (ato install --jlcpcb)
    #[command(visible_alias = "i")]
    Install {
        /// JLCPCB component ID; asked for when omitted
        component: Option<String>,
    },
    /// Install a package (ato install)
    InstallPackage {
        /// Package name; asked for when omitted
        package: Option<String>,
    },
    /// Set the command that activates the Python environment
    SetInterpreter {
        /// Activation command; asked for when omitted
        command: Option<String>,
    },
    /// Choose the build target used by `build`
    ChooseTarget {
        /// Target label (name-entry); a picker is shown when omitted
        target: Option<String>,
    },
    /// List the build targets in ato.yaml
    #[command(visible_alias = "ls")]
    Targets,
    /// Show the available commands and the current build target
    Status,
}

impl Cli {
    /// Execute the parsed command line
    pub fn execute(self) -> Result<()> {
        let root = resolve_workspace_root(self.cwd.as_deref())?;

        match self.command {
            Commands::Create => run_action(&root, CommandId::Create, None, self.dry_run),
            Commands::Build => run_action(&root, CommandId::Build, None, self.dry_run),
            Commands::Install { component } => {
                run_action(&root, CommandId::InstallComponent, component, self.dry_run)
            }
            Commands::InstallPackage { package } => {
                run_action(&root, CommandId::InstallPackage, package, self.dry_run)
            }
            Commands::SetInterpreter { command } => {
                run_action(&root, CommandId::SetInterpreter, command, self.dry_run)
            }
            Commands::ChooseTarget { target } => {
                run_action(&root, CommandId::ChooseBuildTarget, target, self.dry_run)
            }
            Commands::Targets => targets_command(&root),
            Commands::Status => status_command(&root),
        }
    }
}
