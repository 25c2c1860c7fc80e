//! Command identifiers and their status-bar presentation

use std::fmt;
use std::str::FromStr;

/// Every action a host can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    Create,
    Build,
    InstallComponent,
    InstallPackage,
    SetInterpreter,
    ChooseBuildTarget,
}

/// How a command is presented in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBarItem {
    pub command: CommandId,
    pub icon: &'static str,
    pub tooltip: &'static str,
}

impl CommandId {
    pub const ALL: [CommandId; 6] = [
        CommandId::Create,
        CommandId::Build,
        CommandId::InstallComponent,
        CommandId::InstallPackage,
        CommandId::SetInterpreter,
        CommandId::ChooseBuildTarget,
    ];

    /// Identifier registered with the host
    pub fn id(self) -> &'static str {
        match self {
            CommandId::Create => "atopile.create",
            CommandId::Build => "atopile.build",
            CommandId::InstallComponent => "atopile.install",
            CommandId::InstallPackage => "atopile.install_package",
            CommandId::SetInterpreter => "atopile.venv",
            CommandId::ChooseBuildTarget => "atopile.choose_build",
        }
    }

    /// Status-bar button for this command. The interpreter command has none;
    /// the build-target button shows the selector label instead of an icon.
    pub fn status_bar_item(self) -> Option<StatusBarItem> {
        let (icon, tooltip) = match self {
            CommandId::Create => ("$(plus)", "ato: create project/build"),
            CommandId::InstallComponent => ("$(cloud-download)", "ato: install JLCPCB component"),
            CommandId::InstallPackage => ("$(package)", "ato: install package"),
            CommandId::Build => ("$(play)", "ato: build"),
            CommandId::ChooseBuildTarget => ("", "ato: build target"),
            CommandId::SetInterpreter => return None,
        };
        Some(StatusBarItem {
            command: self,
            icon,
            tooltip,
        })
    }
}

/// Status-bar buttons in display order
pub fn status_bar() -> Vec<StatusBarItem> {
    [
        CommandId::Create,
        CommandId::InstallComponent,
        CommandId::InstallPackage,
        CommandId::Build,
        CommandId::ChooseBuildTarget,
    ]
    .into_iter()
    .filter_map(CommandId::status_bar_item)
    .collect()
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CommandId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandId::ALL
            .into_iter()
            .find(|command| command.id() == s)
            .ok_or_else(|| format!("Unknown command: {s}"))
    }
}
