use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// What the host needs to open a terminal session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalSpec {
    pub name: String,
    pub cwd: PathBuf,
}

impl TerminalSpec {
    pub fn new(name: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            cwd: cwd.into(),
        }
    }
}

/// An interactive session that accepts lines of text.
///
/// Nothing is ever read back: writing a line is the whole protocol.
pub trait Terminal {
    /// Send one line to the session
    fn send_text(&mut self, line: &str) -> Result<()>;

    /// Make the session visible to the user
    fn show(self: Box<Self>) -> Result<()>;
}

/// Opens terminal sessions on behalf of the session actions
pub trait TerminalFactory {
    fn create_terminal(&mut self, spec: &TerminalSpec) -> Result<Box<dyn Terminal>>;
}

/// Built-in terminal backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalKind {
    /// Spawn the user's shell and type into it
    #[default]
    Shell,
    /// Print the lines instead of running them
    Echo,
}

impl TerminalFactory for TerminalKind {
    fn create_terminal(&mut self, spec: &TerminalSpec) -> Result<Box<dyn Terminal>> {
        match self {
            TerminalKind::Shell => Ok(Box::new(ShellTerminal::open(spec)?)),
            TerminalKind::Echo => Ok(Box::new(EchoTerminal::new(spec))),
        }
    }
}

/// The user's shell, rooted at the workspace.
///
/// Lines are queued until [`Terminal::show`], which runs them as one script.
/// The script inherits this process's stdin, so commands that ask questions
/// read from the user's keyboard rather than from the queued lines.
pub struct ShellTerminal {
    name: String,
    shell: String,
    cwd: PathBuf,
    lines: Vec<String>,
    stdin: Option<Stdio>,
}

impl ShellTerminal {
    pub fn open(spec: &TerminalSpec) -> Result<Self> {
        Self::open_with(&default_shell(), spec)
    }

    pub fn open_with(shell: &str, spec: &TerminalSpec) -> Result<Self> {
        if !spec.cwd.is_dir() {
            return Err(Error::TerminalError(format!(
                "Working directory {} does not exist",
                spec.cwd.display()
            )));
        }
        debug!("Opening terminal '{}' with {} in {}", spec.name, shell, spec.cwd.display());

        Ok(Self {
            name: spec.name.clone(),
            shell: shell.to_string(),
            cwd: spec.cwd.clone(),
            lines: Vec::new(),
            stdin: None,
        })
    }

    /// Feed the script from `stdin` instead of inheriting it
    pub fn with_stdin(mut self, stdin: Stdio) -> Self {
        self.stdin = Some(stdin);
        self
    }
}

impl Terminal for ShellTerminal {
    fn send_text(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn show(mut self: Box<Self>) -> Result<()> {
        let script = self.lines.join(line_separator(&self.shell));
        let stdin = self.stdin.take().unwrap_or_else(Stdio::inherit);

        let status = Command::new(&self.shell)
            .arg(script_flag(&self.shell))
            .arg(&script)
            .current_dir(&self.cwd)
            .stdin(stdin)
            .status()
            .map_err(|e| Error::TerminalError(format!("Failed to start {}: {e}", self.shell)))?;
        debug!("Terminal '{}' exited with {}", self.name, status);
        Ok(())
    }
}

/// Writes every line to stdout, prefixed with the terminal name
pub struct EchoTerminal {
    name: String,
    lines: Vec<String>,
}

impl EchoTerminal {
    pub fn new(spec: &TerminalSpec) -> Self {
        Self {
            name: spec.name.clone(),
            lines: Vec::new(),
        }
    }
}

impl Terminal for EchoTerminal {
    fn send_text(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn show(self: Box<Self>) -> Result<()> {
        for line in &self.lines {
            println!("[{}] {}", self.name, line);
        }
        Ok(())
    }
}

fn is_cmd(shell: &str) -> bool {
    Path::new(shell)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.eq_ignore_ascii_case("cmd"))
}

/// `cmd` takes its script after `/C`; POSIX shells after `-c`
fn script_flag(shell: &str) -> &'static str {
    if is_cmd(shell) { "/C" } else { "-c" }
}

/// `cmd /C` only runs one line, so chain the commands instead
fn line_separator(shell: &str) -> &'static str {
    if is_cmd(shell) { " & " } else { "\n" }
}

fn default_shell() -> String {
    if cfg!(windows) {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "sh".to_string())
    }
}
