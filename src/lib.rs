//! Shared fixtures for the integration tests in `tests/`

use ato_runner_core::{Prompter, Result, Terminal, TerminalFactory, TerminalSpec};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;
use std::rc::Rc;
use tempfile::TempDir;

/// Answers prompts from a fixed script and records what was asked
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Option<String>>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer; `None` cancels the prompt
    pub fn answer(mut self, answer: Option<&str>) -> Self {
        self.answers.push_back(answer.map(String::from));
        self
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, placeholder: &str) -> Option<String> {
        self.asked.push(placeholder.to_string());
        self.answers
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected prompt: {placeholder}"))
    }
}

impl Prompter for ScriptedPrompter {
    fn input_box(&mut self, placeholder: &str) -> Result<Option<String>> {
        Ok(self.next(placeholder))
    }

    fn quick_pick(&mut self, items: &[String], placeholder: &str) -> Result<Option<String>> {
        let answer = self.next(placeholder);
        Ok(answer.filter(|a| items.contains(a)))
    }
}

/// A terminal session captured by [`RecordingTerminals`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedTerminal {
    pub spec: TerminalSpec,
    pub lines: Vec<String>,
    pub shown: bool,
}

/// Opens in-memory terminals and keeps every one for inspection
#[derive(Debug, Default, Clone)]
pub struct RecordingTerminals {
    opened: Rc<RefCell<Vec<RecordedTerminal>>>,
}

impl RecordingTerminals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<RecordedTerminal> {
        self.opened.borrow().clone()
    }
}

struct Recorder {
    opened: Rc<RefCell<Vec<RecordedTerminal>>>,
    index: usize,
}

impl Terminal for Recorder {
    fn send_text(&mut self, line: &str) -> Result<()> {
        self.opened.borrow_mut()[self.index].lines.push(line.to_string());
        Ok(())
    }

    fn show(self: Box<Self>) -> Result<()> {
        self.opened.borrow_mut()[self.index].shown = true;
        Ok(())
    }
}

impl TerminalFactory for RecordingTerminals {
    fn create_terminal(&mut self, spec: &TerminalSpec) -> Result<Box<dyn Terminal>> {
        let mut opened = self.opened.borrow_mut();
        opened.push(RecordedTerminal {
            spec: spec.clone(),
            lines: Vec::new(),
            shown: false,
        });
        Ok(Box::new(Recorder {
            opened: Rc::clone(&self.opened),
            index: opened.len() - 1,
        }))
    }
}

/// A temporary workspace, optionally with an `ato.yaml`
pub fn workspace(descriptor: Option<&str>) -> TempDir {
    let dir = TempDir::new().expect("create temp workspace");
    if let Some(contents) = descriptor {
        write_descriptor(dir.path(), contents);
    }
    dir
}

pub fn write_descriptor(root: &Path, contents: &str) {
    std::fs::write(root.join("ato.yaml"), contents).expect("write ato.yaml");
}

/// Store an interpreter activation command the way the editor would
pub fn write_interpreter(root: &Path, command: &str) {
    let dir = root.join(".vscode");
    std::fs::create_dir_all(&dir).expect("create .vscode");
    let settings = serde_json::json!({ "atopile.interpreter": [command] });
    std::fs::write(dir.join("settings.json"), settings.to_string()).expect("write settings");
}
