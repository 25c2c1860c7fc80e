use crate::error::Result;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// User-facing prompts. `None` always means the user cancelled.
pub trait Prompter {
    /// Ask for a line of free text
    fn input_box(&mut self, placeholder: &str) -> Result<Option<String>>;

    /// Let the user pick one of `items`
    fn quick_pick(&mut self, items: &[String], placeholder: &str) -> Result<Option<String>>;
}

/// Prompts on a line-oriented console.
///
/// An empty answer or end of input cancels. Quick picks accept either the
/// 1-based index shown next to an item or the item's exact text.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompter<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stderr so stdout stays free for command output
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_answer(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim_end_matches(['\r', '\n']);
        if answer.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(answer.to_string()))
        }
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn input_box(&mut self, placeholder: &str) -> Result<Option<String>> {
        write!(self.output, "{placeholder}: ")?;
        self.output.flush()?;
        self.read_answer()
    }

    fn quick_pick(&mut self, items: &[String], placeholder: &str) -> Result<Option<String>> {
        writeln!(self.output, "{placeholder}")?;
        if items.is_empty() {
            writeln!(self.output, "  (nothing to choose from)")?;
            return Ok(None);
        }
        for (i, item) in items.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, item)?;
        }
        write!(self.output, "> ")?;
        self.output.flush()?;

        let Some(answer) = self.read_answer()? else {
            return Ok(None);
        };
        let answer = answer.trim();

        if let Some(item) = items.iter().find(|item| item.as_str() == answer) {
            return Ok(Some(item.clone()));
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=items.len()).contains(&n) => Ok(Some(items[n - 1].clone())),
            _ => {
                warn!("'{}' is not one of the offered choices", answer);
                Ok(None)
            }
        }
    }
}
