//! Prompting with answers supplied on the command line

use ato_runner_core::{Prompter, Result};
use tracing::warn;

/// Answers the first prompt with a value given up front, then defers to
/// `inner` for anything else the action needs to ask.
pub struct PresetPrompter<P> {
    preset: Option<String>,
    inner: P,
}

impl<P: Prompter> PresetPrompter<P> {
    pub fn new(preset: Option<String>, inner: P) -> Self {
        Self { preset, inner }
    }
}

impl<P: Prompter> Prompter for PresetPrompter<P> {
    fn input_box(&mut self, placeholder: &str) -> Result<Option<String>> {
        match self.preset.take() {
            Some(answer) => Ok(Some(answer)),
            None => self.inner.input_box(placeholder),
        }
    }

    fn quick_pick(&mut self, items: &[String], placeholder: &str) -> Result<Option<String>> {
        let Some(answer) = self.preset.take() else {
            return self.inner.quick_pick(items, placeholder);
        };
        if items.contains(&answer) {
            Ok(Some(answer))
        } else {
            warn!("'{}' is not a known build target", answer);
            Ok(None)
        }
    }
}
