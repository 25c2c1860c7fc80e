//! Build-target discovery and selection

use crate::descriptor::{self, AtoYaml};
use crate::error::{Error, Result};
use crate::host::Prompter;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

pub const CHOOSE_TARGET_PLACEHOLDER: &str = "Choose build target";

/// What happened on the last [`BuildTargets::load`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The descriptor was read; this many targets were found
    Loaded(usize),
    /// There is no descriptor yet
    Missing,
    /// The descriptor could not be read or parsed
    Invalid(String),
}

/// The loaded build targets and the label currently shown in the selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildTargets {
    targets: Vec<String>,
    selected: Option<String>,
}

impl BuildTargets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a selector label restored from a previous session
    pub fn with_selected(selected: Option<String>) -> Self {
        Self {
            targets: Vec::new(),
            selected,
        }
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Build name encoded in the selector label
    pub fn build_name(&self) -> Option<&str> {
        self.selected.as_deref().and_then(descriptor::build_name_of)
    }

    /// Select a label saved by an earlier session, but only if the last
    /// load still offers it. Returns whether it was selected.
    pub fn restore(&mut self, label: &str) -> bool {
        if self.targets.iter().any(|target| target == label) {
            self.selected = Some(label.to_string());
            true
        } else {
            false
        }
    }

    /// Rebuild the target list from `<workspace_root>/ato.yaml`.
    ///
    /// Best effort: the descriptor may not exist yet, so failures leave the
    /// list empty and the selector untouched instead of returning an error.
    pub fn load(&mut self, workspace_root: &Path) -> LoadOutcome {
        self.targets.clear();

        let yaml = match AtoYaml::load(workspace_root) {
            Ok(yaml) => yaml,
            Err(Error::IoError(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No {} in {}", descriptor::DESCRIPTOR_FILE, workspace_root.display());
                return LoadOutcome::Missing;
            }
            Err(e) => {
                warn!("Ignoring {}: {}", descriptor::DESCRIPTOR_FILE, e);
                return LoadOutcome::Invalid(e.to_string());
            }
        };

        self.targets = yaml.labels();
        if let Some(first) = self.targets.first() {
            self.selected = Some(first.clone());
        }
        debug!("Loaded {} build targets", self.targets.len());
        LoadOutcome::Loaded(self.targets.len())
    }

    /// Reload, then let the user pick a target. Returns the new selection,
    /// or `None` if the user cancelled; a cancelled pick keeps the label
    /// that was shown before the reload.
    pub fn choose(&mut self, workspace_root: &Path, prompter: &mut dyn Prompter) -> Result<Option<String>> {
        let previous = self.selected.clone();
        self.load(workspace_root);

        let picked = prompter.quick_pick(&self.targets, CHOOSE_TARGET_PLACEHOLDER)?;
        self.selected = match &picked {
            Some(label) => Some(label.clone()),
            None => previous,
        };
        Ok(picked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    struct Pick(Option<&'static str>);

    impl Prompter for Pick {
        fn input_box(&mut self, _placeholder: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn quick_pick(&mut self, items: &[String], placeholder: &str) -> Result<Option<String>> {
            assert_eq!(placeholder, CHOOSE_TARGET_PLACEHOLDER);
            Ok(self.0.filter(|p| items.iter().any(|i| i == p)).map(String::from))
        }
    }

    fn workspace(descriptor: Option<&str>) -> TempDir {
        let dir = TempDir::new().unwrap();
        if let Some(contents) = descriptor {
            fs::write(dir.path().join("ato.yaml"), contents).unwrap();
        }
        dir
    }

    const TWO_BUILDS: &str = "builds:\n  a:\n    entry: x\n  b:\n    entry: y\n";

    #[test]
    fn test_load_in_document_order() {
        let dir = workspace(Some(TWO_BUILDS));
        let mut targets = BuildTargets::new();

        assert_eq!(targets.load(dir.path()), LoadOutcome::Loaded(2));
        assert_eq!(targets.targets(), ["a-x", "b-y"]);
        assert_eq!(targets.selected(), Some("a-x"));
        assert_eq!(targets.build_name(), Some("a"));
    }

    #[test]
    fn test_load_missing_keeps_selector() {
        let dir = workspace(None);
        let mut targets = BuildTargets::with_selected(Some("old-label".to_string()));

        assert_eq!(targets.load(dir.path()), LoadOutcome::Missing);
        assert!(targets.targets().is_empty());
        assert_eq!(targets.selected(), Some("old-label"));
    }

    #[test]
    fn test_load_malformed_clears_list() {
        let dir = workspace(Some(TWO_BUILDS));
        let mut targets = BuildTargets::new();
        targets.load(dir.path());

        fs::write(dir.path().join("ato.yaml"), "builds: [unterminated").unwrap();
        assert!(matches!(targets.load(dir.path()), LoadOutcome::Invalid(_)));
        assert!(targets.targets().is_empty());
        assert_eq!(targets.selected(), Some("a-x"));
    }

    #[test]
    fn test_load_with_no_builds_keeps_selector() {
        let dir = workspace(Some("builds: {}\n"));
        let mut targets = BuildTargets::with_selected(Some("a-x".to_string()));

        assert_eq!(targets.load(dir.path()), LoadOutcome::Loaded(0));
        assert_eq!(targets.selected(), Some("a-x"));
    }

    #[test]
    fn test_choose_sets_selector() {
        let dir = workspace(Some(TWO_BUILDS));
        let mut targets = BuildTargets::new();

        let picked = targets.choose(dir.path(), &mut Pick(Some("b-y"))).unwrap();
        assert_eq!(picked.as_deref(), Some("b-y"));
        assert_eq!(targets.selected(), Some("b-y"));
        assert_eq!(targets.build_name(), Some("b"));
    }

    #[test]
    fn test_choose_cancel_keeps_previous_selector() {
        let dir = workspace(Some(TWO_BUILDS));
        let mut targets = BuildTargets::new();
        targets.choose(dir.path(), &mut Pick(Some("b-y"))).unwrap();

        assert_eq!(targets.choose(dir.path(), &mut Pick(None)).unwrap(), None);
        assert_eq!(targets.selected(), Some("b-y"));
        assert_eq!(targets.targets(), ["a-x", "b-y"]);
    }

    #[test]
    fn test_choose_sees_new_builds() {
        let dir = workspace(Some(TWO_BUILDS));
        let mut targets = BuildTargets::new();
        targets.load(dir.path());

        fs::write(
            dir.path().join("ato.yaml"),
            "builds:\n  a:\n    entry: x\n  b:\n    entry: y\n  c:\n    entry: z\n",
        )
        .unwrap();
        targets.choose(dir.path(), &mut Pick(Some("c-z"))).unwrap();
        assert_eq!(targets.targets().len(), 3);
        assert_eq!(targets.selected(), Some("c-z"));
    }

    #[test]
    fn test_choose_without_descriptor() {
        let dir = workspace(None);
        let mut targets = BuildTargets::with_selected(Some("a-x".to_string()));

        assert_eq!(targets.choose(dir.path(), &mut Pick(Some("a-x"))).unwrap(), None);
        assert_eq!(targets.selected(), Some("a-x"));
    }

    #[test]
    fn test_restore_only_known_labels() {
        let dir = workspace(Some(TWO_BUILDS));
        let mut targets = BuildTargets::new();
        targets.load(dir.path());

        assert!(targets.restore("b-y"));
        assert_eq!(targets.selected(), Some("b-y"));
        assert!(!targets.restore("c-z"));
        assert_eq!(targets.selected(), Some("b-y"));
    }

    #[test]
    fn test_no_selection_has_no_build_name() {
        assert_eq!(BuildTargets::new().build_name(), None);
        assert_eq!(BuildTargets::with_selected(Some(String::new())).build_name(), None);
    }
}
