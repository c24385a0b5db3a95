//! Test doubles for the command runner and the prompter.

use crate::commands::Session;
use crate::config::ConfigStore;
use crate::i18n::{Language, Translator};
use crate::ui::Prompter;
use crate::utils::command::CommandRunner;
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub command: String,
    pub cwd: Option<PathBuf>,
    pub interactive: bool,
}

type RunHook = Box<dyn Fn(&str, Option<&Path>, bool)>;

/// Records commands; any command containing a failure pattern returns false
#[derive(Default)]
pub struct FakeRunner {
    pub calls: RefCell<Vec<RecordedCommand>>,
    fail_patterns: Vec<String>,
    hook: Option<RunHook>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(patterns: &[&str]) -> Self {
        Self {
            fail_patterns: patterns.iter().map(|p| p.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Called for every command with its outcome, to fake side effects on disk
    pub fn with_hook(mut self, hook: impl Fn(&str, Option<&Path>, bool) + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.command.clone()).collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, command: &str, cwd: Option<&Path>, interactive: bool) -> bool {
        self.calls.borrow_mut().push(RecordedCommand {
            command: command.to_string(),
            cwd: cwd.map(Path::to_path_buf),
            interactive,
        });
        let ok = !self.fail_patterns.iter().any(|p| command.contains(p.as_str()));
        if let Some(hook) = &self.hook {
            hook(command, cwd, ok);
        }
        ok
    }
}

/// Answers prompts from a script
pub struct ScriptedPrompter {
    pub confirm_answer: bool,
    pub select_answer: Option<usize>,
    pub multiselect_answer: Option<Vec<usize>>,
    pub confirms: Cell<usize>,
    pub multiselect_calls: RefCell<Vec<(Vec<String>, Vec<bool>)>>,
}

impl ScriptedPrompter {
    pub fn accepting() -> Self {
        Self {
            confirm_answer: true,
            select_answer: Some(0),
            multiselect_answer: Some(vec![0]),
            confirms: Cell::new(0),
            multiselect_calls: RefCell::new(Vec::new()),
        }
    }

    pub fn declining() -> Self {
        Self {
            confirm_answer: false,
            ..Self::accepting()
        }
    }

    pub fn with_select(mut self, answer: Option<usize>) -> Self {
        self.select_answer = answer;
        self
    }

    pub fn with_multiselect(mut self, answer: Option<Vec<usize>>) -> Self {
        self.multiselect_answer = answer;
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, _message: &str, _options: &[String], _default: usize) -> Option<usize> {
        self.select_answer
    }

    fn multiselect(
        &self,
        _message: &str,
        options: &[String],
        preselected: &[bool],
    ) -> Option<Vec<usize>> {
        self.multiselect_calls
            .borrow_mut()
            .push((options.to_vec(), preselected.to_vec()));
        self.multiselect_answer.clone()
    }

    fn confirm(&self, _message: &str) -> bool {
        self.confirms.set(self.confirms.get() + 1);
        self.confirm_answer
    }
}

/// Config store backed by a throwaway directory
pub fn temp_config() -> (TempDir, ConfigStore) {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::load_from(dir.path().join("config.json")).unwrap();
    (dir, store)
}

/// English session over the given doubles
pub fn session<'a>(
    config: ConfigStore,
    runner: &'a FakeRunner,
    prompter: &'a ScriptedPrompter,
) -> Session<'a> {
    Session {
        config,
        translator: Translator::new(Language::En),
        runner,
        prompter,
        assume_yes: false,
    }
}

/// Write `content` to `root/rel`, creating parents
pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// Every path under `root` with its file contents (empty for directories)
pub fn snapshot(root: &Path) -> std::collections::BTreeMap<PathBuf, Vec<u8>> {
    let mut out = std::collections::BTreeMap::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in std::fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                out.insert(path.clone(), Vec::new());
                stack.push(path);
            } else {
                out.insert(path.clone(), std::fs::read(&path).unwrap());
            }
        }
    }
    out
}
