#![allow(dead_code)]

use once_cell::sync::Lazy;
use repl::control::LineEditor;
use repl::process::{CommandRunner, ExecError, RunOutcome};
use rustyline::error::ReadlineError;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::env;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

pub fn lock_env<'a>() -> MutexGuard<'a, ()> {
    match ENV_LOCK.lock() {
        Ok(guard) => guard,
        Err(poison) => poison.into_inner(),
    }
}

/// Scratch directory plus environment changes that are undone on drop.
pub struct TestEnv {
    temp_dir: TempDir,
    saved_env: HashMap<String, Option<String>>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().unwrap(),
            saved_env: HashMap::new(),
        }
    }

    pub fn root(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    fn save_var(&mut self, key: &str) {
        if !self.saved_env.contains_key(key) {
            self.saved_env.insert(key.to_string(), env::var(key).ok());
        }
    }

    pub fn set_var(&mut self, key: &str, value: impl AsRef<str>) {
        self.save_var(key);
        unsafe {
            env::set_var(key, value.as_ref());
        }
    }

    pub fn remove_var(&mut self, key: &str) {
        self.save_var(key);
        unsafe {
            env::remove_var(key);
        }
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        for (key, value) in &self.saved_env {
            if let Some(val) = value {
                unsafe {
                    env::set_var(key, val);
                }
            } else {
                unsafe {
                    env::remove_var(key);
                }
            }
        }
    }
}

/// Feeds canned lines to the loop and remembers history entries.
pub struct ScriptedEditor {
    responses: VecDeque<Result<String, ReadlineError>>,
    pub prompts: Vec<String>,
    pub history: Vec<String>,
}

impl ScriptedEditor {
    pub fn new(responses: Vec<Result<String, ReadlineError>>) -> Self {
        Self {
            responses: responses.into(),
            prompts: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn lines(lines: &[&str]) -> Self {
        Self::new(lines.iter().map(|line| Ok(line.to_string())).collect())
    }
}

impl LineEditor for ScriptedEditor {
    fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        self.prompts.push(prompt.to_string());
        self.responses
            .pop_front()
            .unwrap_or_else(|| Err(ReadlineError::Eof))
    }

    fn add_history_entry(&mut self, entry: &str) -> rustyline::Result<bool> {
        self.history.push(entry.to_string());
        Ok(true)
    }
}

/// Records every command instead of running it.
pub struct RecordingRunner {
    commands: Rc<RefCell<Vec<String>>>,
    results: VecDeque<Result<RunOutcome, ExecError>>,
}

impl RecordingRunner {
    pub fn new() -> (Self, Rc<RefCell<Vec<String>>>) {
        Self::with_results(Vec::new())
    }

    pub fn with_results(
        results: Vec<Result<RunOutcome, ExecError>>,
    ) -> (Self, Rc<RefCell<Vec<String>>>) {
        let commands = Rc::new(RefCell::new(Vec::new()));
        let runner = Self {
            commands: commands.clone(),
            results: results.into(),
        };
        (runner, commands)
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, command: &str) -> Result<RunOutcome, ExecError> {
        self.commands.borrow_mut().push(command.to_string());
        self.results
            .pop_front()
            .unwrap_or(Ok(RunOutcome::Completed))
    }
}

pub fn failed(command: &str, code: i32) -> Result<RunOutcome, ExecError> {
    Err(ExecError::Failed {
        command: command.to_string(),
        code,
    })
}

pub fn buffer_to_string(buffer: &Rc<RefCell<Vec<u8>>>) -> String {
    String::from_utf8(buffer.borrow().clone()).unwrap()
}

/// Drop ANSI colour sequences so assertions can look at the plain text.
pub fn strip_ansi(text: &str) -> String {
    let mut plain = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain
}
