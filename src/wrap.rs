//! Re-running `repl` under `rlwrap` for line editing, history and completion.

use crate::conf::{SENTINEL_ENV, Settings};
use crate::invocation::is_reserved;
use crate::process::Handoff;
use crate::process::history::history_file_for;
use crate::process::which::which;
use std::env;
use std::path::{Path, PathBuf};

pub const WRAPPER: &str = "rlwrap";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapState {
    Unwrapped,
    AlreadyWrapped,
}

impl WrapState {
    /// The sentinel is only ever tested for presence.
    pub fn detect() -> Self {
        if env::var_os(SENTINEL_ENV).is_some() {
            WrapState::AlreadyWrapped
        } else {
            WrapState::Unwrapped
        }
    }
}

/// Name of the wrapped command used for history/completion files: the first
/// argument that is not a `repl` flag, provided it can be executed.
pub fn base_command(args: &[String]) -> Option<String> {
    let first = args
        .iter()
        .filter(|arg| !is_reserved(arg))
        .map(|arg| arg.trim())
        .next()?;
    which(first)?;
    Path::new(first)
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
}

/// Completion word list for `command`, if one exists.
pub fn completion_file_for(completion_dir: &Path, command: &str) -> Option<PathBuf> {
    let file = completion_dir.join(command);
    file.exists().then_some(file)
}

/// `rlwrap` options for a session around `command`.
pub fn rlwrap_options_for(command: Option<&str>, settings: &Settings) -> Vec<String> {
    // Only whitespace breaks words, so `git-log`-style names complete whole.
    let mut options = vec!["-b".to_string(), "''".to_string()];

    let Some(command) = command else {
        return options;
    };

    if let Some(history_file) = history_file_for(&settings.history_dir, command) {
        options.push("-H".to_string());
        options.push(history_file.to_string_lossy().into_owned());
    }

    if let Some(completion_file) = completion_file_for(&settings.completion_dir, command) {
        options.push("-f".to_string());
        options.push(completion_file.to_string_lossy().into_owned());
    }

    options
}

/// Decide whether to hand the session over to `rlwrap`.
///
/// Returns the hand-off to perform, or `None` to keep running in this process:
/// already wrapped, not attached to a terminal, or no wrapper installed.
pub fn plan(
    state: WrapState,
    interactive: bool,
    wrapper: Option<&Path>,
    program: &Path,
    args: &[String],
    settings: &Settings,
) -> Option<Handoff> {
    if state == WrapState::AlreadyWrapped || !interactive {
        return None;
    }
    let wrapper = wrapper?;

    let base = base_command(args);
    let options = rlwrap_options_for(base.as_deref(), settings);
    tracing::debug!(wrapper = %wrapper.display(), base = ?base, ?options, "wrapping session");

    Some(
        Handoff::new(wrapper)
            .args(options)
            .arg(program.to_string_lossy().into_owned())
            .args(args.iter().cloned())
            .env(SENTINEL_ENV, std::process::id().to_string()),
    )
}
