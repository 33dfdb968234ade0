use super::paths::{resolve_completion_dir, resolve_history_dir};
use std::env;
use std::path::PathBuf;

pub const DEBUG_ENV: &str = "REPL_DEBUG";
pub const QUIET_ENV: &str = "REPL_QUIET";
pub const PROMPT_ENV: &str = "REPL_PROMPT";
pub const DEFAULT_PROMPT: &str = ">>";

/// Set on the wrapped child so it does not try to wrap itself again.
pub const SENTINEL_ENV: &str = "__RLWRAP_REPL__";

/// Settings assembled once at startup, after the config file has been merged
/// into the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub history_dir: PathBuf,
    pub completion_dir: PathBuf,
    pub prompt: String,
    pub debug: bool,
    pub quiet: bool,
    pub wrapped: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            history_dir: resolve_history_dir(),
            completion_dir: resolve_completion_dir(),
            prompt: env::var(PROMPT_ENV).unwrap_or_else(|_| DEFAULT_PROMPT.to_string()),
            debug: env_flag(DEBUG_ENV),
            quiet: env_flag(QUIET_ENV),
            wrapped: env::var_os(SENTINEL_ENV).is_some(),
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| is_true(&value)).unwrap_or(false)
}

/// Only the literal `true` (surrounding whitespace ignored) switches a flag on.
pub fn is_true(value: &str) -> bool {
    value.trim() == "true"
}
