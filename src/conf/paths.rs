use normalize_path::NormalizePath;
use std::env;
use std::path::PathBuf;

pub const CONFIG_PATH_ENV: &str = "REPL_CONF";
pub const HISTORY_DIR_ENV: &str = "REPL_HISTORY_DIR";
pub const COMPLETION_DIR_ENV: &str = "REPL_COMPLETION_DIR";

/// Location of the key/value config file, `~/.repl.conf` unless overridden.
pub fn resolve_config_path() -> PathBuf {
    env_path_or(CONFIG_PATH_ENV, || home_dir().join(".repl.conf"))
}

/// Directory holding the per-command `.<command>_history` files.
pub fn resolve_history_dir() -> PathBuf {
    env_path_or(HISTORY_DIR_ENV, home_dir)
}

/// Directory holding the per-command completion word lists.
pub fn resolve_completion_dir() -> PathBuf {
    env_path_or(COMPLETION_DIR_ENV, || home_dir().join(".repl"))
}

fn env_path_or(key: &str, default: impl FnOnce() -> PathBuf) -> PathBuf {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => absolute(expand_path(&raw)),
        _ => absolute(default()),
    }
}

/// Expand a leading `~` to the home directory.
pub fn expand_path(input: &str) -> PathBuf {
    if input == "~" {
        return home_dir();
    } else if let Some(rest) = input.strip_prefix("~/") {
        return home_dir().join(rest);
    }
    PathBuf::from(input)
}

/// Anchor a relative path at the working directory and drop `.`/`..` components.
pub fn absolute(path: PathBuf) -> PathBuf {
    let anchored = if path.is_absolute() {
        path
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path,
        }
    };
    anchored.normalize()
}

pub fn home_dir() -> PathBuf {
    env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| {
            #[cfg(target_os = "windows")]
            {
                env::var_os("USERPROFILE").map(PathBuf::from)
            }
            #[cfg(not(target_os = "windows"))]
            {
                None
            }
        })
        .unwrap_or_else(|| PathBuf::from("/"))
}
