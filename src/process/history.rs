use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Per-command history file, `<history_dir>/.<command>_history`, or `None`
/// when the directory does not exist.
pub fn history_file_for(history_dir: &Path, command: &str) -> Option<PathBuf> {
    history_dir
        .is_dir()
        .then(|| history_dir.join(format!(".{command}_history")))
}

/// Load history entries, one per line. A missing file yields no entries.
pub fn load_history(path: &Path) -> io::Result<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(err) => Err(err),
    }
}

/// Append a single entry, creating the file when needed. The format matches
/// the plain line-per-entry files `rlwrap` keeps.
pub fn append_history(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line.trim_end_matches(['\r', '\n']))
}
