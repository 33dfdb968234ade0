use std::process::Command;

pub const NAME: &str = "repl";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: repl [options] command ...

Options:
  --version Display repl version information
  --help    Display repl usage information
  --man     Display the repl man page
  --html    Open HTML version of man page
  --stdin   Pipe input to command's STDIN
  --printf  Avoid newline chars in STDIN
  --escape  Shell escape user's input
  --debug   Display each command being executed
  --quiet   Don't echo the prompt in pipelines

Environment:
  REPL_CONF            config file (default: ~/.repl.conf)
  REPL_HISTORY_DIR     directory for .<command>_history files (default: ~)
  REPL_COMPLETION_DIR  directory for completion files (default: ~/.repl)
  REPL_PROMPT          prompt suffix (default: >>)
  REPL_DEBUG           set to `true` to imply --debug
  REPL_QUIET           set to `true` to imply --quiet
  REPL_LOG             diagnostic log filter, e.g. `debug`

Homepage:

  http://github.com/pvdb/repl

Bug reports, suggestions, updates:

  http://github.com/pvdb/repl/issues
";

/// `repl <version> (<rlwrap version>)`.
pub fn version() -> String {
    format!("{NAME} {VERSION} ({})", rlwrap_version())
}

pub fn rlwrap_version() -> String {
    Command::new("rlwrap")
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|version| version.trim().to_string())
        .filter(|version| !version.is_empty())
        .unwrap_or_else(|| "rlwrap not installed".to_string())
}
