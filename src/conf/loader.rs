use std::env;
use std::fs;
use std::io;
use std::path::Path;

/// Merge a `key = value` file into the process environment.
///
/// Variables that are already set keep their value. A missing file is not an
/// error. Returns the number of variables that were set from the file.
pub fn merge_file(path: &Path) -> io::Result<usize> {
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no config file");
        return Ok(0);
    }

    let contents = fs::read_to_string(path)?;
    let merged = merge_entries(parse(&contents));
    tracing::debug!(path = %path.display(), merged, "merged config file");
    Ok(merged)
}

/// Apply parsed entries, leaving variables that already exist untouched.
pub fn merge_entries(entries: Vec<(String, String)>) -> usize {
    let mut merged = 0;
    for (key, value) in entries {
        if !storable(&key, &value) {
            tracing::warn!(key = %key, "skipping config entry that cannot be stored in the environment");
            continue;
        }
        if env::var_os(&key).is_some() {
            continue;
        }
        // Runs during startup, before any other thread exists.
        unsafe {
            env::set_var(&key, &value);
        }
        merged += 1;
    }
    merged
}

/// Parse the whole file, dropping blank and `#` comment lines.
pub fn parse(contents: &str) -> Vec<(String, String)> {
    contents.lines().filter_map(parse_line).collect()
}

/// Parse a single line into a key and an unquoted value.
///
/// A line without `=` yields the line itself as key and an empty value.
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=').unwrap_or((line, ""));
    Some((key.trim().to_string(), strip_quotes(value.trim()).to_string()))
}

/// Remove one leading and one trailing double quote, each independently.
pub fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

fn storable(key: &str, value: &str) -> bool {
    !key.is_empty() && !key.contains(['=', '\0']) && !value.contains('\0')
}

#[cfg(test)]
mod tests {
    use super::{parse, parse_line, storable, strip_quotes};

    fn entry(key: &str, value: &str) -> Option<(String, String)> {
        Some((key.to_string(), value.to_string()))
    }

    #[test]
    fn parses_quoted_and_bare_values() {
        assert_eq!(parse_line("REPL_PROMPT = \"$\""), entry("REPL_PROMPT", "$"));
        assert_eq!(parse_line("REPL_DEBUG=true"), entry("REPL_DEBUG", "true"));
        assert_eq!(parse_line("  REPL_QUIET   =   false  "), entry("REPL_QUIET", "false"));
    }

    #[test]
    fn splits_on_first_equals_only() {
        assert_eq!(parse_line("OPTS = a=b"), entry("OPTS", "a=b"));
    }

    #[test]
    fn quotes_are_stripped_independently() {
        assert_eq!(strip_quotes("\"value\""), "value");
        assert_eq!(strip_quotes("\"value"), "value");
        assert_eq!(strip_quotes("value\""), "value");
        assert_eq!(strip_quotes("\"\"value\"\""), "\"value\"");
        assert_eq!(strip_quotes("\""), "");
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("    "), None);
        assert_eq!(parse_line("# REPL_DEBUG = true"), None);
        assert_eq!(parse_line("   # indented comment"), None);
    }

    #[test]
    fn line_without_equals_has_empty_value() {
        assert_eq!(parse_line("REPL_DEBUG"), entry("REPL_DEBUG", ""));
    }

    #[test]
    fn parses_whole_file() {
        let contents = "# repl settings\n\nREPL_PROMPT = \"=>\"\r\nREPL_QUIET = true\n";
        assert_eq!(
            parse(contents),
            vec![
                ("REPL_PROMPT".to_string(), "=>".to_string()),
                ("REPL_QUIET".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_keys_the_environment_cannot_hold() {
        assert!(!storable("", "x"));
        assert!(!storable("A\0B", "x"));
        assert!(!storable("KEY", "nul\0"));
        assert!(storable("KEY", ""));
    }
}
