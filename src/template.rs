use crate::invocation::SessionFlags;

/// Marker replaced by the user's input line.
pub const PLACEHOLDER: &str = "%s";

/// A command with one or more `%s` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template(String);

impl Template {
    /// Build the template from the residual arguments, or `None` when no
    /// command was given.
    pub fn build(residual: &[String], flags: &SessionFlags) -> Option<Self> {
        let command = residual.join(" ");
        let command = command.trim();
        if command.is_empty() {
            return None;
        }

        let template = if flags.stdin {
            let emitter = if flags.printf { "printf" } else { "echo" };
            format!("{emitter} \"{PLACEHOLDER}\" | {command}")
        } else if residual.iter().any(|arg| arg.contains(PLACEHOLDER)) {
            command.to_string()
        } else {
            format!("{command} {PLACEHOLDER}")
        };

        Some(Self(template))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitute every placeholder with `input`. The input itself is never
    /// rescanned, so a literal `%s` typed by the user survives.
    pub fn expand(&self, input: &str) -> String {
        self.0.replace(PLACEHOLDER, input)
    }
}

impl From<&str> for Template {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}
