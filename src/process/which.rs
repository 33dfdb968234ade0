use std::path::PathBuf;

/// Resolve `program` either as a path to an executable file or by searching
/// `PATH`.
pub fn which(program: &str) -> Option<PathBuf> {
    if program.is_empty() {
        return None;
    }
    match ::which::which(program) {
        Ok(path) => Some(path),
        Err(err) => {
            tracing::trace!(program, error = %err, "not found");
            None
        }
    }
}
