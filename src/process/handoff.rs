use crate::error::ReplError;
use crate::process::which::which;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A pending replacement of the current process image.
///
/// Building a `Handoff` has no side effects; [`Handoff::exec`] transfers
/// control and only comes back with the reason it could not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    program: PathBuf,
    args: Vec<String>,
    env: Vec<(String, String)>,
}

impl Handoff {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    /// Resolve `name` on `PATH` first; a missing program is fatal.
    pub fn locate(name: &str) -> Result<Self, ReplError> {
        which(name)
            .map(Self::new)
            .ok_or_else(|| ReplError::NotFound(name.to_string()))
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn argv(&self) -> &[String] {
        &self.args
    }

    pub fn vars(&self) -> &[(String, String)] {
        &self.env
    }

    /// Replace the current process. Never returns on success.
    pub fn exec(self) -> ReplError {
        tracing::debug!(program = %self.program.display(), args = ?self.args, "handing off");

        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command.envs(self.env.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            let source = command.exec();
            ReplError::Exec {
                program: self.program,
                source,
            }
        }

        #[cfg(not(unix))]
        {
            match command.status() {
                Ok(status) => std::process::exit(status.code().unwrap_or(1)),
                Err(source) => ReplError::Exec {
                    program: self.program,
                    source,
                },
            }
        }
    }
}
