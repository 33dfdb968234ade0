use crate::signals::Interrupts;
use std::io;
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// How a command that was started came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Interrupted,
}

/// Failures reported inside the loop; none of them end the session.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("Unable to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("Command failed with exit {code}: {command}")]
    Failed { command: String, code: i32 },
    #[error("Command terminated by signal {signal}: {command}")]
    Signaled { command: String, signal: i32 },
}

/// Runs a fully expanded command line.
pub trait CommandRunner {
    fn run(&mut self, command: &str) -> Result<RunOutcome, ExecError>;
}

/// Runs commands through `sh -c` with the standard streams inherited.
///
/// The command line is handed to the shell verbatim: whoever types the
/// template and the input is trusted with the shell. `--escape` quotes the
/// input for users who want it treated as a single word.
pub struct ShellRunner {
    shell: String,
    interrupts: Interrupts,
}

impl ShellRunner {
    pub fn new(interrupts: Interrupts) -> Self {
        Self {
            shell: "sh".to_string(),
            interrupts,
        }
    }

    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }
}

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &str) -> Result<RunOutcome, ExecError> {
        self.interrupts.clear();
        tracing::debug!(shell = %self.shell, command, "spawning");

        let status = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .status()
            .map_err(|source| ExecError::Spawn {
                command: command.to_string(),
                source,
            })?;

        tracing::debug!(%status, "command finished");
        if self.interrupts.take() {
            return Ok(RunOutcome::Interrupted);
        }
        check_status(command, status)
    }
}

fn check_status(command: &str, status: ExitStatus) -> Result<RunOutcome, ExecError> {
    if status.success() {
        return Ok(RunOutcome::Completed);
    }
    if let Some(code) = status.code() {
        return Err(ExecError::Failed {
            command: command.to_string(),
            code,
        });
    }

    #[cfg(unix)]
    let signal = {
        use std::os::unix::process::ExitStatusExt;
        status.signal().unwrap_or(0)
    };
    #[cfg(not(unix))]
    let signal = 0;

    Err(ExecError::Signaled {
        command: command.to_string(),
        signal,
    })
}

/// Shell-quote `input` so the shell sees it as one word.
pub fn shell_escape(input: &str) -> String {
    match shlex::try_quote(input) {
        Ok(quoted) => quoted.into_owned(),
        // Only NUL bytes are rejected, and no shell argument can hold one.
        Err(_) => shlex::try_quote(&input.replace('\0', ""))
            .map(|quoted| quoted.into_owned())
            .unwrap_or_default(),
    }
}
