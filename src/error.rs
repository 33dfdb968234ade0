use rustyline::error::ReadlineError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a `repl` session instead of being reported inside the loop.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("unable to locate `{0}` on the search path")]
    NotFound(String),
    #[error("unable to exec `{}`: {source}", program.display())]
    Exec {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("line editor error: {0}")]
    Readline(#[from] ReadlineError),
}

pub type ReplResult<T> = Result<T, ReplError>;
