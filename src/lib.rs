//! `repl`: run any command interactively.
//!
//! A command template is built from the arguments (`git show %s`, or
//! `ls -la %s` with the placeholder appended), then every line read from the
//! user is substituted into it and run through the shell. On a terminal the
//! whole session is re-run under `rlwrap` for history and completion.

pub mod conf;
pub mod console;
pub mod control;
pub mod control_state;
pub mod error;
pub mod invocation;
pub mod launch;
pub mod logging;
pub mod process;
pub mod signals;
pub mod template;
pub mod wrap;

pub use error::{ReplError, ReplResult};
