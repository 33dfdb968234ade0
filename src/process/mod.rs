//! Everything that starts, replaces or looks up other programs.

pub mod handoff;
pub mod help;
pub mod history;
pub mod runner;
pub mod which;

pub use handoff::Handoff;
pub use runner::{CommandRunner, ExecError, RunOutcome, ShellRunner, shell_escape};
