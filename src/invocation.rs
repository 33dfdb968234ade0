//! Command-line handling: recognized flags are stripped wherever they appear
//! and everything else is left for the command template.

use std::path::Path;

pub const VERSION_FLAG: &str = "--version";
pub const HELP_FLAG: &str = "--help";
pub const MAN_FLAG: &str = "--man";
pub const HTML_FLAG: &str = "--html";
pub const STDIN_FLAG: &str = "--stdin";
pub const PRINTF_FLAG: &str = "--printf";
pub const ESCAPE_FLAG: &str = "--escape";
pub const DEBUG_FLAG: &str = "--debug";
pub const QUIET_FLAG: &str = "--quiet";

pub const RESERVED_FLAGS: [&str; 9] = [
    VERSION_FLAG,
    HELP_FLAG,
    MAN_FLAG,
    HTML_FLAG,
    STDIN_FLAG,
    PRINTF_FLAG,
    ESCAPE_FLAG,
    DEBUG_FLAG,
    QUIET_FLAG,
];

/// Every flag `repl` understands, as seen on the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    pub version: bool,
    pub help: bool,
    pub man: bool,
    pub html: bool,
    pub stdin: bool,
    pub printf: bool,
    pub escape: bool,
    pub debug: bool,
    pub quiet: bool,
}

impl Flags {
    /// Record `arg` if it is a recognized flag; returns whether it was consumed.
    fn consume(&mut self, arg: &str) -> bool {
        let slot = match arg {
            VERSION_FLAG => &mut self.version,
            HELP_FLAG => &mut self.help,
            MAN_FLAG => &mut self.man,
            HTML_FLAG => &mut self.html,
            STDIN_FLAG => &mut self.stdin,
            PRINTF_FLAG => &mut self.printf,
            ESCAPE_FLAG => &mut self.escape,
            DEBUG_FLAG => &mut self.debug,
            QUIET_FLAG => &mut self.quiet,
            _ => return false,
        };
        *slot = true;
        true
    }
}

/// The flags that shape a running session. `debug` and `quiet` may also be
/// switched on from the environment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionFlags {
    pub stdin: bool,
    pub printf: bool,
    pub escape: bool,
    pub debug: bool,
    pub quiet: bool,
}

impl SessionFlags {
    pub fn resolve(flags: &Flags, env_debug: bool, env_quiet: bool) -> Self {
        Self {
            stdin: flags.stdin,
            printf: flags.printf,
            escape: flags.escape,
            debug: flags.debug || env_debug,
            quiet: flags.quiet || env_quiet,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    flags: Flags,
    residual: Vec<String>,
}

impl Invocation {
    /// Split `argv` (program name first) into flags and residual arguments.
    pub fn parse<I>(argv: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut argv = argv.into_iter();
        let program = argv.next().unwrap_or_else(|| "repl".to_string());
        let args: Vec<String> = argv.collect();

        let mut flags = Flags::default();
        let residual = args
            .iter()
            .filter(|arg| !flags.consume(arg))
            .cloned()
            .collect();

        Self {
            program,
            args,
            flags,
            residual,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// The arguments exactly as given, flags included.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    /// The arguments left once every recognized flag has been removed.
    pub fn residual(&self) -> &[String] {
        &self.residual
    }

    /// `git-repl` is run as `repl git`: returns the host command, if any.
    pub fn host_command(&self) -> Option<String> {
        host_command(&self.program)
    }
}

pub fn is_reserved(arg: &str) -> bool {
    RESERVED_FLAGS.contains(&arg)
}

/// Extract `<command>` from a program named `<command>-repl`.
pub fn host_command(program: &str) -> Option<String> {
    let name = Path::new(program).file_name()?.to_str()?;
    name.strip_suffix("-repl")
        .filter(|command| !command.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::{Invocation, SessionFlags, host_command};

    fn parse(args: &[&str]) -> Invocation {
        Invocation::parse(
            std::iter::once("repl")
                .chain(args.iter().copied())
                .map(str::to_string),
        )
    }

    #[test]
    fn strips_flags_in_any_position() {
        let invocation = parse(&["--debug", "grep", "--stdin", "-i", "foo", "--quiet"]);
        assert_eq!(invocation.residual(), ["grep", "-i", "foo"]);
        let flags = invocation.flags();
        assert!(flags.debug && flags.stdin && flags.quiet);
        assert!(!flags.printf && !flags.escape && !flags.help);
    }

    #[test]
    fn strips_every_occurrence_of_a_flag() {
        let invocation = parse(&["--escape", "cat", "--escape"]);
        assert_eq!(invocation.residual(), ["cat"]);
        assert!(invocation.flags().escape);
    }

    #[test]
    fn keeps_original_arguments_for_forwarding() {
        let invocation = parse(&["--stdin", "wc", "-l"]);
        assert_eq!(invocation.args(), ["--stdin", "wc", "-l"]);
        assert_eq!(invocation.program(), "repl");
    }

    #[test]
    fn unknown_double_dash_options_belong_to_the_command() {
        let invocation = parse(&["git", "--no-pager", "log"]);
        assert_eq!(invocation.residual(), ["git", "--no-pager", "log"]);
    }

    #[test]
    fn environment_can_enable_debug_and_quiet() {
        let invocation = parse(&["ls"]);
        let flags = SessionFlags::resolve(invocation.flags(), true, true);
        assert!(flags.debug && flags.quiet);
        let flags = SessionFlags::resolve(invocation.flags(), false, false);
        assert!(!flags.debug && !flags.quiet);
    }

    #[test]
    fn host_command_from_program_name() {
        assert_eq!(host_command("/usr/local/bin/git-repl").as_deref(), Some("git"));
        assert_eq!(host_command("brew-repl").as_deref(), Some("brew"));
        assert_eq!(host_command("docker-compose-repl").as_deref(), Some("docker-compose"));
        assert_eq!(host_command("repl"), None);
        assert_eq!(host_command("-repl"), None);
        assert_eq!(host_command("git-repl-old"), None);
    }
}
