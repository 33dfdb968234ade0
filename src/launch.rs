//! Startup: decide who runs the session (a host redirect, a doc viewer,
//! `rlwrap`, or this process), then run the loop.

use crate::conf::{self, Settings};
use crate::control::{HistoryEditor, LineEditor, StdinEditor, run_loop_with_editor};
use crate::control_state::ControlState;
use crate::error::ReplResult;
use crate::invocation::{Invocation, SessionFlags};
use crate::process::help::{NAME, USAGE, version};
use crate::process::history::history_file_for;
use crate::process::which::which;
use crate::process::{Handoff, ShellRunner};
use crate::signals::Interrupts;
use crate::template::Template;
use crate::wrap::{self, WRAPPER, WrapState};
use std::env;
use std::ffi::OsString;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

pub const NO_COMMAND: &str = "No command specified... use `--help`";

#[cfg(target_os = "macos")]
const HTML_OPENER: &str = "open";
#[cfg(not(target_os = "macos"))]
const HTML_OPENER: &str = "xdg-open";

/// Run `repl` for the given `argv` (program name first).
///
/// Returns only when the session is over; hand-offs that succeed never return.
pub fn run(argv: Vec<String>) -> ReplResult<()> {
    let invocation = Invocation::parse(argv);

    if let Some(host) = invocation.host_command() {
        let handoff = Handoff::locate(NAME)?
            .arg(host)
            .args(invocation.args().iter().cloned());
        return Err(handoff.exec());
    }

    let flags = invocation.flags();
    if flags.version {
        println!("{}", version());
        return Ok(());
    }
    if flags.help {
        println!("{USAGE}");
        return Ok(());
    }
    if flags.man {
        let page = install_dir().join("repl.1");
        return Err(Handoff::locate("man")?.arg(page.to_string_lossy()).exec());
    }
    if flags.html {
        let page = install_dir().join("repl.1.html");
        return Err(Handoff::locate(HTML_OPENER)?.arg(page.to_string_lossy()).exec());
    }

    let state = WrapState::detect();
    if state == WrapState::Unwrapped {
        let path = conf::resolve_config_path();
        if let Err(err) = conf::merge_file(&path) {
            tracing::warn!(path = %path.display(), error = %err, "unable to read config file");
        }
    }

    let settings = Settings::from_env();
    let interactive = io::stdin().is_terminal();
    let rlwrap = which(WRAPPER);

    if let Some(handoff) = wrap::plan(
        state,
        interactive,
        rlwrap.as_deref(),
        &program_path(invocation.program()),
        invocation.args(),
        &settings,
    ) {
        return Err(handoff.exec());
    }

    let session_flags = SessionFlags::resolve(flags, settings.debug, settings.quiet);
    let Some(template) = Template::build(invocation.residual(), &session_flags) else {
        println!("{NO_COMMAND}");
        return Ok(());
    };
    tracing::debug!(template = template.as_str(), ?session_flags, interactive, "starting session");

    let interrupts = Interrupts::install()?;
    let runner = ShellRunner::new(interrupts.clone());
    let mut control_state = ControlState::new(template, session_flags, runner)
        .with_interrupts(interrupts)
        .interactive(interactive)
        .wrapped(settings.wrapped)
        .prompt_suffix(settings.prompt.clone());

    let mut editor = open_editor(
        interactive,
        settings.wrapped,
        rlwrap.is_some(),
        invocation.args(),
        &settings,
    )?;
    run_loop_with_editor(&mut control_state, editor.as_mut())
}

/// Line editing is left to `rlwrap` when it is around; a terminal without
/// it gets the built-in editor, and pipes are read as-is.
fn open_editor(
    interactive: bool,
    wrapped: bool,
    rlwrap_installed: bool,
    args: &[String],
    settings: &Settings,
) -> ReplResult<Box<dyn LineEditor>> {
    if interactive && !wrapped && !rlwrap_installed {
        let history_file = wrap::base_command(args)
            .and_then(|base| history_file_for(&settings.history_dir, &base));
        return Ok(Box::new(HistoryEditor::open(history_file)?));
    }
    Ok(Box::new(StdinEditor::new(io::stdin().lock(), io::stdout())))
}

/// Path the wrapper should run: the program as invoked, or the running
/// executable when `argv[0]` is missing.
fn program_path(argv0: &str) -> PathBuf {
    if argv0.is_empty() {
        return env::current_exe().unwrap_or_else(|_| PathBuf::from(NAME));
    }
    PathBuf::from(argv0)
}

/// Convert the process arguments, replacing invalid UTF-8 with `U+FFFD`.
pub fn collect_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.into_string() {
            Ok(arg) => arg,
            Err(raw) => {
                let lossy = raw.to_string_lossy().into_owned();
                tracing::warn!(argument = %lossy, "argument is not valid UTF-8; invalid bytes replaced");
                lossy
            }
        })
        .collect()
}

fn install_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
