use repl::process::{CommandRunner, ExecError, RunOutcome, ShellRunner};
use repl::signals::Interrupts;

#[cfg(unix)]
#[test]
fn successful_commands_complete() {
    let mut runner = ShellRunner::new(Interrupts::detached());
    assert_eq!(runner.run("true").unwrap(), RunOutcome::Completed);
    assert_eq!(runner.run("test 1 -eq 1 && exit 0").unwrap(), RunOutcome::Completed);
}

#[cfg(unix)]
#[test]
fn non_zero_exit_is_a_failure() {
    let mut runner = ShellRunner::new(Interrupts::detached());
    let err = runner.run("exit 3").unwrap_err();
    assert!(matches!(&err, ExecError::Failed { code: 3, .. }));
    assert_eq!(err.to_string(), "Command failed with exit 3: exit 3");
}

#[cfg(unix)]
#[test]
fn unknown_commands_fail_through_the_shell() {
    let mut runner = ShellRunner::new(Interrupts::detached());
    let err = runner.run("definitely-not-a-real-program-4821 2>/dev/null").unwrap_err();
    assert!(matches!(err, ExecError::Failed { code: 127, .. }));
}

#[cfg(unix)]
#[test]
fn signals_are_reported() {
    let mut runner = ShellRunner::new(Interrupts::detached());
    let err = runner.run("kill -TERM $$").unwrap_err();
    assert!(matches!(err, ExecError::Signaled { signal: 15, .. }));
}

#[cfg(unix)]
#[test]
fn recorded_interrupt_wins_over_exit_status() {
    let interrupts = Interrupts::detached();
    let mut runner = ShellRunner::new(interrupts.clone());

    // The runner clears stale interrupts before it starts the command.
    interrupts.raise();
    assert_eq!(runner.run("true").unwrap(), RunOutcome::Completed);
    assert!(!interrupts.take());
}

#[test]
fn missing_shell_cannot_be_spawned() {
    let mut runner = ShellRunner::new(Interrupts::detached()).with_shell("/nonexistent/shell");
    let err = runner.run("true").unwrap_err();
    assert!(matches!(err, ExecError::Spawn { .. }));
    assert!(err.to_string().starts_with("Unable to run 'true': "));
}
