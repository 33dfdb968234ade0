use repl::ReplError;
use repl::process::Handoff;

#[cfg(unix)]
#[test]
fn locate_resolves_programs_on_path() {
    let handoff = Handoff::locate("sh").unwrap().arg("-c").arg("true");
    assert!(handoff.program().is_absolute());
    assert!(handoff.program().ends_with("sh"));
    assert_eq!(handoff.argv(), ["-c", "true"]);
    assert!(handoff.vars().is_empty());
}

#[test]
fn missing_programs_are_fatal() {
    let err = Handoff::locate("definitely-not-a-real-program-4821").unwrap_err();
    assert!(matches!(err, ReplError::NotFound(_)));
    assert_eq!(
        err.to_string(),
        "unable to locate `definitely-not-a-real-program-4821` on the search path"
    );
}
