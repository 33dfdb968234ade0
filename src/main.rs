use std::env;
use std::process::ExitCode;

/// Entry point that hands the arguments to the launcher.
fn main() -> ExitCode {
    repl::logging::init_tracing();

    let argv = repl::launch::collect_args(env::args_os());

    match repl::launch::run(argv) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("repl: {err}");
            ExitCode::FAILURE
        }
    }
}
