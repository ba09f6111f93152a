//! Native GUI binary entry point.

fn main() {
    std::process::exit(run_and_report(tabdeck_gui::run));
}

/// Map the runner's result to a process exit code, printing the error.
fn run_and_report<E: std::fmt::Display>(runner: impl FnOnce() -> Result<(), E>) -> i32 {
    match runner() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("tabdeck: {}", err);
            1
        }
    }
}
