//! ast-merge: merge precompiled clang ASTs through `clang -cc1 -ast-merge`.
//!
//! This is the main entry point for the `ast-merge` CLI. It parses the
//! positional arguments, runs the compiler with its output streamed to
//! stdout, and exits with the compiler's exit code.

mod cli;
pub mod error;
pub mod exit_codes;
pub mod invocation;
mod logging;
pub mod runner;

#[cfg(all(test, unix))]
mod test_support;

use cli::Cli;
use invocation::MergeInvocation;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Err(err) = logging::init() {
        eprintln!("Warning: {:#}", err);
    }

    let invocation = MergeInvocation::new(cli.compiler, cli.target, cli.placeholder, cli.libraries);

    let mut stdout = std::io::stdout().lock();
    match runner::run(&invocation, &mut stdout) {
        Ok(status) => ExitCode::from(exit_codes::to_exit_byte(exit_codes::from_status(status))),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(exit_codes::to_exit_byte(err.exit_code()))
        }
    }
}
