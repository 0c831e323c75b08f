//! Binary entrypoint for the `modmap` CLI.

use std::process::ExitCode;

use modmap::Error;

fn main() -> ExitCode {
    modmap::logging::init();
    // Recording is handled in commands::dispatch via MODMAP_RECORD=<file>.
    match modmap::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Usage { message, code: 0 }) => {
            print!("{message}");
            ExitCode::SUCCESS
        }
        Err(Error::Usage { message, code }) => {
            eprint!("{message}");
            ExitCode::from(code)
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
