//! Generates a clang module map and VFS overlay for a directory of headers.
//!
//! The module map declares every `.h` file under the directory (plus any
//! extra generated headers) as one module; the overlay lets the compiler
//! find that map at `<directory>/module.modulemap` without copying it there.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod logging;
pub mod modulemap;
pub mod overlay;
pub mod ports;

pub use error::{Error, Result};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns [`Error::Usage`] when argument parsing fails (or help/version is
/// requested), otherwise any error from generation.
pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| Error::Usage {
        message: err.to_string(),
        code: u8::try_from(err.exit_code()).unwrap_or(2),
    })?;
    commands::dispatch(cli)
}
