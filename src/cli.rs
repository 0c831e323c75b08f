//! CLI argument definitions.

use clap::Parser;

use crate::modulemap::generator::Request;

/// Top-level CLI parser for `modmap`.
#[derive(Debug, Parser)]
#[command(
    name = "modmap",
    version,
    about = "Generate a clang module map and VFS overlay for a header directory"
)]
pub struct Cli {
    /// Source directory to generate the module map for.
    pub directory: String,
    /// Extra files to include in the module map.
    #[arg(required = true, num_args = 1..)]
    pub generated_files: Vec<String>,
    /// Output module map file.
    #[arg(short = 'm', long = "module-map")]
    pub module_map: String,
    /// Output VFS map file.
    #[arg(short = 'v', long = "vfs-map")]
    pub vfs_map: String,
}

impl Cli {
    /// Converts parsed arguments into a generation request.
    #[must_use]
    pub fn into_request(self) -> Request {
        Request {
            directory: self.directory,
            generated_files: self.generated_files,
            module_map_path: self.module_map,
            vfs_map_path: self.vfs_map,
        }
    }
}
