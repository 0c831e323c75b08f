//! Module map and VFS overlay generation, written idempotently.

use std::path::Path;

use crate::context::ServiceContext;
use crate::error::{Error, Result};
use crate::modulemap::scan::{discover_headers, module_name};
use crate::modulemap::ModuleMap;
use crate::overlay::VfsOverlay;
use crate::ports::FileSystem;

/// Inputs for one generation run. Paths are kept exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Header directory to scan.
    pub directory: String,
    /// Extra header entries appended verbatim.
    pub generated_files: Vec<String>,
    /// Output path for the module map.
    pub module_map_path: String,
    /// Output path for the VFS overlay.
    pub vfs_map_path: String,
}

/// Whether an output file was touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// New content was written.
    Written,
    /// Existing content already matched; the file was left alone.
    Unchanged,
}

impl WriteOutcome {
    fn as_str(self) -> &'static str {
        match self {
            Self::Written => "written",
            Self::Unchanged => "unchanged",
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Module identifier emitted in the map.
    pub module_name: String,
    /// Number of headers found by the scan (extra entries excluded).
    pub discovered: usize,
    /// Outcome for the module map file.
    pub module_map: WriteOutcome,
    /// Outcome for the VFS overlay file.
    pub vfs_map: WriteOutcome,
}

/// Generates the module map and VFS overlay for `request`.
///
/// Validates the directory before touching anything, creates the module
/// map's parent directory, then writes each output only if its content
/// changed. A failure on the second write leaves the first in place.
///
/// # Errors
///
/// Returns [`Error::InvalidDirectory`] if the directory is missing or not a
/// directory, [`Error::Io`] for filesystem failures, and
/// [`Error::Serialize`] if the overlay cannot be serialized.
pub fn generate(ctx: &ServiceContext, request: &Request) -> Result<Report> {
    let fs = ctx.fs.as_ref();
    let root = Path::new(&request.directory);
    if !fs.is_dir(root) {
        return Err(Error::InvalidDirectory {
            path: root.to_path_buf(),
        });
    }

    let module_map_path = Path::new(&request.module_map_path);
    if let Some(parent) = module_map_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs.create_dir_all(parent).map_err(|e| Error::io("create directory", parent, e))?;
    }

    let headers = discover_headers(fs, root)?;
    let discovered = headers.len();
    let map = ModuleMap::new(module_name(fs, root)?, headers, &request.generated_files);
    let overlay = VfsOverlay::for_module_map(&request.directory, &request.module_map_path);
    let overlay_yaml = overlay.to_yaml()?;

    let module_map_outcome = write_if_changed(fs, module_map_path, &map.render())?;
    let vfs_map_outcome = write_if_changed(fs, Path::new(&request.vfs_map_path), &overlay_yaml)?;

    Ok(Report {
        module_name: map.name,
        discovered,
        module_map: module_map_outcome,
        vfs_map: vfs_map_outcome,
    })
}

/// Writes `contents` to `path` unless the file already holds exactly that.
///
/// Skipping the write preserves the modification time for incremental
/// builds.
///
/// # Errors
///
/// Returns [`Error::Io`] if the existing file cannot be read or the write
/// fails.
pub fn write_if_changed(fs: &dyn FileSystem, path: &Path, contents: &str) -> Result<WriteOutcome> {
    let existing = fs.read_to_string(path).map_err(|e| Error::io("read", path, e))?;
    let outcome = if existing.as_deref() == Some(contents) {
        WriteOutcome::Unchanged
    } else {
        fs.write(path, contents).map_err(|e| Error::io("write", path, e))?;
        WriteOutcome::Written
    };
    tracing::info!(path = %path.display(), outcome = outcome.as_str(), "output file");
    Ok(outcome)
}
