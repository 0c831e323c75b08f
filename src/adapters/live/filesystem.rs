//! Live filesystem adapter using `std::fs` and `walkdir`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::ports::filesystem::{FileSystem, PortError};

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), PortError> {
        Ok(std::fs::create_dir_all(path)?)
    }

    fn read_to_string(&self, path: &Path) -> Result<Option<String>, PortError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        Ok(std::fs::write(path, contents)?)
    }

    fn list_files(&self, root: &Path) -> Result<Vec<String>, PortError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).min_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if !keep_walk_error(&err) => {
                    let path = err.path().unwrap_or(root);
                    tracing::warn!(path = %path.display(), "skipping unreadable entry");
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            // Symlinked files count; symlinked directories are not descended.
            if !entry.path().is_file() {
                continue;
            }
            let relative = entry.path().strip_prefix(root)?;
            let parts: Vec<String> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            files.push(parts.join("/"));
        }
        Ok(files)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, PortError> {
        Ok(std::fs::canonicalize(path)?)
    }
}

/// Returns `true` if a walk error should abort the listing.
///
/// Unreadable subdirectories are skipped; everything else is fatal.
fn keep_walk_error(err: &walkdir::Error) -> bool {
    err.io_error().map(std::io::Error::kind) != Some(ErrorKind::PermissionDenied)
}
