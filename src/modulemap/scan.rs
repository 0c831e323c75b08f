//! Header discovery and module naming.

use std::path::{Component, Path};

use crate::error::{Error, Result};
use crate::ports::FileSystem;

/// File-name suffix that marks a header.
const HEADER_SUFFIX: &str = ".h";

/// Recursively finds headers under `root`, relative to it and sorted.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory tree cannot be listed.
pub fn discover_headers(fs: &dyn FileSystem, root: &Path) -> Result<Vec<String>> {
    let files = fs.list_files(root).map_err(|e| Error::io("scan", root, e))?;
    let mut headers: Vec<String> = files.into_iter().filter(|f| is_header(f)).collect();
    headers.sort();
    tracing::debug!(root = %root.display(), count = headers.len(), "discovered headers");
    Ok(headers)
}

/// Returns `true` if the final segment of a `/`-separated path ends in `.h`.
fn is_header(path: &str) -> bool {
    let name = path.rsplit('/').next().unwrap_or(path);
    name.ends_with(HEADER_SUFFIX)
}

/// Derives the module name from the directory's final path component.
///
/// Paths without a final normal component (`.`, `..`, `/`) fall back to the
/// canonicalized directory's name.
///
/// # Errors
///
/// Returns [`Error::Io`] if the fallback canonicalization fails.
pub fn module_name(fs: &dyn FileSystem, directory: &Path) -> Result<String> {
    if let Some(Component::Normal(name)) = directory.components().next_back() {
        return Ok(name.to_string_lossy().into_owned());
    }
    let resolved = fs.canonicalize(directory).map_err(|e| Error::io("resolve", directory, e))?;
    Ok(resolved.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default())
}
