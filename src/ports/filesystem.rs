//! Filesystem port for the reads, writes and listings generation needs.

use std::path::{Path, PathBuf};

/// Boxed error returned by port operations.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Provides filesystem access for scanning headers and writing outputs.
///
/// Abstracting the filesystem allows deterministic replay and testing
/// without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if the path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Creates a directory and all missing ancestors. Succeeds if it
    /// already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if any directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> Result<(), PortError>;

    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    fn read_to_string(&self, path: &Path) -> Result<Option<String>, PortError>;

    /// Writes the given contents to a file, creating or overwriting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError>;

    /// Recursively lists regular files under `root`.
    ///
    /// Paths are relative to `root` and use `/` as separator. Symlinks
    /// count as files when they resolve to one.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be walked.
    fn list_files(&self, root: &Path) -> Result<Vec<String>, PortError>;

    /// Resolves a path to its absolute, symlink-free form.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf, PortError>;
}
