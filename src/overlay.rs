//! Clang VFS overlay pointing a virtual module map at the generated file.

use serde::{Deserialize, Serialize};

/// File name the compiler looks for inside the module directory.
pub const VIRTUAL_FILE_NAME: &str = "module.modulemap";

/// Root record of a VFS overlay document.
///
/// Fields are declared in alphabetical key order so the YAML output is
/// stable and matches sorted-key dumpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VfsOverlay {
    /// Virtual entries.
    pub roots: Vec<VfsEntry>,
    /// Whether the compiler reports external paths instead of virtual ones.
    pub use_external_names: bool,
    /// Overlay format version.
    pub version: u32,
}

/// A single virtual entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VfsEntry {
    /// Real path the virtual entry reads from.
    pub external_contents: String,
    /// Virtual path.
    pub name: String,
    /// Entry kind.
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// Kind of a VFS entry. Only files are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A regular file.
    File,
}

impl VfsOverlay {
    /// Maps `<directory>/module.modulemap` to `module_map_path`.
    ///
    /// Both paths are used as supplied, except that trailing separators on
    /// `directory` are dropped so `src/` and `src` name the same entry.
    #[must_use]
    pub fn for_module_map(directory: &str, module_map_path: &str) -> Self {
        let trimmed = directory.trim_end_matches('/');
        let directory = if trimmed.is_empty() { directory } else { trimmed };
        Self {
            roots: vec![VfsEntry {
                external_contents: module_map_path.to_string(),
                name: format!("{directory}/{VIRTUAL_FILE_NAME}"),
                kind: EntryKind::File,
            }],
            use_external_names: false,
            version: 0,
        }
    }

    /// Serializes the overlay as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
