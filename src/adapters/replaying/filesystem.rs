//! Replaying adapter for the `FileSystem` port.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::{FileSystem, PortError};

/// Replays recorded filesystem operations from a cassette.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self {
            replayer: Mutex::new(replayer),
        }
    }

    fn next_output(&self, method: &str) -> serde_json::Value {
        let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
        replayer.next_interaction("fs", method).output.clone()
    }
}

/// Extracts a Result from a cassette output JSON value.
///
/// Expects `{"ok": <value>}` or `{"err": "message"}`.
fn extract_result<T: serde::de::DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> Result<T, PortError> {
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}

impl FileSystem for ReplayingFileSystem {
    fn is_dir(&self, _path: &Path) -> bool {
        self.next_output("is_dir").as_bool().expect("fs::is_dir: expected boolean output")
    }

    fn create_dir_all(&self, _path: &Path) -> Result<(), PortError> {
        extract_result(&self.next_output("create_dir_all"), "fs::create_dir_all")
    }

    fn read_to_string(&self, _path: &Path) -> Result<Option<String>, PortError> {
        extract_result(&self.next_output("read_to_string"), "fs::read_to_string")
    }

    fn write(&self, _path: &Path, _contents: &str) -> Result<(), PortError> {
        extract_result(&self.next_output("write"), "fs::write")
    }

    fn list_files(&self, _root: &Path) -> Result<Vec<String>, PortError> {
        extract_result(&self.next_output("list_files"), "fs::list_files")
    }

    fn canonicalize(&self, _path: &Path) -> Result<PathBuf, PortError> {
        extract_result(&self.next_output("canonicalize"), "fs::canonicalize")
    }
}
