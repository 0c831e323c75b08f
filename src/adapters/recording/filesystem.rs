//! Recording adapter for the `FileSystem` port.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::{record_interaction, record_result};
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{FileSystem, PortError};

/// Records filesystem interactions while delegating to an inner implementation.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingFileSystem {
    /// Creates a new recording filesystem wrapping the given implementation.
    pub fn new(inner: Box<dyn FileSystem>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct PathInput<'a> {
    path: &'a str,
}

#[derive(Serialize)]
struct WriteInput<'a> {
    path: &'a str,
    contents: &'a str,
}

impl FileSystem for RecordingFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        let result = self.inner.is_dir(path);
        let input = PathInput {
            path: &path.display().to_string(),
        };
        record_interaction(&self.recorder, "fs", "is_dir", &input, &result);
        result
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), PortError> {
        let result = self.inner.create_dir_all(path);
        let input = PathInput {
            path: &path.display().to_string(),
        };
        record_result(&self.recorder, "fs", "create_dir_all", &input, &result);
        result
    }

    fn read_to_string(&self, path: &Path) -> Result<Option<String>, PortError> {
        let result = self.inner.read_to_string(path);
        let input = PathInput {
            path: &path.display().to_string(),
        };
        record_result(&self.recorder, "fs", "read_to_string", &input, &result);
        result
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        let result = self.inner.write(path, contents);
        let input = WriteInput {
            path: &path.display().to_string(),
            contents,
        };
        record_result(&self.recorder, "fs", "write", &input, &result);
        result
    }

    fn list_files(&self, root: &Path) -> Result<Vec<String>, PortError> {
        let result = self.inner.list_files(root);
        let input = PathInput {
            path: &root.display().to_string(),
        };
        record_result(&self.recorder, "fs", "list_files", &input, &result);
        result
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, PortError> {
        let result = self.inner.canonicalize(path);
        let input = PathInput {
            path: &path.display().to_string(),
        };
        record_result(&self.recorder, "fs", "canonicalize", &input, &result);
        result
    }
}
