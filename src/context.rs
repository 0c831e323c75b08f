//! Service context bundling the port trait objects a run needs.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::LiveFileSystem;
use crate::adapters::recording::RecordingFileSystem;
use crate::adapters::replaying::ReplayingFileSystem;
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::{Error, Result};
use crate::ports::filesystem::FileSystem;

/// Environment variable naming a cassette file to record the run into.
pub const RECORD_ENV: &str = "MODMAP_RECORD";

/// Bundles port trait objects into a single context.
///
/// Constructors wire up different adapter implementations (live,
/// recording, replaying).
pub struct ServiceContext {
    /// Filesystem for scanning and file I/O.
    pub fs: Box<dyn FileSystem>,
    /// Present while recording; flushed by [`ServiceContext::finish`].
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a live context backed by the real filesystem.
    #[must_use]
    pub fn live() -> Self {
        Self {
            fs: Box::new(LiveFileSystem),
            recorder: None,
        }
    }

    /// Creates a recording context that captures every filesystem call.
    ///
    /// The cassette is written to `path` by [`ServiceContext::finish`].
    #[must_use]
    pub fn recording(path: &Path) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(path, "modmap-run")));
        Self {
            fs: Box::new(RecordingFileSystem::new(
                Box::new(LiveFileSystem),
                Arc::clone(&recorder),
            )),
            recorder: Some(recorder),
        }
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self> {
        let cassette = Cassette::load(path).map_err(Error::Cassette)?;
        Ok(Self::from_cassette(&cassette))
    }

    /// Creates a replaying context from an in-memory cassette.
    #[must_use]
    pub fn from_cassette(cassette: &Cassette) -> Self {
        let replayer = CassetteReplayer::new(cassette);
        Self {
            fs: Box::new(ReplayingFileSystem::new(replayer)),
            recorder: None,
        }
    }

    /// Picks a live or recording context depending on `MODMAP_RECORD`.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var_os(RECORD_ENV) {
            Some(path) if !path.is_empty() => Self::recording(Path::new(&path)),
            _ => Self::live(),
        }
    }

    /// Consumes the context, writing the cassette if one was being recorded.
    ///
    /// Returns the cassette path when a recording was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>> {
        let Self { fs, recorder } = self;
        // Release the adapter's reference before unwrapping the recorder.
        drop(fs);
        let Some(recorder) = recorder else {
            return Ok(None);
        };
        let recorder = Arc::try_unwrap(recorder)
            .map_err(|_| Error::Cassette("recording adapter still has references".into()))?
            .into_inner()
            .map_err(|e| Error::Cassette(format!("recorder lock poisoned: {e}")))?;
        let path = recorder
            .finish()
            .map_err(|e| Error::Cassette(format!("failed to write cassette: {e}")))?;
        tracing::info!(path = %path.display(), "recording saved");
        Ok(Some(path))
    }
}
