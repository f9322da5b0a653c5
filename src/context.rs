//! Service context wiring the identifier source for a run.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use crate::adapters::live::LiveIdGenerator;
use crate::adapters::recording::RecordingIdGenerator;
use crate::adapters::replaying::ReplayingIdGenerator;
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::IdGenerator;

/// Bundles the port implementations hooks are built from.
///
/// Constructors pick the adapter flavour: live randomness, live randomness
/// captured to a cassette, or identifiers replayed from a cassette.
pub struct ServiceContext {
    /// ID generator shared by every hook in the run.
    pub id_gen: Arc<dyn IdGenerator>,
    /// Cassette recorder; saved on drop.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a context backed by the live random source.
    #[must_use]
    pub fn live() -> Self {
        Self { id_gen: Arc::new(LiveIdGenerator::new()), recorder: None }
    }

    /// Creates a context that records every generated ID to `path`.
    ///
    /// The cassette is written by [`finish`](Self::finish), or on drop if
    /// `finish` was never called.
    #[must_use]
    pub fn recording(path: &Path) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(path, "loadhooks-session")));
        let id_gen =
            RecordingIdGenerator::new(Box::new(LiveIdGenerator::new()), Arc::clone(&recorder));
        Self { id_gen: Arc::new(id_gen), recorder: Some(recorder) }
    }

    /// Creates a context that serves IDs from the cassette at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed, or if
    /// any recorded ID is not a version 4 UUID.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        let id_gen = ReplayingIdGenerator::from_cassette(&cassette)?;
        Ok(Self { id_gen: Arc::new(id_gen), recorder: None })
    }

    /// Writes the cassette of a recording context. No-op otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error string if the cassette cannot be written.
    pub fn finish(mut self) -> Result<(), String> {
        match self.recorder.take() {
            Some(recorder) => save(&recorder),
            None => Ok(()),
        }
    }
}

fn save(recorder: &Mutex<CassetteRecorder>) -> Result<(), String> {
    let guard = recorder.lock().unwrap_or_else(PoisonError::into_inner);
    let path = guard
        .save()
        .map_err(|e| format!("Failed to write cassette {}: {e}", guard.path().display()))?;
    tracing::info!(path = %path.display(), "cassette saved");
    Ok(())
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        if let Some(recorder) = self.recorder.take() {
            if let Err(err) = save(&recorder) {
                tracing::warn!(%err, "failed to write cassette");
            }
        }
    }
}
