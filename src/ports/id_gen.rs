//! ID generator port for producing unique identifiers.

use crate::error::HookError;

/// Generates unique identifiers.
///
/// Hooks take this as a dependency so tests and cassette playback can
/// substitute a predictable sequence for the random source.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::IdSource`] when a finite source (a replayed
    /// cassette) has nothing left to hand out. The live source never fails.
    fn generate_id(&self) -> Result<String, HookError>;
}
