//! Live adapter for the `IdGenerator` port.

use uuid::Uuid;

use crate::error::HookError;
use crate::ports::IdGenerator;

/// Live ID generator producing random (version 4) UUIDs.
///
/// `Uuid::new_v4` draws from the operating system CSPRNG and is safe to
/// call from any number of threads at once.
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveIdGenerator;

impl LiveIdGenerator {
    /// Creates a new live ID generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for LiveIdGenerator {
    fn generate_id(&self) -> Result<String, HookError> {
        Ok(Uuid::new_v4().to_string())
    }
}
