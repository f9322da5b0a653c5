//! Replaying adapter for the `IdGenerator` port.

use std::sync::{Mutex, PoisonError};

use uuid::Uuid;

use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::HookError;
use crate::ports::IdGenerator;

const PORT: &str = "id_gen";
const METHOD: &str = "generate_id";

/// Serves identifiers recorded in a cassette, in their original order.
///
/// Every recorded identifier is checked to be a hyphenated version 4 UUID
/// before the first one is served, so replay can never write anything a
/// live run could not have produced.
pub struct ReplayingIdGenerator {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingIdGenerator {
    /// Validates the cassette's recorded IDs and prepares them for replay.
    ///
    /// # Errors
    ///
    /// Returns an error string naming the first interaction whose output is
    /// not a hyphenated version 4 UUID.
    pub fn from_cassette(cassette: &Cassette) -> Result<Self, String> {
        for interaction in
            cassette.interactions.iter().filter(|i| i.port == PORT && i.method == METHOD)
        {
            if interaction.output.as_str().and_then(parse_v4).is_none() {
                return Err(format!(
                    "Cassette {:?} interaction seq={} holds {}, not a version 4 UUID",
                    cassette.name, interaction.seq, interaction.output
                ));
            }
        }
        Ok(Self { replayer: Mutex::new(CassetteReplayer::new(cassette)) })
    }
}

fn parse_v4(text: &str) -> Option<Uuid> {
    // Only the hyphenated 8-4-4-4-12 form; `parse_str` also takes simple and braced forms.
    if text.len() != 36 {
        return None;
    }
    Uuid::parse_str(text).ok().filter(|id| id.get_version_num() == 4)
}

impl IdGenerator for ReplayingIdGenerator {
    fn generate_id(&self) -> Result<String, HookError> {
        let interaction = self
            .replayer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next_interaction(PORT, METHOD)
            .map_err(|e| HookError::IdSource(e.to_string()))?;
        let id = interaction.output.as_str().and_then(parse_v4).ok_or_else(|| {
            HookError::IdSource(format!("replayed {} is not a UUID", interaction.output))
        })?;
        Ok(id.to_string())
    }
}
