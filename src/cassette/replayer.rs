//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use thiserror::Error;

use super::format::{Cassette, Interaction};

/// Why a cassette could not serve the interaction a port asked for.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplayError {
    /// The cassette never recorded this port/method pair.
    #[error("cassette has no interactions recorded for {pair}; recorded pairs: [{available}]")]
    NotRecorded {
        /// Requested `port::method`.
        pair: String,
        /// Comma-separated `port::method` pairs the cassette does hold.
        available: String,
    },
    /// Every recorded interaction for the pair was already served.
    #[error("cassette exhausted: all {recorded} {pair} interactions were consumed")]
    Exhausted {
        /// Requested `port::method`.
        pair: String,
        /// How many interactions the cassette held for the pair.
        recorded: usize,
    },
}

/// Serves a cassette's interactions back, one queue per port/method pair.
///
/// Pairs are independent: interleaving calls to different ports in a new
/// order than they were recorded still yields each port's values in order.
pub struct CassetteReplayer {
    queues: HashMap<(String, String), (usize, VecDeque<Interaction>)>,
}

impl CassetteReplayer {
    /// Index a loaded cassette for replay.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), (usize, VecDeque<Interaction>)> =
            HashMap::new();
        for interaction in &cassette.interactions {
            let (recorded, queue) = queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default();
            *recorded += 1;
            queue.push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Take the next recorded interaction for `port::method`.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::NotRecorded`] if the cassette never recorded
    /// that pair, or [`ReplayError::Exhausted`] once all of them were served.
    pub fn next_interaction(
        &mut self,
        port: &str,
        method: &str,
    ) -> Result<Interaction, ReplayError> {
        let pair = format!("{port}::{method}");
        let Some((recorded, queue)) = self.queues.get_mut(&(port.to_string(), method.to_string()))
        else {
            let mut available: Vec<String> =
                self.queues.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            available.sort();
            return Err(ReplayError::NotRecorded { pair, available: available.join(", ") });
        };
        queue.pop_front().ok_or(ReplayError::Exhausted { pair, recorded: *recorded })
    }
}
