//! Port traits defining the boundaries hooks depend on.
//!
//! Hooks never reach for ambient globals: identifier generation and event
//! emission come in through these traits. Implementations live in
//! `src/adapters/`.

pub mod events;
pub mod id_gen;

pub use events::{EventEmitter, NoopEventEmitter};
pub use id_gen::IdGenerator;
