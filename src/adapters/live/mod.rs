//! Live adapters backed by the real random source and `tracing`.

pub mod events;
pub mod id_gen;

pub use events::TracingEventEmitter;
pub use id_gen::LiveIdGenerator;
