//! YAML cassettes for recording and replaying port interactions.
//!
//! Recording a load-test run captures every identifier the hooks handed
//! out; replaying that cassette reproduces the exact same request contexts.

pub mod format;
pub mod recorder;
pub mod replayer;
