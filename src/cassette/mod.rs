//! Cassettes: YAML recordings of port interactions.
//!
//! A recording session captures every clock, filesystem, id and LLM call a
//! command makes. Replaying the cassette serves the same outputs back, which
//! lets tests exercise extraction end to end without a network.

pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
