//! Adapter implementations of the port traits.
//!
//! - `live`: real clock, disk, ids and HTTP.
//! - `recording`: wraps live adapters and records every call to a cassette.
//! - `replaying`: serves a cassette's recorded outputs back.

pub mod live;
pub mod recording;
pub mod replaying;
