//! Task model and the reconciliation core.
//!
//! Everything under this module is pure: no I/O, no clocks, no globals.
//! Fresh identifiers are the only outside input and arrive through the
//! [`IdGenerator`](crate::ports::IdGenerator) port.

pub mod list;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod reconcile;

pub use matcher::find_match;
pub use model::Task;
pub use normalize::normalize;
pub use reconcile::{append, deduplicate, merge, reconcile, replace, AccumulationPolicy};
