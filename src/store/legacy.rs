//! Adapter for the old two-bucket task layout.
//!
//! Earlier versions stored (and some model responses still return) tasks as
//! `{"today": [...], "overall": [...]}`. Both buckets are concatenated in
//! [`BUCKET_ORDER`] to get the flat list the rest of the crate works with.

use serde_json::Value;

/// Order in which legacy buckets are concatenated.
pub const BUCKET_ORDER: [&str; 2] = ["today", "overall"];

/// Returns the concatenated bucket contents if `value` uses the bucket layout.
///
/// Returns `None` for anything that is not an object with at least one
/// bucket holding an array.
#[must_use]
pub fn flatten_buckets(value: &Value) -> Option<Vec<Value>> {
    let object = value.as_object()?;
    let buckets: Vec<&Vec<Value>> =
        BUCKET_ORDER.iter().filter_map(|key| object.get(*key)?.as_array()).collect();
    if buckets.is_empty() {
        return None;
    }
    Some(buckets.into_iter().flatten().cloned().collect())
}
