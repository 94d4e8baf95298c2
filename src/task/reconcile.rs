//! Merging freshly extracted task text into a stored task list.
//!
//! Two accumulation paths exist:
//!
//! - [`replace`] runs [`merge`]: every extracted text is matched against the
//!   stored tasks and inherits the `id` and `completed` flag of its match.
//!   Stored tasks that nothing matched are dropped.
//! - [`append`] keeps every stored task and adds one fresh task per extracted
//!   text. No matching happens; only exact normalized duplicates collapse.
//!
//! Both finish with [`deduplicate`], which is deliberately stricter than
//! matching: it only drops tasks whose normalized text is identical.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::matcher::find_match;
use super::model::Task;
use super::normalize::normalize;
use crate::ports::IdGenerator;

/// How a new extraction is combined with the stored task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccumulationPolicy {
    /// Keep history: stored tasks first, then one fresh task per new text.
    #[default]
    Append,
    /// Rebuild the list from the new texts, carrying over matched state.
    Replace,
}

/// Builds one task per entry of `new_texts`, in order.
///
/// A text that [`find_match`] pairs with a stored task keeps that task's
/// `id` and `completed` flag but takes the new text. Any other text gets a
/// fresh id from `id_gen` and starts incomplete.
pub fn merge<S: AsRef<str>>(
    new_texts: &[S],
    existing: &[Task],
    id_gen: &dyn IdGenerator,
) -> Vec<Task> {
    new_texts
        .iter()
        .map(|text| {
            let text = text.as_ref();
            match find_match(text, existing) {
                Some(matched) => Task {
                    id: matched.id.clone(),
                    text: text.to_string(),
                    completed: matched.completed,
                },
                None => Task::new(id_gen.generate_id(), text),
            }
        })
        .collect()
}

/// Drops every task whose normalized text was already seen earlier in the
/// list. The earliest task wins, together with its `id` and `completed`.
#[must_use]
pub fn deduplicate(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::new();
    tasks
        .into_iter()
        .filter(|task| {
            let kept = seen.insert(normalize(&task.text));
            if !kept {
                debug!(id = %task.id, text = %task.text, "removing duplicate task");
            }
            kept
        })
        .collect()
}

/// Appends one fresh task per new text to `existing`, then deduplicates.
pub fn append<S: AsRef<str>>(
    new_texts: &[S],
    existing: &[Task],
    id_gen: &dyn IdGenerator,
) -> Vec<Task> {
    let mut combined = existing.to_vec();
    combined.extend(new_texts.iter().map(|text| Task::new(id_gen.generate_id(), text.as_ref())));
    deduplicate(combined)
}

/// Merges the new texts against `existing`, then deduplicates.
///
/// Two different texts can match the same stored task; the first keeps its
/// id and every later one is issued a fresh id so ids stay unique.
pub fn replace<S: AsRef<str>>(
    new_texts: &[S],
    existing: &[Task],
    id_gen: &dyn IdGenerator,
) -> Vec<Task> {
    let mut tasks = deduplicate(merge(new_texts, existing, id_gen));
    let mut used = HashSet::new();
    for task in &mut tasks {
        if !used.insert(task.id.clone()) {
            task.id = id_gen.generate_id();
            used.insert(task.id.clone());
        }
    }
    tasks
}

/// Combines a new extraction with the stored list under `policy`.
pub fn reconcile<S: AsRef<str>>(
    policy: AccumulationPolicy,
    new_texts: &[S],
    existing: &[Task],
    id_gen: &dyn IdGenerator,
) -> Vec<Task> {
    match policy {
        AccumulationPolicy::Append => append(new_texts, existing, id_gen),
        AccumulationPolicy::Replace => replace(new_texts, existing, id_gen),
    }
}
