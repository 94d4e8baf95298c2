//! Lenient matching of freshly extracted text against stored tasks.

use super::model::Task;
use super::normalize::normalize;

/// Finds the stored task that `new_text` most likely refers to.
///
/// Candidates are scanned in order and the first one whose normalized text
/// equals, contains, or is contained in the normalized `new_text` wins.
/// Containment trades precision for recall: a model that rephrases
/// "buy milk" as "buy milk and eggs for breakfast" still lands on the same
/// task, while a very short text such as "call" will match eagerly.
#[must_use]
pub fn find_match<'a>(new_text: &str, candidates: &'a [Task]) -> Option<&'a Task> {
    let new_norm = normalize(new_text);
    candidates.iter().find(|candidate| {
        let old_norm = normalize(&candidate.text);
        old_norm == new_norm || old_norm.contains(&new_norm) || new_norm.contains(&old_norm)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, text: &str) -> Task {
        Task::new(id, text)
    }

    #[test]
    fn exact_normalized_match() {
        let tasks = vec![task("a", "Call mom!")];
        let found = find_match("call   MOM", &tasks).map(|t| t.id.as_str());
        assert_eq!(found, Some("a"));
    }

    #[test]
    fn new_text_containing_old_matches() {
        let tasks = vec![task("a", "Buy milk")];
        let found = find_match("Buy milk and eggs for breakfast", &tasks);
        assert_eq!(found.map(|t| t.id.as_str()), Some("a"));
    }

    #[test]
    fn old_text_containing_new_matches() {
        let tasks = vec![task("a", "Email the quarterly report")];
        let found = find_match("quarterly report", &tasks);
        assert_eq!(found.map(|t| t.id.as_str()), Some("a"));
    }

    #[test]
    fn no_relation_returns_none() {
        let tasks = vec![task("a", "Buy milk"), task("b", "Walk the dog")];
        assert!(find_match("Book dentist appointment", &tasks).is_none());
    }

    #[test]
    fn empty_candidates_return_none() {
        assert!(find_match("anything", &[]).is_none());
    }

    #[test]
    fn first_candidate_in_order_wins() {
        let tasks = vec![task("a", "call"), task("b", "Call the plumber")];
        let found = find_match("Call the plumber", &tasks);
        // "call" is contained in the new text and comes first.
        assert_eq!(found.map(|t| t.id.as_str()), Some("a"));
    }

    #[test]
    fn short_generic_text_over_matches() {
        let tasks = vec![task("a", "Call the landlord about the heater")];
        let found = find_match("Call", &tasks);
        assert_eq!(found.map(|t| t.id.as_str()), Some("a"));
    }

    #[test]
    fn empty_normalized_text_matches_first_candidate() {
        let tasks = vec![task("a", "Buy milk"), task("b", "Walk the dog")];
        let found = find_match("!!!", &tasks);
        assert_eq!(found.map(|t| t.id.as_str()), Some("a"));
    }
}
