//! Canonical comparison keys for task text.

/// Returns the comparison key for `text`.
///
/// The key is lowercase, keeps only ASCII word characters (`[a-z0-9_]`) and
/// whitespace, and has every whitespace run collapsed to one space with no
/// leading or trailing space. It is used for comparison only and is never
/// stored or displayed.
///
/// ```
/// assert_eq!(axis::task::normalize("Buy Milk!"), "buy milk");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Buy Milk!"), "buy milk");
    }

    #[test]
    fn collapses_and_trims_whitespace() {
        assert_eq!(normalize("  multiple   spaces  "), "multiple spaces");
        assert_eq!(normalize("tabs\tand\nnewlines"), "tabs and newlines");
    }

    #[test]
    fn empty_and_punctuation_only_inputs_are_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("?!... ---"), "");
    }

    #[test]
    fn punctuation_next_to_edges_leaves_no_space() {
        assert_eq!(normalize("hi !"), "hi");
        assert_eq!(normalize("- call the bank"), "call the bank");
    }

    #[test]
    fn keeps_digits_and_underscores() {
        assert_eq!(normalize("Ship v2_final by 5pm."), "ship v2_final by 5pm");
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(normalize("Café run"), "caf run");
    }

    #[test]
    fn is_idempotent() {
        let inputs = [
            "Buy Milk!",
            "  multiple   spaces  ",
            "hi !",
            "Email the report to Alice, then lunch.",
            "",
            "  ¿Qué?  ",
            "a\u{00a0}b",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }
}
