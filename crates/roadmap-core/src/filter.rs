//! Live text filtering for content cards.

/// Case-insensitive substring match of `query` against a card's visible
/// text. The empty query matches everything, so clearing the search box
/// restores all cards. Binary show/hide only; no ranking.
#[must_use]
pub fn matches(card_text: &str, query: &str) -> bool {
    card_text.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_all() {
        assert!(matches("Variables & Data Types", ""));
        assert!(matches("", ""));
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(matches("Exception Handling", "exception"));
        assert!(matches("exception handling", "EXCEPTION"));
        assert!(matches("Java 8 Features", "jAvA"));
    }

    #[test]
    fn substring_anywhere_in_text() {
        assert!(matches("Object-Oriented Programming", "oriented pro"));
    }

    #[test]
    fn non_matching_query_hides_card() {
        assert!(!matches("Collections Framework", "xyz-no-match"));
        assert!(!matches("", "anything"));
    }
}
