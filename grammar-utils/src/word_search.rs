//! Whole-word search over a statement.
//!
//! A match only counts when the characters on either side of it are not
//! alphabetic (or are the edge of the statement), so "can" is found in
//! "I can not go" but not in "I cannot go". Matching is case-sensitive.

/// Splits a statement into word tokens: runs of letters, digits and `_`.
pub fn words(statement: &str) -> impl DoubleEndedIterator<Item = &str> {
    statement
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|word| !word.is_empty())
}

/// Byte offset of the first whole-word occurrence of `word` in `statement`.
pub fn word_index(statement: &str, word: &str) -> Option<usize> {
    word_index_from(statement, word, 0)
}

/// Byte offset of the first whole-word occurrence of `word` at or after `start`.
///
/// Returns `None` when `start` is past the end of the statement or does not
/// fall on a character boundary.
pub fn word_index_from(statement: &str, word: &str, start: usize) -> Option<usize> {
    if word.is_empty() || start >= statement.len() {
        return None;
    }
    statement.get(start..)?;

    let mut cursor = start;
    while let Some(offset) = statement[cursor..].find(word) {
        let position = cursor + offset;
        let end = position + word.len();

        let before = statement[..position].chars().next_back();
        let after = statement[end..].chars().next();
        if !before.is_some_and(char::is_alphabetic) && !after.is_some_and(char::is_alphabetic) {
            return Some(position);
        }

        // embedded in a longer word, resume one character past the match start
        cursor = position + word.chars().next().map_or(1, char::len_utf8);
    }

    None
}

pub fn contains_word(statement: &str, word: &str) -> bool {
    word_index(statement, word).is_some()
}

/// The token right after the first whole-word occurrence of `word`.
pub fn word_after<'a>(statement: &'a str, word: &str) -> Option<&'a str> {
    let position = word_index(statement, word)?;
    words(&statement[position + word.len()..]).next()
}

/// The token right before the first whole-word occurrence of `word`.
pub fn word_before<'a>(statement: &'a str, word: &str) -> Option<&'a str> {
    let position = word_index(statement, word)?;
    words(&statement[..position]).next_back()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_discards_empty_tokens() {
        let tokens: Vec<_> = words("  Hello, world!  it's_fine 42 ").collect();
        assert_eq!(tokens, vec!["Hello", "world", "it", "s_fine", "42"]);
        assert_eq!(words("?!").count(), 0);
    }

    #[test]
    fn test_word_index_rejects_embedded_matches() {
        assert_eq!(word_index("I cannot dance", "can"), None);
        assert_eq!(word_index("I can not dance", "can"), Some(2));
        assert_eq!(word_index("scan the can", "can"), Some(9));
    }

    #[test]
    fn test_word_index_at_statement_edges() {
        assert_eq!(word_index("you", "you"), Some(0));
        assert_eq!(word_index("youth", "you"), None);
        assert_eq!(word_index("thank you", "you"), Some(6));
        assert_eq!(word_index("you, me", "you"), Some(0));
    }

    #[test]
    fn test_word_index_is_case_sensitive() {
        assert_eq!(word_index("Can you go", "can"), None);
        assert_eq!(word_index("Can you go", "Can"), Some(0));
    }

    #[test]
    fn test_word_index_from_respects_start() {
        let statement = "I am what I am";
        assert_eq!(word_index_from(statement, "am", 0), Some(2));
        assert_eq!(word_index_from(statement, "am", 3), Some(12));
        assert_eq!(word_index_from(statement, "am", 13), None);
        assert_eq!(word_index_from(statement, "am", statement.len()), None);
        assert_eq!(word_index_from(statement, "am", 100), None);
    }

    #[test]
    fn test_word_index_out_of_range_or_empty() {
        assert_eq!(word_index("", "you"), None);
        assert_eq!(word_index("you", ""), None);
        // 1 is inside the two-byte 'é'
        assert_eq!(word_index_from("é you", "you", 1), None);
    }

    #[test]
    fn test_word_index_many_embedded_repeats() {
        let statement = format!("{} can", "cancan ".repeat(10_000));
        assert_eq!(word_index(&statement, "can"), Some(statement.len() - 3));
    }

    #[test]
    fn test_digits_count_as_boundaries() {
        assert_eq!(word_index("item2go", "go"), Some(5));
    }

    #[test]
    fn test_neighbors() {
        assert_eq!(word_after("Are you happy?", "Are"), Some("you"));
        assert_eq!(word_before("I am happy", "am"), Some("I"));
        assert_eq!(word_before("I am happy", "I"), None);
        assert_eq!(word_after("I am happy", "happy"), None);
        assert_eq!(word_after("I am happy", "sad"), None);
        assert_eq!(word_after("well, I am... fine", "am"), Some("fine"));
    }

    #[test]
    fn test_contains_word_agrees_with_word_index() {
        for (statement, word) in [("you", "you"), ("youth", "you"), ("I cannot", "can")] {
            assert_eq!(
                contains_word(statement, word),
                word_index(statement, word).is_some()
            );
        }
        assert!(contains_word("you", "you"));
        assert!(!contains_word("youth", "you"));
    }
}
