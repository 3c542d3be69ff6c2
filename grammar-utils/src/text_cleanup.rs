//! Contraction expansion for English statements.
//!
//! Expanding contractions first makes "to be" verbs and modals visible as
//! separate words, which the lookups and the inverter rely on.

/// Replacements applied in order. Irregular negations come before the
/// generic `n't` rule so that "can't" does not turn into "ca not".
const CONTRACTIONS: &[(&str, &str)] = &[
    ("won't", "will not"),
    ("Won't", "Will not"),
    ("can't", "cannot"),
    ("Can't", "Cannot"),
    ("n't", " not"),
    ("can not", "cannot"),
    ("'ll", " will"),
    ("'s", " is"),
    ("'re", " are"),
    ("'m", " am"),
    ("'ve", " have"),
];

/// Returns a copy of `statement` with its contractions expanded.
///
/// Every `'s` is read as "is", possessives included.
pub fn remove_contractions(statement: &str) -> String {
    // typographic apostrophes (U+2018, U+2019, U+02BC) become ASCII
    let mut result: String = statement
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{02BC}' => '\'',
            _ => c,
        })
        .collect();

    for (contraction, expansion) in CONTRACTIONS {
        result = result.replace(contraction, expansion);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_contractions_mixed() {
        assert_eq!(
            remove_contractions("I can't go, it's fine"),
            "I cannot go, it is fine"
        );
    }

    #[test]
    fn test_remove_contractions_negations() {
        assert_eq!(remove_contractions("I don't know"), "I do not know");
        assert_eq!(remove_contractions("you aren't late"), "you are not late");
        assert_eq!(remove_contractions("we won't stop"), "we will not stop");
        assert_eq!(remove_contractions("Can't stop"), "Cannot stop");
        assert_eq!(remove_contractions("I can not dance"), "I cannot dance");
    }

    #[test]
    fn test_remove_contractions_auxiliaries() {
        assert_eq!(remove_contractions("you'll see"), "you will see");
        assert_eq!(remove_contractions("they're here"), "they are here");
        assert_eq!(remove_contractions("I'm happy"), "I am happy");
        assert_eq!(remove_contractions("we've won"), "we have won");
    }

    #[test]
    fn test_remove_contractions_typographic_apostrophe() {
        assert_eq!(remove_contractions("it\u{2019}s late"), "it is late");
    }

    #[test]
    fn test_remove_contractions_no_change() {
        assert_eq!(remove_contractions("plain words only"), "plain words only");
        assert_eq!(remove_contractions(""), "");
    }
}
