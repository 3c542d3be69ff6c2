//! Decides whether a statement is phrased as a question.

use crate::keywords::contains_question_word;
use crate::point_of_view::{pivot_verbs, subject_pronouns};
use crate::word_search::words;

/// Whether the statement reads as a question. Any one of these is enough:
/// - a be verb or modal auxiliary directly followed by a subject pronoun ("are you", "can I")
/// - a question word ("what", "where", ...)
/// - a question mark
///
/// Capitalization is ignored.
pub fn is_question(statement: &str) -> bool {
    let lowercase = statement.to_lowercase();
    has_verb_before_subject(&lowercase)
        || contains_question_word(&lowercase)
        || lowercase.contains('?')
}

/// Whether a be verb or modal auxiliary is directly followed by a subject
/// pronoun anywhere in the (lowercase) statement.
pub fn has_verb_before_subject(statement: &str) -> bool {
    let tokens: Vec<&str> = words(statement).collect();
    tokens.windows(2).any(|pair| {
        let (verb, pronoun) = (pair[0], pair[1]);
        pivot_verbs().contains(verb) && subject_pronouns().contains(pronoun)
    })
}
