//! Finds the first word of a fixed vocabulary that shows up in a statement.

use crate::point_of_view::{
    MODAL_AUXILIARIES, QUESTION_WORDS, be_conjugations, object_pronouns, subject_pronouns,
};
use crate::word_search::words;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// The candidate must equal a token of the statement.
    #[default]
    Exact,
    /// The candidate only needs to start some token of the statement.
    Prefix,
}

/// Returns the first candidate, in the candidates' own order, that matches a
/// token of `statement`.
pub fn first_matching_keyword<I>(
    statement: &str,
    candidates: I,
    mode: MatchMode,
) -> Option<&'static str>
where
    I: IntoIterator<Item = &'static str>,
{
    let tokens: Vec<&str> = words(statement).collect();

    candidates.into_iter().find(|candidate| match mode {
        MatchMode::Exact => tokens.contains(candidate),
        MatchMode::Prefix => tokens.iter().any(|token| token.starts_with(candidate)),
    })
}

pub fn modal_auxiliary(statement: &str) -> Option<&'static str> {
    first_matching_keyword(statement, MODAL_AUXILIARIES.iter().copied(), MatchMode::Exact)
}

pub fn contains_modal_auxiliary(statement: &str) -> bool {
    modal_auxiliary(statement).is_some()
}

pub fn question_word(statement: &str) -> Option<&'static str> {
    first_matching_keyword(statement, QUESTION_WORDS.iter().copied(), MatchMode::Exact)
}

pub fn contains_question_word(statement: &str) -> bool {
    question_word(statement).is_some()
}

pub fn subject_pronoun(statement: &str) -> Option<&'static str> {
    first_matching_keyword(statement, subject_pronouns().iter().copied(), MatchMode::Exact)
}

pub fn contains_subject_pronoun(statement: &str) -> bool {
    subject_pronoun(statement).is_some()
}

pub fn object_pronoun(statement: &str) -> Option<&'static str> {
    first_matching_keyword(statement, object_pronouns().iter().copied(), MatchMode::Exact)
}

pub fn contains_object_pronoun(statement: &str) -> bool {
    object_pronoun(statement).is_some()
}

pub fn be_verb(statement: &str) -> Option<&'static str> {
    first_matching_keyword(statement, be_conjugations().iter().copied(), MatchMode::Exact)
}

pub fn contains_be_verb(statement: &str) -> bool {
    be_verb(statement).is_some()
}
