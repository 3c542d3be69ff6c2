//! Point-of-view inversion: turns "I am happy" into "you are happy" and
//! "are you happy" into "am I happy".
//!
//! The statement is split around a single pivot verb. Words before the pivot
//! are remapped as subjects, words after it as objects, and every "to be"
//! verb is then made to agree with the subject it ends up next to.

use crate::error::GrammarError;
use crate::point_of_view::{
    PointOfView, QUESTION_WORDS, be_conjugations, pivot_verbs, subject_pronouns,
};
use crate::word_search::{word_after, word_before, word_index, words};

/// Picks the verb a statement is split around.
///
/// The returned slice must be a whole word of `statement`.
pub trait VerbFinder {
    fn find_verb<'a>(&self, statement: &'a str) -> Option<&'a str>;
}

/// Pivots on the first be verb or modal auxiliary in the statement,
/// regardless of capitalization.
#[derive(Copy, Clone, Debug, Default)]
pub struct PivotVerbFinder;

impl VerbFinder for PivotVerbFinder {
    fn find_verb<'a>(&self, statement: &'a str) -> Option<&'a str> {
        words(statement).find(|word| pivot_verbs().contains(word.to_lowercase().as_str()))
    }
}

/// Swaps first and second person in `statement` using [`PivotVerbFinder`].
pub fn invert_point_of_view(statement: &str) -> Result<Vec<String>, GrammarError> {
    invert_point_of_view_with(statement, &PivotVerbFinder)
}

/// Swaps first and second person in `statement`, returning its words in order.
///
/// Fails when `finder` finds no pivot, or when the pivot is missing from the
/// statement or occurs in it more than once ("I am what I am"); such
/// statements have no single subject/predicate split.
pub fn invert_point_of_view_with<F>(
    statement: &str,
    finder: &F,
) -> Result<Vec<String>, GrammarError>
where
    F: VerbFinder + ?Sized,
{
    let verb = finder
        .find_verb(statement)
        .ok_or_else(|| GrammarError::NoPivotVerb {
            statement: statement.to_string(),
        })?;

    let position =
        word_index(statement, verb).ok_or_else(|| GrammarError::PivotNotInStatement {
            verb: verb.to_string(),
            statement: statement.to_string(),
        })?;
    let end = position + verb.len();
    if words(&statement[end..]).any(|word| word.eq_ignore_ascii_case(verb)) {
        return Err(GrammarError::AmbiguousPivotVerb {
            verb: verb.to_string(),
            statement: statement.to_string(),
        });
    }

    let subject: Vec<&str> = words(&statement[..position]).collect();
    let predicate: Vec<&str> = words(&statement[end..]).collect();
    log::debug!("pivot {verb:?} splits {statement:?} into {subject:?} / {predicate:?}");

    // "are you happy", "what are you doing": the subject follows the verb
    let subject_follows_verb = subject.iter().all(|word| is_question_word(word))
        && predicate.first().is_some_and(|word| is_subject_pronoun(word));

    let mut inverted = Vec::with_capacity(subject.len() + 1 + predicate.len());
    inverted.extend(subject.iter().map(|word| invert_subject(word)));
    inverted.push(verb.to_string());
    for (index, word) in predicate.iter().enumerate() {
        if index == 0 && subject_follows_verb {
            inverted.push(invert_subject(word));
        } else {
            inverted.push(invert_object(word));
        }
    }

    let pivot_index = subject.len();
    for (index, word) in inverted.iter_mut().enumerate() {
        if !be_conjugations().contains(word.to_lowercase().as_str()) {
            continue;
        }
        let subject_after = index == pivot_index && subject_follows_verb;
        if let Some(agreeing) = agreeing_be_verb(statement, word, subject_after) {
            log::trace!("be verb {word:?} becomes {agreeing:?}");
            *word = agreeing.to_string();
        }
    }

    Ok(inverted)
}

/// The conjugation `be_verb` needs once its subject has been swapped, if
/// the swap changes it.
///
/// The subject is the pronoun right before the verb in the original
/// statement. In question word order (`subject_after`) it is the pronoun
/// right after the verb instead.
fn agreeing_be_verb(statement: &str, be_verb: &str, subject_after: bool) -> Option<&'static str> {
    let neighbor = if subject_after {
        word_after(statement, be_verb)
    } else {
        word_before(statement, be_verb)
    };
    let subject = neighbor.and_then(subject_point_of_view)?;

    let inverted = subject.inverted();
    (inverted != subject).then(|| inverted.be_conjugation())
}

fn subject_point_of_view(word: &str) -> Option<PointOfView> {
    PointOfView::from_subject_pronoun(&word.to_lowercase())
}

/// Swaps first and second person in a fragment that has no pivot verb, such
/// as the tail of "I want to see you".
///
/// Pronouns that only exist as subjects ("I", "we") take the subject rule;
/// every other word takes the object rule, so "you" becomes "me".
pub fn swap_pronouns(fragment: &str) -> Vec<String> {
    words(fragment)
        .map(|word| {
            let lowercase = word.to_lowercase();
            if is_subject_pronoun(word) && PointOfView::from_object_pronoun(&lowercase).is_none() {
                invert_subject(word)
            } else {
                invert_object(word)
            }
        })
        .collect()
}

fn is_question_word(word: &str) -> bool {
    let lowercase = word.to_lowercase();
    QUESTION_WORDS.iter().any(|question_word| *question_word == lowercase)
}

fn is_subject_pronoun(word: &str) -> bool {
    subject_pronouns().contains(word.to_lowercase().as_str())
}

fn invert_subject(word: &str) -> String {
    match subject_point_of_view(word) {
        Some(pov) if pov.inverted() != pov => display_pronoun(pov.inverted().subject_pronoun()),
        _ => word.to_string(),
    }
}

fn invert_object(word: &str) -> String {
    match PointOfView::from_object_pronoun(&word.to_lowercase()) {
        Some(pov) if pov.inverted() != pov => display_pronoun(pov.inverted().object_pronoun()),
        _ => word.to_string(),
    }
}

fn display_pronoun(pronoun: &str) -> String {
    if pronoun == PointOfView::FirstSingular.subject_pronoun() {
        "I".to_string()
    } else {
        pronoun.to_string()
    }
}
