//! Conversational replies that turn a statement back on its speaker, e.g.
//! "I'm sad" becomes "Why are you sad?".
//!
//! Each template only fires when the statement has its shape and returns
//! `None` otherwise. Templates work on the lowercase statement with
//! contractions expanded and final punctuation removed. [`reply`] tries them
//! in a fixed order, so the same statement always gets the same reply.

use crate::inversion::{invert_point_of_view, swap_pronouns};
use crate::keywords::{be_verb, modal_auxiliary, subject_pronoun};
use crate::point_of_view::{be_conjugations, subject_pronouns};
use crate::question::is_question;
use crate::text_cleanup::remove_contractions;
use crate::word_search::{word_after, word_index, word_index_from};

/// The first template that fits `statement`, if any.
pub fn reply(statement: &str) -> Option<String> {
    subject_be_verb_reply(statement)
        .or_else(|| be_verb_subject_reply(statement))
        .or_else(|| i_want_to_reply(statement))
        .or_else(|| i_want_reply(statement))
        .or_else(|| modal_auxiliary_reply(statement))
        .or_else(|| i_you_reply(statement))
        .or_else(|| you_me_reply(statement))
        .or_else(|| you_like_reply(statement))
}

/// "I am sad" -> "Why are you sad?"
pub fn subject_be_verb_reply(statement: &str) -> Option<String> {
    let statement = normalize(statement);
    let subject = subject_pronoun(&statement)?;
    let be = word_after(&statement, subject)?;
    if !be_conjugations().contains(be) {
        return None;
    }
    let rest = rest_after(&statement, be, word_index(&statement, subject)? + subject.len())?;

    let inverted = inverted_words(&format!("{subject} {be} {rest}"))?;
    let rest = inverted[2..].join(" ");
    Some(format!("Why {} {}{}?", inverted[1], inverted[0], leading_space(&rest)))
}

/// "Are you happy?" -> "I don't know if I am happy."
pub fn be_verb_subject_reply(statement: &str) -> Option<String> {
    let statement = normalize(statement);
    let be = be_verb(&statement)?;
    let subject = word_after(&statement, be)?;
    if !subject_pronouns().contains(subject) {
        return None;
    }
    let rest = rest_after(&statement, subject, word_index(&statement, be)?)?;

    let inverted = inverted_words(&format!("{subject} {be} {rest}"))?;
    Some(format!("I don't know if {}.", inverted.join(" ")))
}

/// "Can you help me?" -> "I don't know, can I help you?"
pub fn modal_auxiliary_reply(statement: &str) -> Option<String> {
    let statement = normalize(statement);
    if !is_question(&statement) {
        return None;
    }
    let modal = modal_auxiliary(&statement)?;
    let subject = word_after(&statement, modal)?;
    if !subject_pronouns().contains(subject) {
        return None;
    }

    let inverted = inverted_words(&statement[word_index(&statement, modal)?..])?;
    Some(format!("I don't know, {}?", inverted.join(" ")))
}

/// "I want to see you" -> "Why do you want to see me?"
pub fn i_want_to_reply(statement: &str) -> Option<String> {
    let statement = normalize(statement);
    let rest = rest_after(&statement, "i want to", 0)?;
    if rest.is_empty() {
        return None;
    }
    Some(format!("Why do you want to {}?", swap_pronouns(rest).join(" ")))
}

/// "I want a dog" -> "Would you really be happy if you had a dog?"
pub fn i_want_reply(statement: &str) -> Option<String> {
    let statement = normalize(statement);
    let rest = rest_after(&statement, "i want", 0)?;
    if rest.is_empty() || word_index(rest, "to") == Some(0) {
        return None;
    }
    Some(format!(
        "Would you really be happy if you had {}?",
        swap_pronouns(rest).join(" ")
    ))
}

/// "You gave me a book" -> "What makes you think that I gave you a book?"
pub fn you_me_reply(statement: &str) -> Option<String> {
    let statement = normalize(statement);
    let (middle, end) = between(&statement, "you", "me")?;
    let end = swap_pronouns(end).join(" ");
    Some(format!(
        "What makes you think that I {} you{}?",
        swap_pronouns(middle).join(" "),
        leading_space(&end)
    ))
}

/// "I love you" -> "Why do you love me?"
pub fn i_you_reply(statement: &str) -> Option<String> {
    let statement = normalize(statement);
    let (middle, _) = between(&statement, "i", "you")?;
    Some(format!("Why do you {} me?", swap_pronouns(middle).join(" ")))
}

/// "Do you like pizza?" -> "I'm not sure if I like pizza."
pub fn you_like_reply(statement: &str) -> Option<String> {
    let statement = normalize(statement);
    let you = word_index(&statement, "you")?;
    let rest = rest_after(&statement, "like", you + "you".len())?;
    if rest.is_empty() {
        return None;
    }
    Some(format!("I'm not sure if I like {}.", swap_pronouns(rest).join(" ")))
}

fn normalize(statement: &str) -> String {
    let lowercase = remove_contractions(statement.trim()).to_lowercase();
    lowercase.trim_end_matches(['?', '.', '!']).trim_end().to_string()
}

/// The trimmed text after the first whole-word `word` at or past `start`.
fn rest_after<'a>(statement: &'a str, word: &str, start: usize) -> Option<&'a str> {
    let position = word_index_from(statement, word, start)?;
    Some(statement[position + word.len()..].trim())
}

/// The non-empty text between `first` and a later `second`, and the text
/// after `second`.
fn between<'a>(statement: &'a str, first: &str, second: &str) -> Option<(&'a str, &'a str)> {
    let first_end = word_index(statement, first)? + first.len();
    let second_at = word_index_from(statement, second, first_end)?;
    let middle = statement[first_end..second_at].trim();
    if middle.is_empty() {
        return None;
    }
    Some((middle, statement[second_at + second.len()..].trim()))
}

fn inverted_words(clause: &str) -> Option<Vec<String>> {
    invert_point_of_view(clause)
        .inspect_err(|e| log::debug!("No reply for {clause:?}: {e}"))
        .ok()
}

fn leading_space(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!(" {text}")
    }
}
