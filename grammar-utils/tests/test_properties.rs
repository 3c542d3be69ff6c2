use grammar_utils::keywords::modal_auxiliary;
use grammar_utils::word_search::words;
use grammar_utils::{
    contains_word, invert_point_of_view, is_question, remove_contractions, reply, word_index,
};

#[test]
fn test_word_index_and_contains_word_agree() {
    let statements = [
        "I cannot dance",
        "I can not dance",
        "you",
        "youth",
        "Are you happy?",
        "a can of cans, canned",
        "",
    ];
    let targets = ["can", "you", "dance", "cans", "happy", "a"];

    for statement in statements {
        for word in targets {
            assert_eq!(
                word_index(statement, word).is_some(),
                contains_word(statement, word),
                "{word:?} in {statement:?}"
            );
        }
    }
}

#[test]
fn test_substring_is_not_a_word() {
    assert_eq!(word_index("I cannot dance", "can"), None);
    assert_eq!(word_index("I can not dance", "can"), Some(2));
    assert!(contains_word("you", "you"));
    assert!(!contains_word("youth", "you"));
}

#[test]
fn test_question_classification() {
    assert!(is_question("Are you happy?"));
    assert!(!is_question("You are happy."));
}

#[test]
fn test_contraction_expansion() {
    assert_eq!(
        remove_contractions("I can't go, it's fine"),
        "I cannot go, it is fine"
    );
}

#[test]
fn test_inversion_statement_and_question() {
    assert_eq!(
        invert_point_of_view("I am happy").unwrap(),
        vec!["you", "are", "happy"]
    );
    assert_eq!(
        invert_point_of_view("Are you happy").unwrap(),
        vec!["am", "I", "happy"]
    );
}

#[test]
fn test_double_inversion_restores_pronouns() {
    for (statement, pronoun) in [
        ("I am happy", "I"),
        ("you are late", "you"),
        ("Are you there", "you"),
        ("I can help you", "I"),
    ] {
        let once = invert_point_of_view(statement).unwrap().join(" ");
        let twice = invert_point_of_view(&once).unwrap();
        assert!(
            twice.iter().any(|word| word == pronoun),
            "{statement:?} -> {once:?} -> {twice:?}"
        );
    }
}

#[test]
fn test_first_plural_does_not_round_trip() {
    let once = invert_point_of_view("we are ready").unwrap().join(" ");
    assert_eq!(once, "you are ready");
    let twice = invert_point_of_view(&once).unwrap();
    // second plural is spelled like second singular, so "we" comes back as "I"
    assert!(!twice.iter().any(|word| word == "we"));
    assert_eq!(twice, vec!["I", "am", "ready"]);
}

#[test]
fn test_inversion_keeps_every_word() {
    for statement in [
        "I am happy",
        "Are you happy",
        "maybe you should call me later",
        "it is what it seems, for us",
    ] {
        let inverted = invert_point_of_view(statement).unwrap();
        assert_eq!(inverted.len(), words(statement).count(), "{statement:?}");
    }
}

#[test]
fn test_modal_lookup_is_deterministic() {
    let statement = "you would, and you could, and you should";
    let first = modal_auxiliary(statement);
    assert_eq!(first, Some("could"));
    for _ in 0..100 {
        assert_eq!(modal_auxiliary(statement), first);
    }
}

#[test]
fn test_noun_subject_is_not_question_order() {
    assert_eq!(
        invert_point_of_view("The problem is you").unwrap(),
        vec!["The", "problem", "is", "me"]
    );
    assert_eq!(
        invert_point_of_view("what are you doing").unwrap(),
        vec!["what", "am", "I", "doing"]
    );
}

#[test]
fn test_replies_turn_the_statement_around() {
    assert_eq!(reply("I'm tired.").as_deref(), Some("Why are you tired?"));
    assert_eq!(
        reply("Aren't you bored?").as_deref(),
        None,
        "\"are not you\" has no subject right after the be verb"
    );
    assert_eq!(
        reply("Would you call me?").as_deref(),
        Some("I don't know, would I call you?")
    );
}
