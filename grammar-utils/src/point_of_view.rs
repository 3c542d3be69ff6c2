//! Static English grammar data: the points of view, modal auxiliaries and
//! question words, plus the lookup tables derived from them.
//!
//! Every table here is built once on first use and never mutated afterwards,
//! so lookups are safe from any thread.

use std::sync::LazyLock;

use indexmap::IndexSet;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Helper verbs that can act as the pivot of a statement.
pub const MODAL_AUXILIARIES: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would",
];

/// Words that mark a statement as a question on their own.
pub const QUESTION_WORDS: &[&str] = &["who", "what", "when", "where", "how", "which"];

#[derive(
    Copy,
    Clone,
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display(style = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Person {
    First,
    Second,
    Third,
}

#[derive(
    Copy,
    Clone,
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display(style = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Number {
    Singular,
    Plural,
}

/// A grammatical person and number, bundled with the words English uses for it.
///
/// `SecondPlural` is spelled exactly like `SecondSingular`; English does not
/// distinguish them.
#[derive(
    Copy,
    Clone,
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PointOfView {
    FirstSingular,
    FirstPlural,
    SecondSingular,
    SecondPlural,
    ThirdMasculineSingular,
    ThirdFeminineSingular,
    ThirdNeuterSingular,
    ThirdPlural,
}

impl PointOfView {
    /// All points of view in canonical order. Derived sets iterate in this order.
    pub const ALL: [PointOfView; 8] = [
        PointOfView::FirstSingular,
        PointOfView::FirstPlural,
        PointOfView::SecondSingular,
        PointOfView::SecondPlural,
        PointOfView::ThirdMasculineSingular,
        PointOfView::ThirdFeminineSingular,
        PointOfView::ThirdNeuterSingular,
        PointOfView::ThirdPlural,
    ];

    pub fn subject_pronoun(&self) -> &'static str {
        match self {
            PointOfView::FirstSingular => "i",
            PointOfView::FirstPlural => "we",
            PointOfView::SecondSingular | PointOfView::SecondPlural => "you",
            PointOfView::ThirdMasculineSingular => "he",
            PointOfView::ThirdFeminineSingular => "she",
            PointOfView::ThirdNeuterSingular => "it",
            PointOfView::ThirdPlural => "they",
        }
    }

    pub fn object_pronoun(&self) -> &'static str {
        match self {
            PointOfView::FirstSingular => "me",
            PointOfView::FirstPlural => "us",
            PointOfView::SecondSingular | PointOfView::SecondPlural => "you",
            PointOfView::ThirdMasculineSingular => "him",
            PointOfView::ThirdFeminineSingular => "her",
            PointOfView::ThirdNeuterSingular => "it",
            PointOfView::ThirdPlural => "them",
        }
    }

    /// Present tense of "to be" agreeing with this point of view.
    pub fn be_conjugation(&self) -> &'static str {
        match self {
            PointOfView::FirstSingular => "am",
            PointOfView::ThirdMasculineSingular
            | PointOfView::ThirdFeminineSingular
            | PointOfView::ThirdNeuterSingular => "is",
            PointOfView::FirstPlural
            | PointOfView::SecondSingular
            | PointOfView::SecondPlural
            | PointOfView::ThirdPlural => "are",
        }
    }

    /// Suffix a regular present-tense verb takes for this point of view.
    pub fn standard_conjugation(&self) -> &'static str {
        match self {
            PointOfView::ThirdMasculineSingular
            | PointOfView::ThirdFeminineSingular
            | PointOfView::ThirdNeuterSingular => "s",
            _ => "",
        }
    }

    pub fn person(&self) -> Person {
        match self {
            PointOfView::FirstSingular | PointOfView::FirstPlural => Person::First,
            PointOfView::SecondSingular | PointOfView::SecondPlural => Person::Second,
            _ => Person::Third,
        }
    }

    pub fn number(&self) -> Number {
        match self {
            PointOfView::FirstPlural | PointOfView::SecondPlural | PointOfView::ThirdPlural => {
                Number::Plural
            }
            _ => Number::Singular,
        }
    }

    /// Conjugates a regular verb in the present tense, e.g. "run" -> "runs".
    pub fn conjugate(&self, verb: &str) -> String {
        format!("{verb}{}", self.standard_conjugation())
    }

    /// Swaps the speaker and the listener.
    ///
    /// Second person plural has no spelling of its own, so it maps back to
    /// first person singular rather than first person plural. Third person
    /// is unchanged.
    pub fn inverted(&self) -> PointOfView {
        match self {
            PointOfView::FirstSingular => PointOfView::SecondSingular,
            PointOfView::FirstPlural => PointOfView::SecondPlural,
            PointOfView::SecondSingular | PointOfView::SecondPlural => PointOfView::FirstSingular,
            other => *other,
        }
    }

    /// Looks up the point of view whose subject pronoun is `word` (lowercase).
    /// "you" resolves to `SecondSingular`.
    pub fn from_subject_pronoun(word: &str) -> Option<PointOfView> {
        TABLES.by_subject_pronoun.get(word).copied()
    }

    /// Looks up the point of view whose object pronoun is `word` (lowercase).
    pub fn from_object_pronoun(word: &str) -> Option<PointOfView> {
        TABLES.by_object_pronoun.get(word).copied()
    }

    /// Every point of view conjugating "to be" as `word`, in canonical order.
    pub fn with_be_conjugation(word: &str) -> &'static [PointOfView] {
        TABLES
            .by_be_conjugation
            .get(word)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

struct Tables {
    be_conjugations: IndexSet<&'static str>,
    pivot_verbs: IndexSet<&'static str>,
    subject_pronouns: IndexSet<&'static str>,
    object_pronouns: IndexSet<&'static str>,
    by_subject_pronoun: FxHashMap<&'static str, PointOfView>,
    by_object_pronoun: FxHashMap<&'static str, PointOfView>,
    by_be_conjugation: FxHashMap<&'static str, Vec<PointOfView>>,
}

impl Tables {
    fn build() -> Self {
        let mut tables = Tables {
            be_conjugations: IndexSet::new(),
            pivot_verbs: IndexSet::new(),
            subject_pronouns: IndexSet::new(),
            object_pronouns: IndexSet::new(),
            by_subject_pronoun: FxHashMap::default(),
            by_object_pronoun: FxHashMap::default(),
            by_be_conjugation: FxHashMap::default(),
        };

        for pov in PointOfView::ALL {
            tables.be_conjugations.insert(pov.be_conjugation());
            tables.subject_pronouns.insert(pov.subject_pronoun());
            tables.object_pronouns.insert(pov.object_pronoun());

            // first in canonical order wins, so "you" stays second singular
            tables
                .by_subject_pronoun
                .entry(pov.subject_pronoun())
                .or_insert(pov);
            tables
                .by_object_pronoun
                .entry(pov.object_pronoun())
                .or_insert(pov);
            tables
                .by_be_conjugation
                .entry(pov.be_conjugation())
                .or_default()
                .push(pov);
        }

        tables.pivot_verbs = tables
            .be_conjugations
            .iter()
            .chain(MODAL_AUXILIARIES)
            .copied()
            .collect();

        tables
    }
}

static TABLES: LazyLock<Tables> = LazyLock::new(Tables::build);

/// All conjugations of "to be": am, are, is.
pub fn be_conjugations() -> &'static IndexSet<&'static str> {
    &TABLES.be_conjugations
}

/// Words a statement can be split around: the be conjugations followed by
/// the modal auxiliaries.
pub fn pivot_verbs() -> &'static IndexSet<&'static str> {
    &TABLES.pivot_verbs
}

pub fn subject_pronouns() -> &'static IndexSet<&'static str> {
    &TABLES.subject_pronouns
}

pub fn object_pronouns() -> &'static IndexSet<&'static str> {
    &TABLES.object_pronouns
}
