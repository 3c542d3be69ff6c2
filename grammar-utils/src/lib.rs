pub mod error;
pub mod inversion;
pub mod keywords;
pub mod point_of_view;
pub mod question;
pub mod reply;
pub mod text_cleanup;
pub mod word_search;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub use error::GrammarError;
pub use inversion::{
    PivotVerbFinder, VerbFinder, invert_point_of_view, invert_point_of_view_with, swap_pronouns,
};
pub use keywords::MatchMode;
pub use point_of_view::{Number, Person, PointOfView};
pub use question::is_question;
pub use reply::reply;
pub use text_cleanup::remove_contractions;
pub use word_search::{contains_word, word_index, word_index_from};

/// Everything the toolkit can tell about a single statement.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
    tsify::Tsify,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct StatementAnalysis {
    pub statement: String,
    /// The statement with contractions expanded; everything below is computed on it.
    pub expanded: String,
    pub is_question: bool,
    pub modal_auxiliary: Option<String>,
    pub question_word: Option<String>,
    pub subject_pronoun: Option<String>,
    pub object_pronoun: Option<String>,
    pub be_verb: Option<String>,
    /// `None` when the statement has no single pivot verb.
    pub inverted: Option<Vec<String>>,
    /// The conversational reply, when some reply template fits.
    pub reply: Option<String>,
}

/// Expands contractions, then runs every check, the inversion and the reply
/// templates.
///
/// Word lookups are made on the lowercase statement since the lexical
/// tables are lowercase.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn analyze_statement(statement: &str) -> StatementAnalysis {
    let expanded = remove_contractions(statement);
    let lowercase = expanded.to_lowercase();

    let inverted = match invert_point_of_view(&expanded) {
        Ok(words) => Some(words),
        Err(e) => {
            log::debug!("Not inverting statement: {e}");
            None
        }
    };

    StatementAnalysis {
        statement: statement.to_string(),
        is_question: is_question(&expanded),
        modal_auxiliary: keywords::modal_auxiliary(&lowercase).map(str::to_string),
        question_word: keywords::question_word(&lowercase).map(str::to_string),
        subject_pronoun: keywords::subject_pronoun(&lowercase).map(str::to_string),
        object_pronoun: keywords::object_pronoun(&lowercase).map(str::to_string),
        be_verb: keywords::be_verb(&lowercase).map(str::to_string),
        inverted,
        reply: reply(statement),
        expanded,
    }
}
