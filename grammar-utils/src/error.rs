/// Ways a statement can fail the inverter's preconditions.
///
/// Lookups that simply find nothing return `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("No be verb or modal auxiliary to pivot on in {statement:?}")]
    NoPivotVerb { statement: String },

    #[error("Pivot verb {verb:?} is not a whole word of {statement:?}")]
    PivotNotInStatement { verb: String, statement: String },

    #[error("Pivot verb {verb:?} occurs more than once in {statement:?}")]
    AmbiguousPivotVerb { verb: String, statement: String },
}
