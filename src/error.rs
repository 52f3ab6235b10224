use thiserror::Error;

/// Input validation and numerical failures. Every variant is a deterministic property of the
/// caller's input, so none of them are worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("expected {expected} {what} (one per criterion) but found {found}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("impact {position} is {symbol:?}, impacts must be either + or -")]
    InvalidImpactSymbol { position: usize, symbol: String },

    #[error("weight {position} is {value:?}, weights must be finite non-negative numbers")]
    InvalidWeight { position: usize, value: String },

    #[error("row {row} column {column:?} holds {value:?}, criterion values must be numeric")]
    NonNumericCriterion {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row} has {found} fields but the header has {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("table has {found} columns, at least 3 are required (a label and 2 criteria)")]
    InsufficientColumns { found: usize },

    #[error("table has no alternatives")]
    NoAlternatives,

    #[error("criterion column {column:?} is all zeros and cannot be normalized")]
    DegenerateColumn { column: String },

    #[error("alternative {row:?} coincides with both ideal points, its score is undefined")]
    DegenerateRow { row: String },
}
