use thiserror::Error;

use crate::parse::Variable;

/// Reasons a puzzle description is rejected before any solving starts.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("grid contains no cells")]
    EmptyGrid,
    #[error("puzzle has no variables")]
    NoVariables,
    #[error("variable {0} has zero length")]
    ZeroLengthVariable(Variable),
    #[error("variable {0} runs off the end of the coordinate range")]
    VariableOutOfRange(Variable),
    #[error("variable {0} appears more than once")]
    DuplicateVariable(Variable),
    #[error("overlap refers to unknown variable {0}")]
    UnknownVariable(Variable),
    #[error("variable {0} cannot overlap itself")]
    SelfOverlap(Variable),
    #[error("overlap ({index_a}, {index_b}) is out of bounds for {a} and {b}")]
    OverlapOutOfBounds {
        a: Variable,
        b: Variable,
        index_a: usize,
        index_b: usize,
    },
    #[error("word list is empty")]
    EmptyWordList,
    #[error("word {0:?} contains non-ASCII characters")]
    NonAsciiWord(String),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse word list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcomes of a solve attempt that did not produce an assignment.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum FillError {
    #[error("no solution")]
    Unsatisfiable,
    #[error("no solution found within {steps} steps")]
    BudgetExhausted { steps: u64 },
}
