//! Fills crossword grids by treating every slot as a variable whose domain is
//! the word list, pruning with node and arc consistency and then running a
//! backtracking search.

pub mod assignment;
pub mod consistency;
pub mod crossword;
pub mod domain;
pub mod error;
pub mod fill;
pub mod ngram;
pub mod order;
pub mod parse;
pub mod puzzle;
pub mod words;

pub use assignment::Assignment;
pub use crossword::{Crossword, Direction};
pub use error::{FillError, PuzzleError};
pub use fill::{backtrack::BacktrackingFiller, FillConfig, Filler};
pub use parse::Variable;
pub use puzzle::Puzzle;

pub(crate) use rustc_hash::{FxHashMap, FxHashSet};

/// Fills `puzzle` with the default configuration.
pub fn solve(puzzle: &Puzzle) -> Result<Assignment, FillError> {
    BacktrackingFiller::default().fill(puzzle)
}

#[cfg(test)]
mod tests {
    use crate::{solve, Crossword, FillError, Puzzle};

    #[test]
    fn solve_works() {
        let crossword = Crossword::new(include_str!("../data/structure0.txt")).unwrap();
        let words = crate::words::parse_words(include_str!("../data/words0.txt")).unwrap();
        let puzzle = Puzzle::from_crossword(crossword, words).unwrap();

        let assignment = solve(&puzzle).unwrap();

        assert!(assignment.is_complete(&puzzle));
        assert!(assignment.is_consistent(&puzzle));
    }

    #[test]
    fn solve_reports_no_solution() {
        let crossword = Crossword::new(include_str!("../data/structure0.txt")).unwrap();
        let puzzle = Puzzle::from_crossword(crossword, ["one", "two", "three"]).unwrap();

        assert_eq!(solve(&puzzle), Err(FillError::Unsatisfiable));
    }
}
