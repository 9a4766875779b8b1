use crate::{assignment::Assignment, error::FillError, puzzle::Puzzle};

pub mod backtrack;

pub trait Filler {
    fn fill(&mut self, puzzle: &Puzzle) -> Result<Assignment, FillError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillConfig {
    /// Re-run arc consistency from each tentatively assigned variable.
    pub forward_checking: bool,
    /// Give up after this many tentative assignments.
    pub step_limit: Option<u64>,
}

impl Default for FillConfig {
    fn default() -> FillConfig {
        FillConfig {
            forward_checking: true,
            step_limit: None,
        }
    }
}

/// Counters from the most recent fill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub steps: u64,
    pub backtracks: u64,
    pub revisions: u64,
}
