use std::time::Instant;

use crate::{
    assignment::Assignment,
    consistency::{ac3, enforce_node_consistency},
    domain::Domains,
    error::FillError,
    ngram::{bigrams, Bigrams},
    order::{order_domain_values, select_unassigned_variable},
    parse::Variable,
    puzzle::Puzzle,
};

use super::{FillConfig, Filler, Statistics};

/// Depth-first search over assignments with MRV variable selection, least
/// constraining value ordering and, optionally, arc consistency maintained
/// after every tentative assignment.
#[derive(Debug, Clone, Default)]
pub struct BacktrackingFiller {
    config: FillConfig,
    statistics: Statistics,
}

impl BacktrackingFiller {
    pub fn new(config: FillConfig) -> BacktrackingFiller {
        BacktrackingFiller {
            config,
            statistics: Statistics::default(),
        }
    }

    pub fn statistics(&self) -> Statistics {
        self.statistics
    }
}

impl Filler for BacktrackingFiller {
    fn fill(&mut self, puzzle: &Puzzle) -> Result<Assignment, FillError> {
        let start = Instant::now();
        self.statistics = Statistics::default();

        let mut domains = Domains::new(puzzle);
        enforce_node_consistency(puzzle, &mut domains);
        match ac3(puzzle, &mut domains, None) {
            Ok(revisions) => self.statistics.revisions += revisions,
            Err(wipeout) => {
                log::info!("no solution: no word fits {}", wipeout.variable);
                return Err(FillError::Unsatisfiable);
            }
        }
        domains.commit();

        let mut search = Search {
            puzzle,
            domains,
            bigrams: bigrams(puzzle.words()),
            config: self.config,
            statistics: self.statistics,
            start,
        };
        let mut assignment = Assignment::default();
        let result = search.backtrack(&mut assignment);
        self.statistics = search.statistics;

        log::info!(
            "search finished in {}ms: {} steps, {} backtracks, {} revisions",
            start.elapsed().as_millis(),
            self.statistics.steps,
            self.statistics.backtracks,
            self.statistics.revisions
        );

        match result {
            Ok(true) => Ok(assignment),
            Ok(false) => Err(FillError::Unsatisfiable),
            Err(err) => Err(err),
        }
    }
}

struct Search<'p> {
    puzzle: &'p Puzzle,
    domains: Domains,
    bigrams: Bigrams,
    config: FillConfig,
    statistics: Statistics,
    start: Instant,
}

impl Search<'_> {
    /// Extends `assignment` to a complete one. `Ok(false)` means this branch
    /// has no solution and `assignment` is as it was on entry.
    fn backtrack(&mut self, assignment: &mut Assignment) -> Result<bool, FillError> {
        let variable = match select_unassigned_variable(self.puzzle, &self.domains, assignment) {
            Some(variable) => variable,
            None => return Ok(assignment.is_consistent(self.puzzle)),
        };

        for word in order_domain_values(self.puzzle, &self.domains, &variable, &self.bigrams) {
            self.step()?;

            assignment.assign(variable, word.clone());
            if assignment.is_consistent(self.puzzle) {
                let checkpoint = self.domains.checkpoint();
                if self.propagate(&variable, &word) && self.backtrack(assignment)? {
                    return Ok(true);
                }
                self.domains.restore(checkpoint);
            }
            assignment.unassign(&variable);
            self.statistics.backtracks += 1;
        }

        Ok(false)
    }

    /// Narrows `variable` to `word` and restores arc consistency around it.
    /// Returns false when some domain runs dry.
    fn propagate(&mut self, variable: &Variable, word: &str) -> bool {
        if !self.config.forward_checking {
            return true;
        }

        self.domains.retain(variable, |candidate| candidate == word);
        let arcs: Vec<(Variable, Variable)> = self
            .puzzle
            .neighbors(variable)
            .iter()
            .map(|neighbor| (*neighbor, *variable))
            .collect();

        match ac3(self.puzzle, &mut self.domains, Some(arcs)) {
            Ok(revisions) => {
                self.statistics.revisions += revisions;
                true
            }
            Err(_) => false,
        }
    }

    fn step(&mut self) -> Result<(), FillError> {
        if let Some(limit) = self.config.step_limit {
            if self.statistics.steps >= limit {
                log::info!("gave up after {} steps", limit);
                return Err(FillError::BudgetExhausted { steps: limit });
            }
        }
        self.statistics.steps += 1;

        if self.statistics.steps % 10_000 == 0 {
            log::debug!(
                "throughput: {} steps/ms",
                self.statistics.steps as f32 / self.start.elapsed().as_millis().max(1) as f32
            );
        }
        Ok(())
    }
}
