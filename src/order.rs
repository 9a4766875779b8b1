use crate::{
    assignment::Assignment,
    domain::Domains,
    ngram::{fillability, Bigrams},
    parse::Variable,
    puzzle::Puzzle,
    FxHashMap,
};
use core::cmp::Ordering;

#[derive(Eq, PartialEq, Debug)]
pub(crate) struct VariableScore {
    remaining: usize,
    degree: usize,
}

impl PartialOrd for VariableScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VariableScore {
    fn cmp(&self, other: &Self) -> Ordering {
        // fewer remaining values goes first
        if self.remaining != other.remaining {
            return self.remaining.cmp(&other.remaining);
        }
        // more neighbours goes first
        other.degree.cmp(&self.degree)
    }
}

#[derive(Eq, PartialEq, Debug)]
pub(crate) struct ValueScore {
    conflicts: usize,
    fillability: usize,
    word: String,
}

impl PartialOrd for ValueScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ValueScore {
    fn cmp(&self, other: &Self) -> Ordering {
        // ruling out fewer neighbour values goes first
        if self.conflicts != other.conflicts {
            return self.conflicts.cmp(&other.conflicts);
        }
        // higher fillability goes first
        if self.fillability != other.fillability {
            return other.fillability.cmp(&self.fillability);
        }
        self.word.cmp(&other.word)
    }
}

pub(crate) fn score_variable(
    puzzle: &Puzzle,
    domains: &Domains,
    variable: &Variable,
) -> VariableScore {
    VariableScore {
        remaining: domains.len(variable),
        degree: puzzle.neighbors(variable).len(),
    }
}

/// Minimum remaining values, ties to the variable with the most neighbours,
/// then to the earliest in puzzle order.
pub fn select_unassigned_variable(
    puzzle: &Puzzle,
    domains: &Domains,
    assignment: &Assignment,
) -> Option<Variable> {
    puzzle
        .variables()
        .iter()
        .filter(|variable| !assignment.contains(variable))
        .min_by_key(|variable| score_variable(puzzle, domains, variable))
        .copied()
}

/// Number of words across all neighbour domains that `word` would rule out
/// by disagreeing at the crossing.
pub(crate) fn count_conflicts(
    word: &str,
    crossings: &[(usize, usize, FxHashMap<u8, usize>)],
) -> usize {
    crossings
        .iter()
        .map(|(index, total, letters)| {
            let agreeing = word
                .as_bytes()
                .get(*index)
                .and_then(|letter| letters.get(letter))
                .copied()
                .unwrap_or(0);
            total - agreeing
        })
        .sum()
}

/// The domain of `variable`, least constraining value first.
pub fn order_domain_values(
    puzzle: &Puzzle,
    domains: &Domains,
    variable: &Variable,
    bigrams: &Bigrams,
) -> Vec<String> {
    // per neighbour: our index at the crossing, its domain size, and how many
    // of its words carry each letter there
    let crossings: Vec<(usize, usize, FxHashMap<u8, usize>)> = puzzle
        .neighbors(variable)
        .iter()
        .filter_map(|neighbor| {
            let (i, j) = puzzle.overlap(variable, neighbor)?;
            let mut letters = FxHashMap::default();
            for word in domains.iter(neighbor) {
                if let Some(letter) = word.as_bytes().get(j) {
                    *letters.entry(*letter).or_insert(0) += 1;
                }
            }
            Some((i, domains.len(neighbor), letters))
        })
        .collect();

    let mut scored: Vec<ValueScore> = domains
        .iter(variable)
        .map(|word| ValueScore {
            conflicts: count_conflicts(word, &crossings),
            fillability: fillability(word, bigrams),
            word: word.clone(),
        })
        .collect();
    scored.sort();

    scored.into_iter().map(|score| score.word).collect()
}
