use crate::{parse::Variable, puzzle::Puzzle, FxHashMap, FxHashSet};

pub type Domain = FxHashSet<String>;

/// A position in the removal trail to roll back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Candidate words per variable. Every removal is logged so the store can be
/// put back exactly as it was at a [`Checkpoint`].
#[derive(Debug, Clone)]
pub struct Domains {
    domains: FxHashMap<Variable, Domain>,
    trail: Vec<(Variable, String)>,
}

impl Domains {
    /// Every variable starts with the whole word list.
    pub fn new(puzzle: &Puzzle) -> Domains {
        let all: Domain = puzzle.words().iter().cloned().collect();
        Domains {
            domains: puzzle
                .variables()
                .iter()
                .map(|v| (*v, all.clone()))
                .collect(),
            trail: vec![],
        }
    }

    pub fn get(&self, variable: &Variable) -> Option<&Domain> {
        self.domains.get(variable)
    }

    /// Number of candidates left, zero for unknown variables.
    pub fn len(&self, variable: &Variable) -> usize {
        self.domains.get(variable).map_or(0, Domain::len)
    }

    pub fn is_empty(&self, variable: &Variable) -> bool {
        self.len(variable) == 0
    }

    pub fn iter(&self, variable: &Variable) -> impl Iterator<Item = &String> {
        self.domains.get(variable).into_iter().flatten()
    }

    /// Removes every candidate for which `keep` is false, returning how many went.
    pub fn retain<F>(&mut self, variable: &Variable, mut keep: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        let domain = match self.domains.get_mut(variable) {
            Some(domain) => domain,
            None => return 0,
        };
        let removed: Vec<String> = domain
            .iter()
            .filter(|w| !keep(w.as_str()))
            .cloned()
            .collect();
        for word in &removed {
            domain.remove(word);
        }
        let count = removed.len();
        self.trail.extend(removed.into_iter().map(|w| (*variable, w)));
        count
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.trail.len())
    }

    /// Puts back everything removed since `checkpoint`.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        while self.trail.len() > checkpoint.0 {
            if let Some((variable, word)) = self.trail.pop() {
                self.domains.entry(variable).or_default().insert(word);
            }
        }
    }

    /// Drops the undo history; removals made so far become permanent.
    pub fn commit(&mut self) {
        self.trail.clear();
    }
}
