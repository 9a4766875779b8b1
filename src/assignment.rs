use std::collections::{btree_map, BTreeMap};

use crate::{parse::Variable, puzzle::Puzzle, FxHashSet};

/// Words chosen so far, keyed by variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    words: BTreeMap<Variable, String>,
}

impl Assignment {
    pub fn assign(&mut self, variable: Variable, word: String) -> Option<String> {
        self.words.insert(variable, word)
    }

    pub fn unassign(&mut self, variable: &Variable) -> Option<String> {
        self.words.remove(variable)
    }

    pub fn get(&self, variable: &Variable) -> Option<&str> {
        self.words.get(variable).map(String::as_str)
    }

    pub fn contains(&self, variable: &Variable) -> bool {
        self.words.contains_key(variable)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Variable, String> {
        self.words.iter()
    }

    /// Every variable of the puzzle has a word.
    pub fn is_complete(&self, puzzle: &Puzzle) -> bool {
        puzzle.variables().iter().all(|v| self.contains(v))
    }

    /// Right lengths, no word used twice, and crossing words agree.
    pub fn is_consistent(&self, puzzle: &Puzzle) -> bool {
        let mut seen = FxHashSet::default();

        for (variable, word) in &self.words {
            if word.len() != variable.length() || !seen.insert(word.as_str()) {
                return false;
            }

            for neighbor in puzzle.neighbors(variable) {
                let other = match self.get(neighbor) {
                    Some(other) => other,
                    None => continue,
                };
                let agree = puzzle.overlap(variable, neighbor).map_or(true, |(i, j)| {
                    word.as_bytes().get(i) == other.as_bytes().get(j)
                });
                if !agree {
                    return false;
                }
            }
        }

        true
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = (&'a Variable, &'a String);
    type IntoIter = btree_map::Iter<'a, Variable, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
