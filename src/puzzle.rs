use crate::{
    crossword::{CrosswordWordIterator, BLANK},
    error::PuzzleError,
    parse::{parse_overlaps, parse_variables, Overlap, Variable},
    words::normalize_words,
    Crossword, FxHashMap, FxHashSet,
};

/// Everything the solver needs to know about a crossword: its variables,
/// how they cross, the letters already written in and the words to choose from.
#[derive(Debug, Clone)]
pub struct Puzzle {
    variables: Vec<Variable>,
    overlaps: FxHashMap<(Variable, Variable), Overlap>,
    neighbors: FxHashMap<Variable, Vec<Variable>>,
    patterns: FxHashMap<Variable, Vec<Option<u8>>>,
    words: Vec<String>,
    crossword: Option<Crossword>,
}

impl Puzzle {
    /// Builds a puzzle from explicit parts. Each overlap is given once as
    /// `(a, b, (index_in_a, index_in_b))`; the reverse direction is implied.
    pub fn new<I, S>(
        variables: Vec<Variable>,
        overlaps: Vec<(Variable, Variable, Overlap)>,
        words: I,
    ) -> Result<Puzzle, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if variables.is_empty() {
            return Err(PuzzleError::NoVariables);
        }

        let mut known = FxHashSet::default();
        for variable in &variables {
            if variable.length == 0 {
                return Err(PuzzleError::ZeroLengthVariable(*variable));
            }
            if variable.cell(variable.length - 1).is_none() {
                return Err(PuzzleError::VariableOutOfRange(*variable));
            }
            if !known.insert(*variable) {
                return Err(PuzzleError::DuplicateVariable(*variable));
            }
        }

        let mut overlap_table = FxHashMap::default();
        let mut neighbors: FxHashMap<Variable, Vec<Variable>> =
            variables.iter().map(|v| (*v, vec![])).collect();

        for (a, b, (index_a, index_b)) in overlaps {
            // Lengths come from the registered variables, not the overlap record.
            let a = *known.get(&a).ok_or(PuzzleError::UnknownVariable(a))?;
            let b = *known.get(&b).ok_or(PuzzleError::UnknownVariable(b))?;
            if a == b {
                return Err(PuzzleError::SelfOverlap(a));
            }
            if index_a >= a.length || index_b >= b.length {
                return Err(PuzzleError::OverlapOutOfBounds {
                    a,
                    b,
                    index_a,
                    index_b,
                });
            }

            if overlap_table.insert((a, b), (index_a, index_b)).is_none() {
                neighbors.entry(a).or_default().push(b);
                neighbors.entry(b).or_default().push(a);
            }
            overlap_table.insert((b, a), (index_b, index_a));
        }

        let mut raw = vec![];
        for word in words {
            let word = word.as_ref();
            if !word.is_ascii() {
                return Err(PuzzleError::NonAsciiWord(word.to_owned()));
            }
            raw.push(word.to_owned());
        }
        let words = normalize_words(raw);
        if words.is_empty() {
            return Err(PuzzleError::EmptyWordList);
        }

        Ok(Puzzle {
            variables,
            overlaps: overlap_table,
            neighbors,
            patterns: FxHashMap::default(),
            words,
            crossword: None,
        })
    }

    /// Derives variables and overlaps from a grid. Letters already in the grid
    /// become fixed letters of the variables that cover them.
    pub fn from_crossword<I, S>(crossword: Crossword, words: I) -> Result<Puzzle, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let variables = parse_variables(&crossword);
        let overlaps = parse_overlaps(&variables);
        let mut puzzle = Puzzle::new(variables, overlaps, words)?;

        for variable in &puzzle.variables {
            let iter = CrosswordWordIterator::new(&crossword, variable);
            if iter.is_blank() {
                continue;
            }
            let pattern = iter
                .map(|c| if c as u8 == BLANK { None } else { Some(c as u8) })
                .collect();
            puzzle.patterns.insert(*variable, pattern);
        }

        puzzle.crossword = Some(crossword);
        Ok(puzzle)
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The grid this puzzle was derived from, if any.
    pub fn crossword(&self) -> Option<&Crossword> {
        self.crossword.as_ref()
    }

    /// `(index_in_x, index_in_y)` when `x` and `y` cross.
    pub fn overlap(&self, x: &Variable, y: &Variable) -> Option<Overlap> {
        self.overlaps.get(&(*x, *y)).copied()
    }

    pub fn neighbors(&self, variable: &Variable) -> &[Variable] {
        self.neighbors
            .get(variable)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every ordered pair of neighbors, both directions, in variable order.
    pub fn arcs(&self) -> Vec<(Variable, Variable)> {
        self.variables
            .iter()
            .flat_map(|x| self.neighbors(x).iter().map(move |y| (*x, *y)))
            .collect()
    }

    /// Unary constraint: right length and agreement with any fixed letters.
    pub fn fits(&self, variable: &Variable, word: &str) -> bool {
        if word.len() != variable.length {
            return false;
        }
        match self.patterns.get(variable) {
            Some(pattern) => pattern
                .iter()
                .zip(word.bytes())
                .all(|(fixed, c)| fixed.map_or(true, |fixed| fixed == c)),
            None => true,
        }
    }
}
