use crate::{crossword::Direction, Crossword, FxHashMap};
use std::{cmp::Ordering, fmt, hash::Hash};

/// A maximal run of fillable cells. Identity is the start cell and direction;
/// the length rides along.
#[derive(Debug, Clone, Copy)]
pub struct Variable {
    pub(crate) start_row: usize,
    pub(crate) start_col: usize,
    pub(crate) length: usize,
    pub(crate) direction: Direction,
}

impl Variable {
    pub fn new(
        start_row: usize,
        start_col: usize,
        direction: Direction,
        length: usize,
    ) -> Variable {
        Variable {
            start_row,
            start_col,
            length,
            direction,
        }
    }

    pub fn start_row(&self) -> usize {
        self.start_row
    }

    pub fn start_col(&self) -> usize {
        self.start_col
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The grid coordinates of the `index`th letter, if within the variable
    /// and representable.
    pub fn cell(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.length {
            return None;
        }
        match self.direction {
            Direction::Across => Some((self.start_row, self.start_col.checked_add(index)?)),
            Direction::Down => Some((self.start_row.checked_add(index)?, self.start_col)),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).filter_map(move |index| self.cell(index))
    }

    fn key(&self) -> (usize, usize, Direction) {
        (self.start_row, self.start_col, self.direction)
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} : {}",
            self.start_row, self.start_col, self.direction, self.length
        )
    }
}

/// Character positions `(index_in_a, index_in_b)` where two variables share a cell.
pub type Overlap = (usize, usize);

/// Finds every maximal run of two or more fillable cells, across runs first
/// in row-major order, then down runs in column-major order.
pub(crate) fn parse_variables(crossword: &Crossword) -> Vec<Variable> {
    let mut result = vec![];

    for row in 0..crossword.height {
        let mut start_col = None;
        for col in 0..=crossword.width {
            if crossword.is_fillable(row, col) {
                // found a cell; is it our first?
                if start_col.is_none() {
                    start_col = Some(col);
                }
                continue;
            }
            if let Some(start) = start_col.take() {
                if col - start >= 2 {
                    result.push(Variable::new(row, start, Direction::Across, col - start));
                }
            }
        }
    }

    for col in 0..crossword.width {
        let mut start_row = None;
        for row in 0..=crossword.height {
            if crossword.is_fillable(row, col) {
                if start_row.is_none() {
                    start_row = Some(row);
                }
                continue;
            }
            if let Some(start) = start_row.take() {
                if row - start >= 2 {
                    result.push(Variable::new(start, col, Direction::Down, row - start));
                }
            }
        }
    }

    result
}

/// Maps every covered cell to the variable covering it in each direction.
pub(crate) fn build_lookup(
    variables: &[Variable],
) -> FxHashMap<(Direction, usize, usize), (Variable, usize)> {
    let mut result = FxHashMap::default();

    for variable in variables {
        for (index, (row, col)) in variable.cells().enumerate() {
            result.insert((variable.direction, row, col), (*variable, index));
        }
    }

    result
}

/// Every crossing between an across and a down variable, keyed one way only:
/// `(across, down) -> (index_in_across, index_in_down)`.
pub(crate) fn parse_overlaps(variables: &[Variable]) -> Vec<(Variable, Variable, Overlap)> {
    let lookup = build_lookup(variables);
    let mut result = vec![];

    for across in variables.iter().filter(|v| v.direction == Direction::Across) {
        for (index, (row, col)) in across.cells().enumerate() {
            if let Some((down, down_index)) = lookup.get(&(Direction::Down, row, col)) {
                result.push((*across, *down, (index, *down_index)));
            }
        }
    }

    result
}
