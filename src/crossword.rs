use crate::{assignment::Assignment, error::PuzzleError, parse::Variable};
use std::fmt;

pub(crate) const BLOCK: u8 = b'#';
pub(crate) const BLANK: u8 = b'_';

/// A rectangular grid of blocked, blank and lettered cells, stored row-major.
#[derive(PartialEq, Eq, Debug, Hash, Clone)]
pub struct Crossword {
    pub(crate) contents: Vec<u8>,
    pub(crate) width: usize,
    pub(crate) height: usize,
}

impl Crossword {
    /// Parses a structure where `_` is a blank cell, a letter is a pre-filled
    /// cell and anything else is blocked. Short rows are padded with blocks.
    pub fn new(contents: &str) -> Result<Crossword, PuzzleError> {
        let mut rows: Vec<&str> = contents
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect();
        while rows.first().map_or(false, |row| row.is_empty()) {
            rows.remove(0);
        }
        while rows.last().map_or(false, |row| row.is_empty()) {
            rows.pop();
        }

        let width = rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0);
        let height = rows.len();
        if width == 0 || height == 0 {
            return Err(PuzzleError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            let mut row_len = 0;
            for c in row.chars() {
                cells.push(match c {
                    '_' => BLANK,
                    c if c.is_ascii_alphabetic() => c.to_ascii_uppercase() as u8,
                    _ => BLOCK,
                });
                row_len += 1;
            }
            cells.extend(std::iter::repeat(BLOCK).take(width - row_len));
        }

        Ok(Crossword {
            contents: cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn cell(&self, row: usize, col: usize) -> u8 {
        self.contents[row * self.width + col]
    }

    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cell(row, col) != BLOCK
    }

    /// Writes `word` along `variable`, leaving the original untouched.
    pub fn fill_one_word(&self, variable: &Variable, word: &str) -> Crossword {
        let mut contents = self.contents.clone();
        for ((row, col), c) in variable.cells().zip(word.bytes()) {
            if row < self.height && col < self.width {
                contents[row * self.width + col] = c.to_ascii_uppercase();
            }
        }

        Crossword {
            contents,
            ..*self
        }
    }

    /// Projects an assignment onto the grid. Cells no variable covers keep
    /// their current contents.
    pub fn fill(&self, assignment: &Assignment) -> Crossword {
        assignment
            .iter()
            .fold(self.clone(), |crossword, (variable, word)| {
                crossword.fill_one_word(variable, word)
            })
    }
}

/// The letters currently written along one variable, `_` for blanks.
#[derive(Clone, Debug)]
pub struct CrosswordWordIterator<'s> {
    crossword: &'s Crossword,
    variable: &'s Variable,
    index: usize,
}

impl<'s> CrosswordWordIterator<'s> {
    pub fn new(crossword: &'s Crossword, variable: &'s Variable) -> CrosswordWordIterator<'s> {
        CrosswordWordIterator {
            crossword,
            variable,
            index: 0,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.clone().all(|c| c == BLANK as char)
    }
}

impl Iterator for CrosswordWordIterator<'_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let (row, col) = self.variable.cell(self.index)?;
        if !self.crossword.is_fillable(row, col) {
            return None;
        }
        self.index += 1;
        Some(self.crossword.cell(row, col) as char)
    }
}

impl fmt::Display for Crossword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                match self.cell(row, col) {
                    BLOCK => write!(f, "█")?,
                    BLANK => write!(f, " ")?,
                    c => write!(f, "{}", c as char)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum Direction {
    Across,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}
